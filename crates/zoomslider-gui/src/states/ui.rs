use std::path::PathBuf;

/// Overall UI state outside the controller.
#[derive(Default)]
pub struct UIState {
    /// Files found in the images directory.
    pub files: Vec<PathBuf>,
    /// Why the images directory could not be listed, if it could not.
    pub files_error: Option<String>,

    /// A load was started and waits for the placeholder to be drawn.
    pub pending_load: bool,
    /// The loading placeholder has been drawn at least once.
    pub placeholder_shown: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
