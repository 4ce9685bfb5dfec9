use std::path::PathBuf;

/// User actions collected while drawing a frame and applied after it.
pub enum UiAction {
    /// Check or uncheck one file in the picker.
    Toggle(PathBuf),
    /// Replace the selection with files chosen in the native dialog.
    Select(Vec<PathBuf>),
    /// Re-read the images directory.
    RefreshFiles,
    /// "Load images" button.
    Load,
    /// "Reset" button.
    Reset,
}
