use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::comparison::ComparisonView;
use crate::consts::LOADING_PLACEHOLDER;
use crate::error::{Result, ZoomSliderError};
use crate::io::decode::list_image_files;
use crate::pane::Pane;
use crate::settings::Settings;

/// What the main content area currently shows.
#[derive(Clone, Debug, Default)]
#[allow(clippy::large_enum_variant)]
pub enum ViewState {
    /// Title, file picker and load action.
    #[default]
    Idle,
    /// Placeholder while images are being converted.
    Loading,
    /// The swipe comparison of two images.
    Comparing(ComparisonView),
}

/// Inputs to the view state machine.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum ViewEvent {
    LoadStarted,
    LoadSucceeded(ComparisonView),
    LoadFailed,
    Reset,
}

/// Payload-free view of [`ViewState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Comparing,
}

impl std::fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Comparing => write!(f, "Comparing"),
        }
    }
}

impl ViewState {
    /// Pure transition function. Any failure or reset lands in `Idle`.
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::LoadStarted => ViewState::Loading,
            ViewEvent::LoadSucceeded(view) => ViewState::Comparing(view),
            ViewEvent::LoadFailed | ViewEvent::Reset => ViewState::Idle,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match self {
            Self::Idle => ViewPhase::Idle,
            Self::Loading => ViewPhase::Loading,
            Self::Comparing(_) => ViewPhase::Comparing,
        }
    }

    pub fn comparison(&self) -> Option<&ComparisonView> {
        match self {
            Self::Comparing(view) => Some(view),
            _ => None,
        }
    }
}

/// Content the host should put in the main area, replacing whatever was there.
#[derive(Clone, Copy, Debug)]
pub enum MainContent<'a> {
    Picker,
    Placeholder(&'static str),
    Comparison(&'a ComparisonView),
}

/// Session controller: owns the file selection, the settings and the view.
pub struct ViewerController {
    images_dir: PathBuf,
    selection: Vec<PathBuf>,
    settings: Settings,
    state: ViewState,
    last_error: Option<String>,
}

impl ViewerController {
    pub fn new(images_dir: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            images_dir: images_dir.into(),
            selection: Vec::new(),
            settings,
            state: ViewState::Idle,
            last_error: None,
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Files the picker offers: the files directly inside the images directory.
    pub fn available_files(&self) -> Result<Vec<PathBuf>> {
        list_image_files(&self.images_dir)
    }

    pub fn selection(&self) -> &[PathBuf] {
        &self.selection
    }

    /// Replace the selection. The first path becomes the left pane.
    pub fn select(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.selection = paths.into_iter().collect();
    }

    /// Replace the selection with the `paths` that are files directly inside
    /// the images directory. Returns the rejected paths.
    pub fn select_in_dir(&mut self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        let dir = self.images_dir.canonicalize().ok();
        let (accepted, rejected): (Vec<_>, Vec<_>) = paths.into_iter().partition(|path| {
            let parent = path.parent().and_then(|p| p.canonicalize().ok());
            path.is_file() && dir.is_some() && parent == dir
        });
        self.selection = accepted;
        rejected
    }

    /// Add `path` to the selection, or remove it if already selected.
    pub fn toggle(&mut self, path: &Path) {
        if let Some(pos) = self.selection.iter().position(|p| p == path) {
            self.selection.remove(pos);
        } else {
            self.selection.push(path.to_path_buf());
        }
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.selection.iter().any(|p| p == path)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.phase()
    }

    pub fn comparison(&self) -> Option<&ComparisonView> {
        self.state.comparison()
    }

    /// Message of the most recent failed load, cleared by the next load or reset.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn content(&self) -> MainContent<'_> {
        match &self.state {
            ViewState::Idle => MainContent::Picker,
            ViewState::Loading => MainContent::Placeholder(LOADING_PLACEHOLDER),
            ViewState::Comparing(view) => MainContent::Comparison(view),
        }
    }

    fn apply(&mut self, event: ViewEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Load the two selected files and show them as a comparison.
    pub fn load(&mut self) -> Result<&ComparisonView> {
        self.begin_load();
        self.finish_load()
    }

    /// Enter `Loading`, so the host can show the placeholder before converting.
    pub fn begin_load(&mut self) {
        self.last_error = None;
        self.apply(ViewEvent::LoadStarted);
    }

    /// Convert the selected files. On failure the view returns to `Idle`.
    pub fn finish_load(&mut self) -> Result<&ComparisonView> {
        match self.prepare() {
            Ok(view) => {
                info!(
                    left = %view.left.label,
                    right = %view.right.label,
                    size = %view.size,
                    "comparison ready"
                );
                self.apply(ViewEvent::LoadSucceeded(view));
                match &self.state {
                    ViewState::Comparing(view) => Ok(view),
                    other => Err(ZoomSliderError::NoComparison { phase: other.phase() }),
                }
            }
            Err(e) => {
                warn!("load failed: {e}");
                self.last_error = Some(e.to_string());
                self.apply(ViewEvent::LoadFailed);
                Err(e)
            }
        }
    }

    /// Discard any comparison and show the picker again.
    pub fn reset(&mut self) {
        info!(from = %self.phase(), "reset view");
        self.last_error = None;
        self.apply(ViewEvent::Reset);
    }

    fn prepare(&self) -> Result<ComparisonView> {
        let [left, right] = self.selection.as_slice() else {
            return Err(ZoomSliderError::InsufficientSelection {
                selected: self.selection.len(),
            });
        };
        info!(
            left = %left.display(),
            right = %right.display(),
            sizing = %self.settings.sizing,
            "converting images"
        );

        let left = Pane::prepare(left, &self.settings)?;
        let right = Pane::prepare(right, &self.settings)?;
        Ok(ComparisonView::new(left, right))
    }
}
