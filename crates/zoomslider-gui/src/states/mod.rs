mod swipe;
mod ui;

pub use swipe::{ComparisonTextures, SwipeState};
pub use ui::UIState;
