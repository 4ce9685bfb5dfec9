use zoomslider_core::consts::DEFAULT_SPLIT;

/// GPU textures of the two panes on display.
pub struct ComparisonTextures {
    pub left: egui::TextureHandle,
    pub right: egui::TextureHandle,
}

/// Swipe widget state.
pub struct SwipeState {
    pub textures: Option<ComparisonTextures>,
    /// Divider position as a fraction of the view width.
    pub split: f32,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            textures: None,
            split: DEFAULT_SPLIT,
        }
    }
}

impl SwipeState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
