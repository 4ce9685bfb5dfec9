use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoomSliderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image shape not recognized, needs to be 2 or 3 dimensions but found {shape:?}")]
    UnsupportedImageShape { shape: Vec<usize> },

    #[error("Select exactly 2 files ({selected} selected)")]
    InsufficientSelection { selected: usize },

    #[error("No comparison on display (view is {phase})")]
    NoComparison { phase: crate::controller::ViewPhase },

    #[error("Invalid settings: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ZoomSliderError>;
