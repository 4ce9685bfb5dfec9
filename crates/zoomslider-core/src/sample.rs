use ndarray::{s, Array2, Array3, ArrayD, Ix2, Ix3};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, ZoomSliderError};

/// How a pane maps sample values to screen colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMapping {
    /// Single-channel data rendered through a gray color map.
    Gray,
    /// RGB data rendered as-is.
    Native,
}

impl std::fmt::Display for ColorMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::Native => write!(f, "Native RGB"),
        }
    }
}

/// A decoded pixel grid. Values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub enum ImageSample {
    /// shape = (height, width)
    Gray(Array2<f32>),
    /// shape = (height, width, 3), RGB channel order
    Rgb(Array3<f32>),
}

impl ImageSample {
    /// Classify a decoded array by rank.
    ///
    /// Rank 2 is grayscale, rank 3 is color with the first three channels taken
    /// as RGB (a trailing alpha channel is dropped). Anything else, including a
    /// rank 3 array with fewer than three channels, is rejected with the
    /// offending shape.
    pub fn from_array(data: ArrayD<f32>) -> Result<Self> {
        let shape = data.shape().to_vec();
        match shape.len() {
            2 => data
                .into_dimensionality::<Ix2>()
                .map(Self::Gray)
                .map_err(|_| ZoomSliderError::UnsupportedImageShape { shape }),
            3 if shape[2] >= COLOR_CHANNEL_COUNT => {
                let data = data
                    .into_dimensionality::<Ix3>()
                    .map_err(|_| ZoomSliderError::UnsupportedImageShape {
                        shape: shape.clone(),
                    })?;
                let rgb = data.slice_move(s![.., .., ..COLOR_CHANNEL_COUNT]);
                Ok(Self::Rgb(rgb.as_standard_layout().into_owned()))
            }
            _ => Err(ZoomSliderError::UnsupportedImageShape { shape }),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Gray(data) => data.nrows(),
            Self::Rgb(data) => data.shape()[0],
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Gray(data) => data.ncols(),
            Self::Rgb(data) => data.shape()[1],
        }
    }

    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Gray(data) => data.shape().to_vec(),
            Self::Rgb(data) => data.shape().to_vec(),
        }
    }

    pub fn color_mapping(&self) -> ColorMapping {
        match self {
            Self::Gray(_) => ColorMapping::Gray,
            Self::Rgb(_) => ColorMapping::Native,
        }
    }

    /// Minimum and maximum sample value across all channels.
    pub fn value_range(&self) -> (f32, f32) {
        let init = (f32::INFINITY, f32::NEG_INFINITY);
        let fold = |(lo, hi): (f32, f32), &v: &f32| (lo.min(v), hi.max(v));
        match self {
            Self::Gray(data) => data.iter().fold(init, fold),
            Self::Rgb(data) => data.iter().fold(init, fold),
        }
    }
}
