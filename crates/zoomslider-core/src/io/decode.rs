use std::path::{Path, PathBuf};

use image::DynamicImage;
use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use crate::error::{Result, ZoomSliderError};
use crate::sample::ImageSample;

/// Decode an image file into a dynamic-rank array.
///
/// Single-channel sources come back as `(height, width)`, everything else as
/// `(height, width, channels)` with the source channel count (2 for
/// luma+alpha, 3 for RGB, 4 for RGBA). Values are normalized to [0.0, 1.0].
pub fn decode_image(path: &Path) -> Result<ArrayD<f32>> {
    let img = image::open(path)?;
    let array = image_to_array(&img)?;
    debug!(path = %path.display(), shape = ?array.shape(), "decoded image");
    Ok(array)
}

/// Convert an already decoded image into a dynamic-rank array.
pub fn image_to_array(img: &DynamicImage) -> Result<ArrayD<f32>> {
    let h = img.height() as usize;
    let w = img.width() as usize;
    let channels = img.color().channel_count() as usize;

    let (shape, pixels) = match channels {
        1 => (vec![h, w], img.to_luma32f().into_raw()),
        2 => (vec![h, w, 2], img.to_luma_alpha32f().into_raw()),
        3 => (vec![h, w, 3], img.to_rgb32f().into_raw()),
        _ => (vec![h, w, 4], img.to_rgba32f().into_raw()),
    };

    ArrayD::from_shape_vec(IxDyn(&shape), pixels)
        .map_err(|_| ZoomSliderError::UnsupportedImageShape { shape })
}

/// Decode an image file and classify it as gray or color.
pub fn load_sample(path: &Path) -> Result<ImageSample> {
    ImageSample::from_array(decode_image(path)?)
}

/// List the files (not directories) directly inside `dir`, sorted by name.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
