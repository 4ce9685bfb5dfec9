use std::path::{Path, PathBuf};

use image::{GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

/// Write an 8-bit grayscale PNG with a diagonal ramp `(x + y) % 256`.
pub fn write_gray(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write an 8-bit RGB PNG with `(x, y, 128)` pixels (mod 256).
pub fn write_rgb(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write an 8-bit RGBA PNG, half-transparent.
pub fn write_rgba(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_fn(width, height, |_, _| Rgba([255, 0, 0, 128]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write an 8-bit luma+alpha PNG, which decodes to a 2-channel array.
pub fn write_luma_alpha(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img: ImageBuffer<LumaA<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |_, _| LumaA([200, 255]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
