use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::Result;
use crate::io::decode::load_sample;
use crate::raster::rasterize;
use crate::sample::{ColorMapping, ImageSample};
use crate::settings::Settings;
use crate::sizing::{display_size, raster_grid, DisplaySize};

/// Plot decorations drawn around a pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chrome {
    pub axes: bool,
    pub toolbar: bool,
}

impl Chrome {
    /// No axis ticks, no toolbar.
    pub const HIDDEN: Chrome = Chrome {
        axes: false,
        toolbar: false,
    };
}

/// One side of a comparison: a rasterized sample ready for display.
#[derive(Clone, Debug)]
pub struct Pane {
    /// File name of the source image.
    pub label: String,
    /// Shape of the decoded source, before rasterization.
    pub source_shape: Vec<usize>,
    pub raster: ImageSample,
    pub color_mapping: ColorMapping,
    pub display: DisplaySize,
    pub chrome: Chrome,
}

impl Pane {
    /// Decode `path` and prepare it for display under `settings`.
    pub fn prepare(path: &Path, settings: &Settings) -> Result<Self> {
        let sample = load_sample(path)?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self::from_sample(label, sample, settings))
    }

    pub fn from_sample(label: impl Into<String>, sample: ImageSample, settings: &Settings) -> Self {
        let (h, w) = (sample.height(), sample.width());
        let shown = display_size(settings, h, w);
        let (rows, cols) = raster_grid(settings.raster_resolution, h, w);
        let label = label.into();
        debug!(
            label = %label,
            shape = ?sample.shape(),
            raster = ?(rows, cols),
            size = %shown,
            "prepared pane"
        );

        Self {
            label,
            source_shape: sample.shape(),
            color_mapping: sample.color_mapping(),
            raster: rasterize(&sample, rows, cols),
            display: shown,
            chrome: Chrome::HIDDEN,
        }
    }

    /// `(rows, cols)` of the internal raster grid.
    pub fn raster_size(&self) -> (usize, usize) {
        (self.raster.height(), self.raster.width())
    }

    /// Convert the raster grid to 8-bit RGBA at raster resolution.
    ///
    /// Gray panes stretch the sample's value range over the full gray ramp;
    /// a constant image maps to black. Native panes scale [0, 1] to 0..255.
    pub fn to_rgba8(&self) -> RgbaImage {
        let (rows, cols) = self.raster_size();
        match &self.raster {
            ImageSample::Gray(data) => {
                let (lo, hi) = self.raster.value_range();
                let span = hi - lo;
                RgbaImage::from_fn(cols as u32, rows as u32, |x, y| {
                    let v = data[[y as usize, x as usize]];
                    let norm = if span > 0.0 { (v - lo) / span } else { 0.0 };
                    let g = to_u8(norm);
                    Rgba([g, g, g, 255])
                })
            }
            ImageSample::Rgb(data) => RgbaImage::from_fn(cols as u32, rows as u32, |x, y| {
                let (row, col) = (y as usize, x as usize);
                Rgba([
                    to_u8(data[[row, col, 0]]),
                    to_u8(data[[row, col, 1]]),
                    to_u8(data[[row, col, 2]]),
                    255,
                ])
            }),
        }
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
