use crate::settings::{Settings, SizingPolicy};

/// On-screen size of a pane or comparison view, in display pixels.
///
/// Kept signed so that non-positive settings pass through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

impl DisplaySize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Pixel extent actually drawn; non-positive dimensions collapse to zero.
    pub fn pixels(&self) -> (u32, u32) {
        (self.width.max(0) as u32, self.height.max(0) as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl std::fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// `round(display_height * (source_width / source_height))`.
pub fn aspect_locked_width(display_height: i32, source_height: usize, source_width: usize) -> i32 {
    if source_height == 0 {
        return 0;
    }
    let aspect_ratio = source_width as f64 / source_height as f64;
    (display_height as f64 * aspect_ratio).round() as i32
}

/// Compute the on-screen size of a source of shape `(source_height, source_width)`.
pub fn display_size(settings: &Settings, source_height: usize, source_width: usize) -> DisplaySize {
    match settings.sizing {
        SizingPolicy::AspectLocked => DisplaySize::new(
            aspect_locked_width(settings.display_height, source_height, source_width),
            settings.display_height,
        ),
        SizingPolicy::IndependentDimensions => {
            DisplaySize::new(settings.display_width, settings.display_height)
        }
    }
}

/// Compute the `(rows, cols)` of the internal raster grid.
///
/// The longer axis is capped at the raster resolution (at least 1) and the
/// source aspect ratio is kept. The grid is never larger than the source.
pub fn raster_grid(
    raster_resolution: Option<i32>,
    source_height: usize,
    source_width: usize,
) -> (usize, usize) {
    let Some(resolution) = raster_resolution else {
        return (source_height, source_width);
    };
    let limit = resolution.max(1) as usize;
    let longer = source_height.max(source_width);
    if longer <= limit || source_height == 0 || source_width == 0 {
        return (source_height, source_width);
    }

    let scale = limit as f64 / longer as f64;
    let rows = ((source_height as f64 * scale).round() as usize).clamp(1, source_height);
    let cols = ((source_width as f64 * scale).round() as usize).clamp(1, source_width);
    (rows, cols)
}
