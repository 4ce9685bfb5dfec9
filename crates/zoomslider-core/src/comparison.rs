use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::consts::{BACKGROUND_COLOR, SLIDER_COLOR, SLIDER_THICKNESS};
use crate::pane::Pane;
use crate::sizing::DisplaySize;

/// Two panes overlaid with a draggable divider.
///
/// Left of the divider shows the left pane, right of it the right pane. The
/// view takes the display size of the left pane. Each pane is drawn at its
/// own display size, anchored top-left and clipped to the view.
#[derive(Clone, Debug)]
pub struct ComparisonView {
    pub left: Pane,
    pub right: Pane,
    pub size: DisplaySize,
    pub slider_color: [u8; 3],
}

impl ComparisonView {
    pub fn new(left: Pane, right: Pane) -> Self {
        Self {
            size: left.display,
            left,
            right,
            slider_color: SLIDER_COLOR,
        }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Display column of the divider for a split fraction (clamped to [0, 1]).
    pub fn divider_column(&self, split: f32) -> u32 {
        let (w, _) = self.size.pixels();
        (split.clamp(0.0, 1.0) * w as f32).round() as u32
    }

    /// Render the composite at display size.
    pub fn render(&self, split: f32) -> RgbaImage {
        let (w, h) = self.size.pixels();
        if w == 0 || h == 0 {
            return RgbaImage::new(w, h);
        }

        let left = pane_image(&self.left);
        let right = pane_image(&self.right);
        let divider = self.divider_column(split);
        let before = SLIDER_THICKNESS / 2;
        let after = SLIDER_THICKNESS - before;
        let [r, g, b] = self.slider_color;
        let [br, bg, bb] = BACKGROUND_COLOR;
        let background = Rgba([br, bg, bb, 255]);

        RgbaImage::from_fn(w, h, |x, y| {
            if x + before >= divider && x < divider + after {
                return Rgba([r, g, b, 255]);
            }
            let pane = if x < divider { &left } else { &right };
            pane.get_pixel_checked(x, y).copied().unwrap_or(background)
        })
    }
}

/// A pane's RGBA8 raster at its own display size.
fn pane_image(pane: &Pane) -> RgbaImage {
    let (w, h) = pane.display.pixels();
    if w == 0 || h == 0 {
        return RgbaImage::new(w, h);
    }
    scale_to(&pane.to_rgba8(), w, h)
}

/// Nearest-neighbour display scaling.
fn scale_to(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.width() == 0 || img.height() == 0 {
        return RgbaImage::new(width, height);
    }
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, FilterType::Nearest)
}
