use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zoomslider_core::settings::{Settings, SizingPolicy};

/// Display settings shared by the commands that size panes.
#[derive(Args, Clone, Debug)]
pub struct SettingsArgs {
    /// Read settings from a TOML file (flags below override it)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Size panes by explicit width and height instead of the source aspect ratio
    #[arg(long)]
    pub independent: bool,

    /// Display height in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Display width in pixels (independent sizing only)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    /// Longest raster axis in pixels; omit to rasterize at source resolution
    #[arg(long, allow_negative_numbers = true)]
    pub raster: Option<i32>,
}

impl SettingsArgs {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?,
            None if self.independent => Settings::independent(),
            None => Settings::default(),
        };

        if self.independent {
            settings.sizing = SizingPolicy::IndependentDimensions;
        }
        if let Some(height) = self.height {
            settings.display_height = height;
        }
        if let Some(width) = self.width {
            settings.display_width = width;
        }
        if self.raster.is_some() {
            settings.raster_resolution = self.raster;
        }
        Ok(settings)
    }
}
