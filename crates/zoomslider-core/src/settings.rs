use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_RASTER_RESOLUTION};
use crate::error::{Result, ZoomSliderError};

/// How the on-screen size of a pane is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizingPolicy {
    /// Width follows the source aspect ratio from a single display height.
    #[default]
    AspectLocked,
    /// Width and height are both explicit; the aspect ratio is not preserved.
    IndependentDimensions,
}

impl std::fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AspectLocked => write!(f, "Aspect locked"),
            Self::IndependentDimensions => write!(f, "Independent dimensions"),
        }
    }
}

impl SizingPolicy {
    pub const ALL: [SizingPolicy; 2] = [Self::AspectLocked, Self::IndependentDimensions];
}

/// Numeric display settings read at load time.
///
/// Values are not validated: a zero or negative dimension is carried through
/// to rendering, which treats it as an empty view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sizing: SizingPolicy,
    pub display_height: i32,
    /// Only used with [`SizingPolicy::IndependentDimensions`].
    pub display_width: i32,
    /// Length of the longer axis of the internal raster grid.
    /// `None` keeps the source resolution.
    pub raster_resolution: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::AspectLocked,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            display_width: DEFAULT_DISPLAY_WIDTH,
            raster_resolution: None,
        }
    }
}

impl Settings {
    /// Defaults for independent width/height sizing with a raster resolution.
    pub fn independent() -> Self {
        Self {
            sizing: SizingPolicy::IndependentDimensions,
            raster_resolution: Some(DEFAULT_RASTER_RESOLUTION),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ZoomSliderError::Config(e.to_string()))
    }

    /// Read settings from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ZoomSliderError::Config(e.to_string()))
    }
}
