/// Page and window title.
pub const APP_TITLE: &str = "ZoomSlider";

/// Directory the file picker is restricted to unless overridden.
pub const DEFAULT_IMAGES_DIR: &str = "./Images/";

/// Default on-screen height of a pane, in pixels.
pub const DEFAULT_DISPLAY_HEIGHT: i32 = 650;

/// Default on-screen width of a pane when dimensions are set independently.
pub const DEFAULT_DISPLAY_WIDTH: i32 = 650;

/// Default length of the longer raster axis when dimensions are set independently.
pub const DEFAULT_RASTER_RESOLUTION: i32 = 1000;

/// Number of files a comparison needs.
pub const REQUIRED_SELECTION: usize = 2;

/// Text shown in the main area while a load is in progress.
pub const LOADING_PLACEHOLDER: &str = "Converting images...";

/// Divider color of the swipe view (red).
pub const SLIDER_COLOR: [u8; 3] = [255, 0, 0];

/// Fill of view pixels outside a pane's own display extent.
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];

/// Divider thickness in display pixels.
pub const SLIDER_THICKNESS: u32 = 2;

/// Initial divider position as a fraction of the view width.
pub const DEFAULT_SPLIT: f32 = 0.5;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a color sample (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;
