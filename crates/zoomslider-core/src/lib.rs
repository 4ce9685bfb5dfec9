pub mod comparison;
pub mod consts;
pub mod controller;
pub mod error;
pub mod io;
pub mod pane;
pub mod raster;
pub mod sample;
pub mod settings;
pub mod sizing;
