mod actions;
mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use zoomslider_core::consts::{APP_TITLE, DEFAULT_IMAGES_DIR};
use zoomslider_core::controller::ViewerController;
use zoomslider_core::settings::{Settings, SizingPolicy};

#[derive(Parser)]
#[command(name = "zoomslider-gui", about = "Compare two images with a swipe slider")]
#[command(version)]
struct Args {
    /// Directory the file picker lists
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Read initial settings from a TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with independent width/height sizing
    #[arg(long)]
    independent: bool,
}

fn initial_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None if args.independent => Settings::independent(),
        None => Settings::default(),
    };
    if args.independent {
        settings.sizing = SizingPolicy::IndependentDimensions;
    }
    Ok(settings)
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = initial_settings(&args).unwrap_or_else(|e| {
        tracing::error!("{e:#}; using default settings");
        Settings::default()
    });
    let controller = ViewerController::new(args.images_dir, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app::ZoomSliderApp::new(controller)))),
    )
}
