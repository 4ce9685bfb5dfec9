use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use zoomslider_core::consts::{DEFAULT_SPLIT, LOADING_PLACEHOLDER};
use zoomslider_core::controller::ViewerController;

use super::settings::SettingsArgs;
use crate::summary::print_view_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Image shown left of the divider
    pub left: PathBuf,

    /// Image shown right of the divider
    pub right: PathBuf,

    /// Divider position as a fraction of the view width
    #[arg(long, default_value_t = DEFAULT_SPLIT)]
    pub split: f32,

    /// Output file path
    #[arg(short, long, default_value = "comparison.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let settings = args.settings.resolve()?;
    let images_dir = args
        .left
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();

    let mut controller = ViewerController::new(images_dir, settings.clone());
    controller.select([args.left.clone(), args.right.clone()]);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(LOADING_PLACEHOLDER);
    pb.enable_steady_tick(Duration::from_millis(100));
    let loaded = controller.load();
    pb.finish_and_clear();
    let view = loaded?;

    print_view_summary(view, &settings, args.split);

    let image = view.render(args.split);
    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
