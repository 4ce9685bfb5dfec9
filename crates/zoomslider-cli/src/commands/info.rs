use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use zoomslider_core::io::decode::decode_image;
use zoomslider_core::pane::Pane;
use zoomslider_core::sample::ImageSample;

use super::settings::SettingsArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let settings = args.settings.resolve()?;
    let array = decode_image(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Shape:       {:?}", array.shape());

    let sample = ImageSample::from_array(array)?;
    let label = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let pane = Pane::from_sample(label, sample, &settings);
    let (rows, cols) = pane.raster_size();

    println!("Color map:   {}", pane.color_mapping);
    println!("Sizing:      {}", settings.sizing);
    println!("Raster:      {}x{}", cols, rows);
    println!("Display:     {}", pane.display);

    Ok(())
}
