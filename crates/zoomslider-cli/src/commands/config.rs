use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zoomslider_core::settings::Settings;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit defaults for independent width/height sizing
    #[arg(long)]
    pub independent: bool,
}

/// Print or save default Settings as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let settings = if args.independent {
        Settings::independent()
    } else {
        Settings::default()
    };
    let toml_str = settings.to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
