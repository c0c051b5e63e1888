use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fault_core::{Palette, TerrainConfig, TerrainEngine, save_png};

#[derive(Parser, Debug)]
#[command(name = "faultline")]
#[command(about = "Generate a fault-line terrain and save it as a PNG")]
struct Args {
    /// Grid width (minimum 5)
    #[arg(default_value_t = 512)]
    width: usize,

    /// Grid height (minimum 5)
    #[arg(default_value_t = 512)]
    height: usize,

    /// Worker threads (minimum 1)
    #[arg(default_value_t = 1)]
    threads: usize,

    /// Total faults across all threads (minimum 1)
    #[arg(default_value_t = 1000)]
    faults: usize,

    /// Output file path
    #[arg(long, default_value = "terrain.png")]
    output: PathBuf,

    /// Colour scheme: ocean or terrain
    #[arg(long, default_value = "ocean")]
    palette: Palette,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let requested = TerrainConfig::new(args.width, args.height, args.threads, args.faults);
    let config = requested.clamped();
    if config != requested {
        log::warn!("arguments below the minimum were raised: {:?}", config);
    }

    let engine = TerrainEngine::new(config)?;
    let terrain = engine.generate()?;

    save_png(&terrain.grid, args.palette, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}
