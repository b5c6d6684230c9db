use clap::Parser;
use kinchart::{report, Config};
use std::path::PathBuf;
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "kinchart")]
#[command(about = "Analyze social network data.")]
struct Args {
    /// Path to the input CSV file
    data_path: PathBuf,

    /// Path to output folder
    #[arg(short, long)]
    output_folder: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.logging.level)
    ).init();

    log::info!("Starting kinchart v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Input: {}", args.data_path.display());
    log::info!("Output folder: {}", args.output_folder.display());

    let written = report::run(&args.data_path, &args.output_folder, &config.chart)?;

    for path in &written {
        log::info!("✓ {}", path.display());
    }

    Ok(())
}
