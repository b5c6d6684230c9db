//! Print per-entity degree, pibling and nibling counts without rendering charts.

use clap::Parser;
use kinchart::graph::read_edges;
use kinchart::{Config, KinshipStats};
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Parser, Debug)]
#[command(name = "stats")]
#[command(about = "Print relationship statistics for a CSV edge list")]
struct Args {
    /// Path to the input CSV file
    data_path: PathBuf,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", &config.logging.level),
    )
    .init();

    let edges = read_edges(&args.data_path)
        .with_context(|| format!("Failed to read {}", args.data_path.display()))?;
    let stats = KinshipStats::from_edges(&edges);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.degree.is_empty() {
        println!("No edges found in {}.", args.data_path.display());
        return Ok(());
    }

    let width = stats
        .degree
        .iter()
        .map(|e| e.entity.chars().count())
        .max()
        .unwrap_or(0)
        .max("Entity".len());

    println!("\n=== Relationship Statistics ({} edges) ===\n", edges.len());
    println!("{:-<1$}", "", width + 36);
    println!(
        "{:<width$} {:>11} {:>11} {:>11}",
        "Entity", "Connections", "Piblings", "Niblings",
        width = width
    );
    println!("{:-<1$}", "", width + 36);

    for entry in stats.degree.sorted_desc() {
        println!(
            "{:<width$} {:>11} {:>11} {:>11}",
            entry.entity,
            entry.count,
            stats.piblings.get(&entry.entity),
            stats.niblings.get(&entry.entity),
            width = width
        );
    }
    println!("{:-<1$}", "", width + 36);
    println!(
        "{:<width$} {:>11} {:>11} {:>11}",
        "Total",
        stats.degree.total(),
        stats.piblings.total(),
        stats.niblings.total(),
        width = width
    );
    println!();

    Ok(())
}
