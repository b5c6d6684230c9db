//! End-to-end run: read edges, compute statistics, write one chart per statistic.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::render_histogram;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::graph::{read_edges, KinshipStats, Tally};

/// A chart to be written: file name, title and the statistic it shows.
struct ChartSpec<'a> {
    file_name: &'static str,
    title: &'static str,
    tally: &'a Tally,
}

fn chart_specs(stats: &KinshipStats) -> [ChartSpec<'_>; 3] {
    [
        ChartSpec {
            file_name: "connections.svg",
            title: "Total Connections",
            tally: &stats.degree,
        },
        ChartSpec {
            file_name: "piblings.svg",
            title: "Piblings per User",
            tally: &stats.piblings,
        },
        ChartSpec {
            file_name: "niblings.svg",
            title: "Niblings per User",
            tally: &stats.niblings,
        },
    ]
}

/// Read `data_path`, then write the charts into `output_folder`.
///
/// The input is read before anything is created on disk, so a bad input
/// leaves no output behind. Returns the paths of the files written.
pub fn run(data_path: &Path, output_folder: &Path, layout: &ChartConfig) -> Result<Vec<PathBuf>> {
    let edges = read_edges(data_path)?;
    let stats = KinshipStats::from_edges(&edges);
    log::info!(
        "Computed statistics for {} entities from {} edges",
        stats.degree.len(),
        edges.len()
    );
    write_charts(&stats, output_folder, layout)
}

/// Write one SVG per non-empty statistic into `output_folder`, creating it if needed.
pub fn write_charts(
    stats: &KinshipStats,
    output_folder: &Path,
    layout: &ChartConfig,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_folder)?;

    let mut written = Vec::new();
    for spec in chart_specs(stats) {
        let Some(markup) = render_histogram(spec.tally, spec.title, layout) else {
            log::warn!("No data for {}, skipping {}", spec.title, spec.file_name);
            continue;
        };

        let path = output_folder.join(spec.file_name);
        fs::write(&path, markup)?;
        log::debug!("Wrote {} ({} bars)", path.display(), spec.tally.len());
        written.push(path);
    }

    log::info!("Wrote {} chart(s) to {}", written.len(), output_folder.display());
    Ok(written)
}
