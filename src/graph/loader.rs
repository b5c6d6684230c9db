//! CSV edge list reader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::Edge;
use crate::error::{KinchartError, Result};

const REQUIRED_COLUMNS: [&str; 3] = ["source", "target", "type"];

/// Read all edges from a CSV file whose header names `source`, `target` and `type`.
pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    let file = File::open(path)?;
    let edges = read_edges_from_reader(BufReader::new(file))?;
    log::info!("Read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Read all edges from any CSV source.
///
/// Fields and header names are trimmed. Extra columns are ignored. A row with
/// a different field count than the header fails the whole read.
pub fn read_edges_from_reader<R: Read>(input: R) -> Result<Vec<Edge>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(KinchartError::EmptyInput);
    }

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(KinchartError::MissingColumn(column.to_string()));
        }
    }

    let mut edges = Vec::new();
    for (idx, record) in reader.deserialize::<Edge>().enumerate() {
        let edge = record?;
        if edge.source.is_empty() || edge.target.is_empty() {
            return Err(KinchartError::InvalidInput(format!(
                "row {} has an empty source or target",
                idx + 1
            )));
        }
        edges.push(edge);
    }

    log::debug!("Parsed {} edge rows", edges.len());
    Ok(edges)
}
