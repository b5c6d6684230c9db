pub mod chart;
pub mod config;
pub mod error;
pub mod graph;
pub mod report;

pub use config::Config;
pub use error::{KinchartError, Result};
pub use graph::{Edge, KinGraph, KinshipStats, RelationKind, Tally};
