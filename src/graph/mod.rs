//! Relationship graph: edge records, CSV loading, adjacency and kinship statistics.
//!
//! Edges come in as flat `(source, target, type)` rows. `parent` and `sibling`
//! edges feed the adjacency structures; every edge counts toward degree.

mod kin_graph;
mod loader;
mod stats;

pub use kin_graph::KinGraph;
pub use loader::{read_edges, read_edges_from_reader};
pub use stats::{KinshipStats, Tally, TallyEntry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation type of an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    /// `source` is a parent of `target`.
    Parent,
    /// `source` and `target` are siblings (symmetric).
    Sibling,
    /// Any other relation; counted toward degree only.
    Other(String),
}

impl RelationKind {
    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::Parent => "parent",
            RelationKind::Sibling => "sibling",
            RelationKind::Other(s) => s,
        }
    }
}

impl From<&str> for RelationKind {
    fn from(value: &str) -> Self {
        match value {
            "parent" => RelationKind::Parent,
            "sibling" => RelationKind::Sibling,
            other => RelationKind::Other(other.to_string()),
        }
    }
}

impl From<String> for RelationKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "parent" => RelationKind::Parent,
            "sibling" => RelationKind::Sibling,
            _ => RelationKind::Other(value),
        }
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edge in the relationship graph (source --kind--> target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source entity, e.g. `alice`.
    pub source: String,
    /// Target entity, e.g. `bob`.
    pub target: String,
    /// Relation type, read from the `type` column.
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: impl Into<RelationKind>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_parsing() {
        assert_eq!(RelationKind::from("parent"), RelationKind::Parent);
        assert_eq!(RelationKind::from("sibling"), RelationKind::Sibling);
        assert_eq!(
            RelationKind::from("friend"),
            RelationKind::Other("friend".to_string())
        );
    }

    #[test]
    fn test_relation_kind_is_case_sensitive() {
        assert_eq!(
            RelationKind::from("Parent"),
            RelationKind::Other("Parent".to_string())
        );
    }

    #[test]
    fn test_relation_kind_display() {
        assert_eq!(RelationKind::Parent.to_string(), "parent");
        assert_eq!(RelationKind::Other("coworker".into()).to_string(), "coworker");
        let s: String = RelationKind::Sibling.into();
        assert_eq!(s, "sibling");
    }

    #[test]
    fn test_edge_new() {
        let edge = Edge::new("a", "b", "sibling");
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
        assert_eq!(edge.kind, RelationKind::Sibling);
    }
}
