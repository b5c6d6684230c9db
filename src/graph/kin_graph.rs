//! Adjacency structures built in one pass over the edge list.

use std::collections::HashMap;

use super::{Edge, RelationKind};

/// Parent and sibling adjacency plus per-entity degree.
///
/// Entities are kept in order of first appearance (source before target
/// within an edge). Lookups for unknown entities return zero or an empty
/// slice rather than failing.
#[derive(Debug, Clone, Default)]
pub struct KinGraph {
    entities: Vec<String>,
    degree: HashMap<String, u64>,
    /// child -> parents
    parents: HashMap<String, Vec<String>>,
    /// entity -> siblings, filled for both endpoints
    siblings: HashMap<String, Vec<String>>,
    edge_count: usize,
}

impl KinGraph {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            graph.add_edge(edge);
        }
        log::debug!(
            "Built kin graph: {} entities, {} edges, {} with parents, {} with siblings",
            graph.entities.len(),
            graph.edge_count,
            graph.parents.len(),
            graph.siblings.len()
        );
        graph
    }

    fn add_edge(&mut self, edge: &Edge) {
        self.touch(&edge.source);
        self.touch(&edge.target);
        self.edge_count += 1;

        match edge.kind {
            RelationKind::Parent => {
                self.parents
                    .entry(edge.target.clone())
                    .or_default()
                    .push(edge.source.clone());
            }
            RelationKind::Sibling => {
                self.siblings
                    .entry(edge.source.clone())
                    .or_default()
                    .push(edge.target.clone());
                self.siblings
                    .entry(edge.target.clone())
                    .or_default()
                    .push(edge.source.clone());
            }
            RelationKind::Other(_) => {}
        }
    }

    fn touch(&mut self, entity: &str) {
        match self.degree.get_mut(entity) {
            Some(count) => *count += 1,
            None => {
                self.entities.push(entity.to_string());
                self.degree.insert(entity.to_string(), 1);
            }
        }
    }

    /// Every entity seen in any edge, in first-appearance order.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edge endpoints equal to `entity`; 0 if never seen.
    pub fn degree_of(&self, entity: &str) -> u64 {
        self.degree.get(entity).copied().unwrap_or(0)
    }

    /// Parents of `entity` in edge order; empty if none were recorded.
    pub fn parents_of(&self, entity: &str) -> &[String] {
        self.parents.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Siblings of `entity` in edge order; empty if none were recorded.
    pub fn siblings_of(&self, entity: &str) -> &[String] {
        self.siblings.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }
}
