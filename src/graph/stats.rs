//! Per-entity statistics: degree, pibling count and nibling count.

use std::collections::HashMap;

use serde::Serialize;

use super::{Edge, KinGraph};

/// One entity's value in a [`Tally`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub entity: String,
    pub count: u64,
}

/// Ordered entity -> count mapping.
///
/// Iteration follows insertion order. [`Tally::get`] returns 0 for entities
/// that were never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    entries: Vec<TallyEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `entity`, keeping its original position if already present.
    pub fn insert(&mut self, entity: impl Into<String>, count: u64) {
        let entity = entity.into();
        match self.index.get(&entity) {
            Some(&pos) => self.entries[pos].count = count,
            None => {
                self.index.insert(entity.clone(), self.entries.len());
                self.entries.push(TallyEntry { entity, count });
            }
        }
    }

    pub fn get(&self, entity: &str) -> u64 {
        self.index
            .get(entity)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Largest count, or `None` for an empty tally.
    pub fn max(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.count).max()
    }

    /// Entries ordered by count, highest first. Ties keep insertion order.
    pub fn sorted_desc(&self) -> Vec<&TallyEntry> {
        let mut sorted: Vec<&TallyEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for (entity, count) in iter {
            tally.insert(entity, count);
        }
        tally
    }
}

/// The three statistics charted per run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KinshipStats {
    /// Incident edge endpoints, any relation type
    pub degree: Tally,
    /// Siblings of parents
    pub piblings: Tally,
    /// Children of siblings
    pub niblings: Tally,
}

impl KinshipStats {
    pub fn from_edges(edges: &[Edge]) -> Self {
        Self::from_graph(&KinGraph::from_edges(edges))
    }

    /// Every entity of the graph gets one entry in each tally, in entity order.
    pub fn from_graph(graph: &KinGraph) -> Self {
        let mut stats = Self::default();
        for entity in graph.entities() {
            stats.degree.insert(entity.as_str(), graph.degree_of(entity));
            stats.piblings.insert(entity.as_str(), pibling_count(graph, entity));
            stats.niblings.insert(entity.as_str(), nibling_count(graph, entity));
        }
        stats
    }
}

fn pibling_count(graph: &KinGraph, entity: &str) -> u64 {
    graph
        .parents_of(entity)
        .iter()
        .map(|parent| graph.siblings_of(parent).len() as u64)
        .sum()
}

fn nibling_count(graph: &KinGraph, entity: &str) -> u64 {
    graph
        .siblings_of(entity)
        .iter()
        .map(|sibling| graph.parents_of(sibling).len() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Edge> {
        vec![
            Edge::new("A", "B", "parent"),
            Edge::new("B", "C", "sibling"),
            Edge::new("B", "D", "sibling"),
        ]
    }

    #[test]
    fn test_scenario_degree() {
        let stats = KinshipStats::from_edges(&scenario());
        assert_eq!(stats.degree.get("A"), 1);
        assert_eq!(stats.degree.get("B"), 3);
        assert_eq!(stats.degree.get("C"), 1);
        assert_eq!(stats.degree.get("D"), 1);
    }

    #[test]
    fn test_scenario_niblings() {
        let stats = KinshipStats::from_edges(&scenario());
        assert_eq!(stats.niblings.get("A"), 0);
        assert_eq!(stats.niblings.get("B"), 0);
        assert_eq!(stats.niblings.get("C"), 1);
        assert_eq!(stats.niblings.get("D"), 1);
    }

    #[test]
    fn test_scenario_piblings_are_zero() {
        // A has no parents; B's parent A has no siblings.
        let stats = KinshipStats::from_edges(&scenario());
        assert_eq!(stats.piblings.len(), 4);
        assert_eq!(stats.piblings.total(), 0);
    }

    #[test]
    fn test_piblings_through_parent_siblings() {
        let mut edges = scenario();
        edges.push(Edge::new("B", "E", "parent"));
        let stats = KinshipStats::from_edges(&edges);
        assert_eq!(stats.piblings.get("E"), 2);
        assert_eq!(stats.piblings.get("B"), 0);
        // Nibling counts read the parent lists of siblings, so E does not change them.
        assert_eq!(stats.niblings.get("C"), 1);
        assert_eq!(stats.niblings.get("D"), 1);
    }

    #[test]
    fn test_every_entity_has_an_entry() {
        let stats = KinshipStats::from_edges(&scenario());
        let names: Vec<&str> = stats.piblings.iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(stats.degree.len(), 4);
        assert_eq!(stats.niblings.len(), 4);
    }

    #[test]
    fn test_empty_edges_give_empty_tallies() {
        let stats = KinshipStats::from_edges(&[]);
        assert!(stats.degree.is_empty());
        assert!(stats.piblings.is_empty());
        assert!(stats.niblings.is_empty());
    }

    #[test]
    fn test_tally_get_defaults_to_zero() {
        let tally: Tally = vec![("a", 3)].into_iter().collect();
        assert_eq!(tally.get("a"), 3);
        assert_eq!(tally.get("b"), 0);
    }

    #[test]
    fn test_tally_insert_overwrites_in_place() {
        let mut tally = Tally::new();
        tally.insert("a", 1);
        tally.insert("b", 2);
        tally.insert("a", 5);
        let entries: Vec<_> = tally.iter().map(|e| (e.entity.as_str(), e.count)).collect();
        assert_eq!(entries, vec![("a", 5), ("b", 2)]);
    }

    #[test]
    fn test_sorted_desc_is_stable() {
        let tally: Tally = vec![("x", 1), ("y", 3), ("z", 1), ("w", 3)]
            .into_iter()
            .collect();
        let order: Vec<&str> = tally
            .sorted_desc()
            .into_iter()
            .map(|e| e.entity.as_str())
            .collect();
        assert_eq!(order, vec!["y", "w", "x", "z"]);
        assert_eq!(tally.max(), Some(3));
    }

    #[test]
    fn test_tally_serializes_as_list() {
        let tally: Tally = vec![("a", 2)].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"[{"entity":"a","count":2}]"#);
    }
}
