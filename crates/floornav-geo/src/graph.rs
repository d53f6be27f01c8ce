//! Undirected weighted graph keyed by hashable node values

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::Point2D;

/// An undirected weighted graph.
///
/// Nodes are stored in insertion order and addressed either by key or by
/// their dense index. Inserting an edge that already exists is a no-op, so
/// builders can feed overlapping segments without creating parallel edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph<K> {
    nodes: Vec<K>,
    index: HashMap<K, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

/// The walkable graph of one floor
pub type FloorGraph = WeightedGraph<Point2D>;

impl<K> Default for WeightedGraph<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<K: Clone + Eq + Hash> WeightedGraph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if missing and return its index
    pub fn add_node(&mut self, key: K) -> usize {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(key.clone());
        self.index.insert(key, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Insert an undirected edge.
    ///
    /// Returns `false` when the edge was already present (the existing weight
    /// is kept) or when both endpoints are the same node. Endpoints are added
    /// as nodes in either case.
    pub fn add_edge(&mut self, a: K, b: K, weight: f64) -> bool {
        let ia = self.add_node(a);
        let ib = self.add_node(b);

        if ia == ib || self.adjacency[ia].iter().any(|&(n, _)| n == ib) {
            return false;
        }

        self.adjacency[ia].push((ib, weight));
        self.adjacency[ib].push((ia, weight));
        self.edge_count += 1;
        true
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn node_index(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn node(&self, idx: usize) -> Option<&K> {
        self.nodes.get(idx)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    /// Neighbours of a node as `(index, weight)` pairs
    pub fn neighbors(&self, idx: usize) -> &[(usize, f64)] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_weight(&self, a: &K, b: &K) -> Option<f64> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        self.adjacency[ia].iter().find(|&&(n, _)| n == ib).map(|&(_, w)| w)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every edge once, as `(a, b, weight)` with `a` inserted before `b`
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(ia, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&(ib, _)| ia < ib)
                .map(move |&(ib, w)| (&self.nodes[ia], &self.nodes[ib], w))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut graph = FloorGraph::new();

        assert!(graph.add_edge(p(0.0, 0.0), p(3.0, 4.0), 5.0));
        assert!(!graph.add_edge(p(0.0, 0.0), p(3.0, 4.0), 5.0));
        assert!(!graph.add_edge(p(3.0, 4.0), p(0.0, 0.0), 5.0));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&p(3.0, 4.0), &p(0.0, 0.0)), Some(5.0));
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let mut graph = FloorGraph::new();

        assert!(!graph.add_edge(p(1.0, 1.0), p(1.0, 1.0), 0.0));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_zero_is_same_node() {
        let mut graph = FloorGraph::new();
        graph.add_edge(p(0.0, 0.0), p(1.0, 0.0), 1.0);
        graph.add_edge(p(-0.0, 0.0), p(0.0, 1.0), 1.0);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors(0).len(), 2);
    }

    #[test]
    fn test_edges_listed_once() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 2.0);
        graph.add_edge("c", "a", 3.0);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&(&"a", &"b", 1.0)));
        assert!(edges.contains(&(&"a", &"c", 3.0)));
        assert!(graph.neighbors(42).is_empty());
    }
}
