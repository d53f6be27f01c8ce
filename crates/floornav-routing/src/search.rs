//! Shortest-path search over a weighted graph
//!
//! Plain Dijkstra with a binary min-heap. Stair crossings carry a fixed
//! weight unrelated to the planar distance between the paired stairs, so a
//! straight-line heuristic is not a lower bound on the multi-floor graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use floornav_geo::WeightedGraph;

use crate::models::PathResult;

/// Heap entry ordered so the smallest distance pops first
struct QueueEntry {
    node: usize,
    distance: f64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance.total_cmp(&other.distance) == Ordering::Equal && self.node == other.node
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance).then_with(|| other.node.cmp(&self.node))
    }
}

/// Settled distances and predecessors from one source
struct ShortestPathTree {
    distance: Vec<f64>,
    previous: Vec<Option<usize>>,
}

impl ShortestPathTree {
    fn reached(&self, node: usize) -> bool {
        self.distance[node].is_finite()
    }

    fn path_to<K: Clone>(&self, nodes: &[K], target: usize) -> PathResult<K> {
        let mut indices = vec![target];
        let mut current = target;
        while let Some(previous) = self.previous[current] {
            indices.push(previous);
            current = previous;
        }
        indices.reverse();

        PathResult {
            nodes: indices.into_iter().map(|i| nodes[i].clone()).collect(),
            weight: self.distance[target],
        }
    }
}

/// Run Dijkstra from `source`, stopping early once `target` is settled
fn dijkstra<K: Clone + Eq + Hash>(
    graph: &WeightedGraph<K>,
    source: usize,
    target: Option<usize>,
) -> ShortestPathTree {
    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut previous = vec![None; n];
    let mut settled = vec![false; n];
    let mut queue = BinaryHeap::new();

    distance[source] = 0.0;
    queue.push(QueueEntry { node: source, distance: 0.0 });

    while let Some(QueueEntry { node, distance: current }) = queue.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        if Some(node) == target {
            break;
        }

        for &(neighbour, weight) in graph.neighbors(node) {
            if settled[neighbour] {
                continue;
            }
            let candidate = current + weight;
            if candidate < distance[neighbour] {
                distance[neighbour] = candidate;
                previous[neighbour] = Some(node);
                queue.push(QueueEntry { node: neighbour, distance: candidate });
            }
        }
    }

    ShortestPathTree { distance, previous }
}

/// Shortest path between two nodes.
///
/// Returns `None` when either node is missing or they are disconnected. A
/// path from a node to itself is that single node with weight zero.
pub fn shortest_path<K: Clone + Eq + Hash>(
    graph: &WeightedGraph<K>,
    start: &K,
    end: &K,
) -> Option<PathResult<K>> {
    let source = graph.node_index(start)?;
    let target = graph.node_index(end)?;

    let tree = dijkstra(graph, source, Some(target));
    tree.reached(target).then(|| tree.path_to(graph.nodes(), target))
}

/// The reachable candidate with the smallest path weight from `start`.
///
/// Returns the candidate's position in `candidates` and its path.
/// Unreachable or unknown candidates are ignored; on equal weights the
/// earlier candidate wins. `None` when no candidate is reachable.
pub fn nearest_reachable<K: Clone + Eq + Hash>(
    graph: &WeightedGraph<K>,
    start: &K,
    candidates: &[K],
) -> Option<(usize, PathResult<K>)> {
    let source = graph.node_index(start)?;
    let tree = dijkstra(graph, source, None);

    let mut best: Option<(usize, usize)> = None;
    for (position, candidate) in candidates.iter().enumerate() {
        let Some(target) = graph.node_index(candidate) else {
            continue;
        };
        if !tree.reached(target) {
            continue;
        }
        match best {
            Some((_, best_target)) if tree.distance[target] >= tree.distance[best_target] => {}
            _ => best = Some((position, target)),
        }
    }

    best.map(|(position, target)| (position, tree.path_to(graph.nodes(), target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static str, f64)]) -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        for &(a, b, w) in edges {
            graph.add_edge(a, b, w);
        }
        graph
    }

    #[test]
    fn test_shortest_path_prefers_lighter_route() {
        let g = graph(&[("a", "b", 1.0), ("b", "d", 1.0), ("a", "c", 0.5), ("c", "d", 2.0)]);

        let path = shortest_path(&g, &"a", &"d").unwrap();

        assert_eq!(path.nodes, vec!["a", "b", "d"]);
        assert_eq!(path.weight, 2.0);
    }

    #[test]
    fn test_path_to_self() {
        let g = graph(&[("a", "b", 1.0)]);

        let path = shortest_path(&g, &"a", &"a").unwrap();

        assert_eq!(path.nodes, vec!["a"]);
        assert_eq!(path.weight, 0.0);
    }

    #[test]
    fn test_disconnected_and_unknown_nodes() {
        let g = graph(&[("a", "b", 1.0), ("c", "d", 1.0)]);

        assert!(shortest_path(&g, &"a", &"d").is_none());
        assert!(shortest_path(&g, &"a", &"z").is_none());
        assert!(shortest_path(&g, &"z", &"a").is_none());
    }

    #[test]
    fn test_nearest_reachable() {
        let g = graph(&[("s", "x", 10.0), ("s", "y", 7.0), ("q", "z", 1.0)]);

        let (position, path) = nearest_reachable(&g, &"s", &["x", "z", "y", "missing"]).unwrap();
        assert_eq!(position, 2);
        assert_eq!(path.nodes, vec!["s", "y"]);
        assert_eq!(path.weight, 7.0);

        assert!(nearest_reachable(&g, &"s", &["z"]).is_none());
        assert!(nearest_reachable(&g, &"s", &[]).is_none());
    }

    #[test]
    fn test_nearest_reachable_first_wins_on_tie() {
        let g = graph(&[("s", "x", 3.0), ("s", "y", 3.0)]);

        let (position, path) = nearest_reachable(&g, &"s", &["y", "x"]).unwrap();
        assert_eq!(position, 0);
        assert_eq!(path.nodes, vec!["s", "y"]);
    }
}
