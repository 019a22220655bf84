use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::{DirectedWeightedGraph, EdgeId, VertexId, Weight};

/// The cheapest way from one vertex to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Sum of the edge weights, accumulated from the source outwards.
    pub weight: W,
    /// Edge ids in travel order.
    pub edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    weight: W,
    vertex: VertexId,
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

// Reversed so the max-heap pops the lightest candidate, lowest vertex id first on ties
impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single source shortest path search, run lazily for each query.
///
/// Repeated queries on the same graph always return the same path: ties are
/// settled by vertex id and a label is only replaced by a strictly better one.
pub struct Dijkstra<'a, W, P> {
    graph: &'a DirectedWeightedGraph<W, P>,
}

impl<'a, W: Weight, P> Dijkstra<'a, W, P> {
    pub fn new(graph: &'a DirectedWeightedGraph<W, P>) -> Self {
        Self { graph }
    }

    /// Finds the lightest path from `from` to `to`.
    /// Returns None if `to` cannot be reached or either vertex is out of range.
    pub fn shortest_path(&self, from: VertexId, to: VertexId) -> Option<Path<W>> {
        let vertex_count = self.graph.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return None;
        }

        let mut best: Vec<Option<W>> = vec![None; vertex_count];
        let mut parents: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut heap = BinaryHeap::new();
        best[from] = Some(W::default());
        heap.push(Candidate {
            weight: W::default(),
            vertex: from,
        });

        while let Some(Candidate { weight, vertex }) = heap.pop() {
            // Stale entry, the vertex was settled with a lighter weight
            if best[vertex].is_some_and(|settled| weight > settled) {
                continue;
            }
            if vertex == to {
                break;
            }
            for edge_id in self.graph.incident_edges(vertex) {
                let edge = &self.graph.edges()[*edge_id];
                let reached = weight + edge.weight;
                if best[edge.to].is_none_or(|known| reached < known) {
                    best[edge.to] = Some(reached);
                    parents[edge.to] = Some(*edge_id);
                    heap.push(Candidate {
                        weight: reached,
                        vertex: edge.to,
                    });
                }
            }
        }

        let weight = best[to]?;
        let mut edges = Vec::new();
        let mut current = to;
        while current != from {
            let edge_id = parents[current]?;
            edges.push(edge_id);
            current = self.graph.edges()[edge_id].from;
        }
        edges.reverse();
        Some(Path { weight, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn edge(from: VertexId, to: VertexId, weight: f64) -> Edge<f64, ()> {
        Edge {
            from,
            to,
            weight,
            payload: (),
        }
    }

    #[test]
    fn picks_lighter_detour() {
        let mut graph = DirectedWeightedGraph::new(3);
        let direct = graph.add_edge(edge(0, 2, 10.0));
        let first = graph.add_edge(edge(0, 1, 3.0));
        let second = graph.add_edge(edge(1, 2, 4.0));

        let path = Dijkstra::new(&graph).shortest_path(0, 2).unwrap();
        assert_eq!(path.weight, 7.0);
        assert_eq!(path.edges, vec![first, second]);
        assert_ne!(path.edges, vec![direct]);
    }

    #[test]
    fn same_vertex_is_empty_path() {
        let mut graph = DirectedWeightedGraph::new(2);
        graph.add_edge(edge(0, 1, 1.0));
        let path = Dijkstra::new(&graph).shortest_path(1, 1).unwrap();
        assert_eq!(path.weight, 0.0);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = DirectedWeightedGraph::new(2);
        graph.add_edge(edge(0, 1, 1.0));
        assert!(Dijkstra::new(&graph).shortest_path(1, 0).is_none());
    }

    #[test]
    fn out_of_range_vertex() {
        let graph: DirectedWeightedGraph<f64, ()> = DirectedWeightedGraph::new(2);
        assert!(Dijkstra::new(&graph).shortest_path(0, 5).is_none());
    }

    #[test]
    fn ties_are_stable() {
        let mut graph = DirectedWeightedGraph::new(4);
        graph.add_edge(edge(0, 1, 1.0));
        graph.add_edge(edge(0, 2, 1.0));
        graph.add_edge(edge(1, 3, 1.0));
        graph.add_edge(edge(2, 3, 1.0));

        let dijkstra = Dijkstra::new(&graph);
        let first = dijkstra.shortest_path(0, 3).unwrap();
        for _ in 0..10 {
            assert_eq!(dijkstra.shortest_path(0, 3).unwrap(), first);
        }
    }
}
