use std::ops::Add;

mod dijkstra;
pub use dijkstra::*;

use crate::shared::time::Duration;

pub type VertexId = usize;
pub type EdgeId = usize;

/// Edge weights the shortest path search can work with.
/// Weights must never be negative.
pub trait Weight: Copy + Default + PartialOrd + Add<Output = Self> {}

impl Weight for f64 {}
impl Weight for Duration {}

/// A directed edge carrying an opaque payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W, P> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
    pub payload: P,
}

/// A directed graph with weighted edges.
///
/// Vertices are the integers `0..vertex_count`. Edges get consecutive ids in
/// insertion order and keep them for the lifetime of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedWeightedGraph<W, P> {
    edges: Vec<Edge<W, P>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Weight, P> DirectedWeightedGraph<W, P> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds an edge and returns its id.
    ///
    /// # Panics
    /// If either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, edge: Edge<W, P>) -> EdgeId {
        assert!(
            edge.from < self.incidence.len() && edge.to < self.incidence.len(),
            "edge {} -> {} is outside of a graph with {} vertices",
            edge.from,
            edge.to,
            self.incidence.len()
        );
        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W, P>> {
        self.edges.get(id)
    }

    pub fn edges(&self) -> &[Edge<W, P>] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
