use rayon::prelude::*;

use crate::{
    catalogue::{Catalogue, Route},
    graph::{DirectedWeightedGraph, Edge, VertexId},
    router::RoutingSettings,
    shared::{geo::Distance, time::Duration},
};

/// What traversing an edge of the routing graph means for the rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    /// Waiting for a bus at a stop.
    Wait { stop_idx: u32 },
    /// Riding a route without changing buses over `span_count` segments.
    Ride { route_idx: u32, span_count: u32 },
}

impl Hop {
    pub fn is_wait(&self) -> bool {
        matches!(self, Hop::Wait { .. })
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, Hop::Ride { .. })
    }
}

pub type TransitGraph = DirectedWeightedGraph<Duration, Hop>;
type TransitEdge = Edge<Duration, Hop>;

/// Vertex a rider is at when arriving at the stop, before waiting for a bus.
pub const fn wait_start(stop_idx: u32) -> VertexId {
    stop_idx as usize * 2
}

/// Vertex a rider is at once the wait is over and a bus can be boarded.
pub const fn wait_end(stop_idx: u32) -> VertexId {
    stop_idx as usize * 2 + 1
}

/// Builds the routing graph of a catalogue.
///
/// Each stop gets two vertices joined by a wait edge. Each route gets one ride
/// edge per pair of positions along it, from the boarding stop's wait end to the
/// alighting stop's wait start, plus the opposite direction for linear routes.
/// Vertex and edge ids only depend on the name order of stops and routes.
pub fn build(catalogue: &Catalogue, settings: &RoutingSettings) -> TransitGraph {
    let mut graph = TransitGraph::new(catalogue.stops.len() * 2);
    let wait = Duration::from_minutes(settings.bus_wait_time);

    catalogue.sorted_stops().iter().for_each(|stop| {
        graph.add_edge(Edge {
            from: wait_start(stop.index),
            to: wait_end(stop.index),
            weight: wait,
            payload: Hop::Wait {
                stop_idx: stop.index,
            },
        });
    });

    // Collecting an indexed parallel iterator keeps route order intact
    let rides: Vec<Vec<TransitEdge>> = catalogue
        .sorted_routes()
        .par_iter()
        .map(|route| ride_edges(catalogue, route, settings.bus_velocity))
        .collect();
    rides.into_iter().flatten().for_each(|edge| {
        graph.add_edge(edge);
    });

    graph
}

fn ride_edges(catalogue: &Catalogue, route: &Route, velocity: f64) -> Vec<TransitEdge> {
    let stops = &route.stops;
    let mut edges = Vec::new();
    for i in 0..stops.len() {
        let mut forward = Distance::default();
        let mut backward = Distance::default();
        for j in (i + 1)..stops.len() {
            let span_count = (j - i) as u32;
            forward += catalogue.segment_distance(stops[j - 1], stops[j]);
            edges.push(ride(route, stops[i], stops[j], forward, span_count, velocity));

            if !route.is_circular {
                backward += catalogue.segment_distance(stops[j], stops[j - 1]);
                edges.push(ride(route, stops[j], stops[i], backward, span_count, velocity));
            }
        }
    }
    edges
}

fn ride(
    route: &Route,
    from_stop: u32,
    to_stop: u32,
    distance: Distance,
    span_count: u32,
    velocity: f64,
) -> TransitEdge {
    Edge {
        from: wait_end(from_stop),
        to: wait_start(to_stop),
        weight: Duration::travel(distance, velocity),
        payload: Hop::Ride {
            route_idx: route.index,
            span_count,
        },
    }
}
