use std::{fmt::Display, sync::Arc};

use serde::Serialize;

use crate::{
    catalogue::Catalogue,
    graph::Path,
    router::graph::{Hop, TransitGraph},
    shared::time::Duration,
};

/// One step of a trip: either waiting at a stop or riding a single bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Leg {
    Wait {
        stop_name: Arc<str>,
        time: Duration,
    },
    Bus {
        bus: Arc<str>,
        span_count: u32,
        time: Duration,
    },
}

impl Leg {
    pub fn time(&self) -> Duration {
        match self {
            Leg::Wait { time, .. } | Leg::Bus { time, .. } => *time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, Leg::Wait { .. })
    }

    pub fn is_bus(&self) -> bool {
        matches!(self, Leg::Bus { .. })
    }
}

impl Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::Wait { stop_name, time } => write!(f, "Wait at {stop_name} for {time}"),
            Leg::Bus {
                bus,
                span_count,
                time,
            } => write!(f, "Ride bus {bus} for {span_count} stops ({time})"),
        }
    }
}

/// The fastest way between two stops.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Itinerary {
    pub total_time: Duration,
    pub items: Vec<Leg>,
}

impl Itinerary {
    /// Turns a path through the routing graph into legs.
    pub(crate) fn new(path: &Path<Duration>, graph: &TransitGraph, catalogue: &Catalogue) -> Self {
        let items: Vec<Leg> = path
            .edges
            .iter()
            .filter_map(|edge_id| graph.edge(*edge_id))
            .map(|edge| match edge.payload {
                Hop::Wait { stop_idx } => Leg::Wait {
                    stop_name: catalogue.stops[stop_idx as usize].name.clone(),
                    time: edge.weight,
                },
                Hop::Ride {
                    route_idx,
                    span_count,
                } => Leg::Bus {
                    bus: catalogue.routes[route_idx as usize].name.clone(),
                    span_count,
                    time: edge.weight,
                },
            })
            .collect();

        // Adding in travel order reproduces the engine's accumulation exactly
        let total_time: Duration = items.iter().map(Leg::time).sum();
        debug_assert_eq!(total_time, path.weight);

        Self { total_time, items }
    }

    pub fn bus_legs(&self) -> impl Iterator<Item = &Leg> {
        self.items.iter().filter(|leg| leg.is_bus())
    }
}
