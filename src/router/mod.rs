mod config;
pub mod graph;
pub mod itinerary;

pub use config::*;
pub use itinerary::*;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalogue::Catalogue,
    graph::{Dijkstra, VertexId},
    router::graph::TransitGraph,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Stop name does not match any entry: {0}")]
    UnknownStop(String),
    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),
}

/// Answers fastest-trip queries over a catalogue.
///
/// The routing graph is built once on construction and never changes, so a
/// router can be shared between threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    catalogue: Arc<Catalogue>,
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl TransitRouter {
    /// Builds the routing graph. The catalogue must be complete at this point.
    pub fn new(catalogue: Arc<Catalogue>, settings: RoutingSettings) -> Result<Self, self::Error> {
        settings.validate()?;
        let graph = graph::build(&catalogue, &settings);
        info!(
            "Routing graph built with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The vertex a trip from or to the stop starts or ends at.
    pub fn vertex_of(&self, stop_name: &str) -> Option<VertexId> {
        self.catalogue
            .stop_by_name(stop_name)
            .map(|stop| graph::wait_start(stop.index))
    }

    /// Finds the fastest trip between two stops.
    ///
    /// Returns `Ok(None)` when no sequence of buses connects them and an
    /// error when either name is unknown. Asking for a trip from a stop to
    /// itself yields an empty itinerary.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, self::Error> {
        let from_vertex = self
            .vertex_of(from)
            .ok_or_else(|| Error::UnknownStop(from.to_string()))?;
        let to_vertex = self
            .vertex_of(to)
            .ok_or_else(|| Error::UnknownStop(to.to_string()))?;

        if from_vertex == to_vertex {
            return Ok(Some(Itinerary::default()));
        }

        let Some(path) = Dijkstra::new(&self.graph).shortest_path(from_vertex, to_vertex) else {
            debug!("No route from {from} to {to}");
            return Ok(None);
        };
        let itinerary = Itinerary::new(&path, &self.graph, &self.catalogue);
        debug!(
            "Route from {from} to {to} takes {} over {} legs",
            itinerary.total_time,
            itinerary.items.len()
        );
        Ok(Some(itinerary))
    }
}
