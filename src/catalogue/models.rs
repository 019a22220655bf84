use std::{collections::HashSet, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::shared::{Named, geo::Coordinate, geo::Distance};

/// A named point of the network where buses call.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Position in the catalogue's stop arena. Stops are ordered by name.
    pub index: u32,
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

impl Named for Stop {
    fn name(&self) -> &Arc<str> {
        &self.name
    }
}

/// A bus line running over an ordered list of stops.
///
/// A circular route lists its stops in travel order and ends where it starts.
/// A linear route lists the outbound direction only and the bus runs the same
/// stops back in reverse.
#[derive(Debug, Clone)]
pub struct Route {
    /// Position in the catalogue's route arena. Routes are ordered by name.
    pub index: u32,
    pub name: Arc<str>,
    /// Stop indices in the order they are served; a stop may appear more than once.
    pub stops: Arc<[u32]>,
    pub is_circular: bool,
}

impl Named for Route {
    fn name(&self) -> &Arc<str> {
        &self.name
    }
}

impl Route {
    /// Number of stops a rider passes on a full round trip.
    pub fn total_stops(&self) -> usize {
        if self.is_circular || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }

    pub fn unique_stops(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Stop indices in travel order over a full round trip, including the way
    /// back for linear routes.
    pub fn traversal(&self) -> impl Iterator<Item = u32> + '_ {
        let way_back = if self.is_circular {
            0
        } else {
            self.stops.len().saturating_sub(1)
        };
        self.stops
            .iter()
            .chain(self.stops.iter().rev().skip(1).take(way_back))
            .copied()
    }
}

/// What to do when neither direction of a road distance was recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistancePolicy {
    /// The segment counts as zero meters.
    #[default]
    Zero,
    /// The segment counts as the great circle distance between its stops.
    GreatCircle,
    /// Building the catalogue fails if any route segment has no distance.
    Reject,
}

/// Statistics of a single route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Measured road length of a full round trip.
    pub route_length: Distance,
    /// Road length divided by the great circle length of the same trip.
    pub curvature: f64,
    pub is_roundtrip: bool,
}

/// The routes serving a stop, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopInfo {
    pub name: Arc<str>,
    pub buses: Vec<Arc<str>>,
}
