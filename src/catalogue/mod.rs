use std::{collections::HashMap, sync::Arc};

mod builder;
mod models;
pub use builder::*;
pub use models::*;

use rayon::prelude::*;
use thiserror::Error;

use crate::shared::geo::Distance;

type NameToIndex = HashMap<Arc<str>, u32>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Route {route} references unknown stop {stop}")]
    UnknownRouteStop { route: String, stop: String },
    #[error("Road distance references unknown stop {0}")]
    UnknownDistanceStop(String),
    #[error("Stop name does not match any entry: {0}")]
    UnknownStop(String),
    #[error("Stop {0} has invalid coordinates")]
    InvalidCoordinate(String),
    #[error("Road distance from {from} to {to} must be a finite non-negative number")]
    InvalidDistance { from: String, to: String },
    #[error("No road distance recorded between {from} and {to}")]
    MissingDistance { from: String, to: String },
}

/// The immutable network: stops, routes and measured road distances.
///
/// Stops and routes live in arenas sorted by name, so iterating them is
/// deterministic and routes refer to their stops by arena index.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub stops: Box<[Stop]>,
    pub routes: Box<[Route]>,

    stop_lookup: Arc<NameToIndex>,
    route_lookup: Arc<NameToIndex>,
    stop_to_routes: Arc<[Box<[u32]>]>,
    distances: Arc<HashMap<(u32, u32), Distance>>,
    distance_policy: DistancePolicy,
}

impl Catalogue {
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::new()
    }

    pub fn stop_by_name(&self, name: &str) -> Option<&Stop> {
        let index = self.stop_lookup.get(name)?;
        Some(&self.stops[*index as usize])
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        let index = self.route_lookup.get(name)?;
        Some(&self.routes[*index as usize])
    }

    /// All stops, ordered by name.
    pub fn sorted_stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes, ordered by name.
    pub fn sorted_routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn distance_policy(&self) -> DistancePolicy {
        self.distance_policy
    }

    pub fn routes_by_stop(&self, name: &str) -> Option<Vec<&Route>> {
        let stop = self.stop_by_name(name)?;
        Some(self.routes_by_stop_idx(stop.index))
    }

    /// Routes calling at the stop, ordered by name.
    pub fn routes_by_stop_idx(&self, stop_idx: u32) -> Vec<&Route> {
        self.stop_to_routes
            .get(stop_idx as usize)
            .map(|routes| {
                routes
                    .iter()
                    .map(|route_idx| &self.routes[*route_idx as usize])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Stops served by at least one route, ordered by name.
    pub fn stops_served(&self) -> Vec<&Stop> {
        self.stops
            .iter()
            .filter(|stop| !self.stop_to_routes[stop.index as usize].is_empty())
            .collect()
    }

    /// The recorded road distance from one stop to another.
    /// Falls back to the opposite direction when only that one was recorded.
    pub fn road_distance(&self, from_idx: u32, to_idx: u32) -> Option<Distance> {
        self.distances
            .get(&(from_idx, to_idx))
            .or_else(|| self.distances.get(&(to_idx, from_idx)))
            .copied()
    }

    /// The road distance with the catalogue's [`DistancePolicy`] applied when
    /// no direction was recorded. `None` only under [`DistancePolicy::Reject`].
    pub fn resolve_distance(&self, from_idx: u32, to_idx: u32) -> Option<Distance> {
        self.road_distance(from_idx, to_idx)
            .or_else(|| match self.distance_policy {
                DistancePolicy::Zero => Some(Distance::default()),
                DistancePolicy::GreatCircle => {
                    let from = &self.stops[from_idx as usize];
                    let to = &self.stops[to_idx as usize];
                    Some(from.coordinate.great_circle_distance(&to.coordinate))
                }
                DistancePolicy::Reject => None,
            })
    }

    /// Distance between two consecutive stops of a route.
    pub(crate) fn segment_distance(&self, from_idx: u32, to_idx: u32) -> Distance {
        // Under Reject every route segment was checked when the catalogue was built
        self.resolve_distance(from_idx, to_idx).unwrap_or_default()
    }

    /// The road distance between two stops by name.
    pub fn distance(&self, from: &str, to: &str) -> Result<Distance, self::Error> {
        let from_stop = self
            .stop_by_name(from)
            .ok_or_else(|| Error::UnknownStop(from.to_string()))?;
        let to_stop = self
            .stop_by_name(to)
            .ok_or_else(|| Error::UnknownStop(to.to_string()))?;
        self.resolve_distance(from_stop.index, to_stop.index)
            .ok_or_else(|| Error::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Statistics of the route with the given name.
    /// If no route has that name None is returned.
    pub fn route_info(&self, name: &str) -> Option<RouteInfo> {
        let route = self.route_by_name(name)?;
        Some(self.route_stats(route))
    }

    /// Statistics of every route, ordered by route name.
    pub fn all_route_info(&self) -> Vec<(Arc<str>, RouteInfo)> {
        self.routes
            .par_iter()
            .map(|route| (route.name.clone(), self.route_stats(route)))
            .collect()
    }

    pub fn route_stats(&self, route: &Route) -> RouteInfo {
        let traversal: Vec<u32> = route.traversal().collect();
        let (route_length, geo_length) = traversal.windows(2).fold(
            (Distance::default(), Distance::default()),
            |(road, geo), pair| {
                let from = &self.stops[pair[0] as usize];
                let to = &self.stops[pair[1] as usize];
                (
                    road + self.segment_distance(pair[0], pair[1]),
                    geo + from.coordinate.great_circle_distance(&to.coordinate),
                )
            },
        );
        let curvature = if geo_length.as_meters() > 0.0 {
            route_length / geo_length
        } else {
            1.0
        };

        RouteInfo {
            stop_count: route.total_stops(),
            unique_stop_count: route.unique_stops(),
            route_length,
            curvature,
            is_roundtrip: route.is_circular,
        }
    }

    /// The routes serving the stop with the given name.
    /// If no stop has that name None is returned.
    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        let stop = self.stop_by_name(name)?;
        let buses = self
            .routes_by_stop_idx(stop.index)
            .into_iter()
            .map(|route| route.name.clone())
            .collect();
        Some(StopInfo {
            name: stop.name.clone(),
            buses,
        })
    }

    pub(crate) fn check_route_distances(&self) -> Result<(), self::Error> {
        for route in self.routes.iter() {
            let traversal: Vec<u32> = route.traversal().collect();
            for pair in traversal.windows(2) {
                if self.resolve_distance(pair[0], pair[1]).is_none() {
                    return Err(Error::MissingDistance {
                        from: self.stops[pair[0] as usize].name.to_string(),
                        to: self.stops[pair[1] as usize].name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
