use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use tracing::{debug, info};

use crate::{
    catalogue::{Catalogue, DistancePolicy, Error, Route, Stop},
    shared::{
        geo::{Coordinate, Distance},
        index_by_name,
    },
};

#[derive(Debug, Clone)]
struct PendingRoute {
    stops: Vec<Arc<str>>,
    is_circular: bool,
}

/// Collects stops, routes and road distances by name.
///
/// Nothing is resolved until [`CatalogueBuilder::build`], so the order in which
/// entries are added does not matter. Adding a stop or a route under a name that
/// already exists replaces the previous entry.
#[derive(Debug, Default, Clone)]
pub struct CatalogueBuilder {
    stops: BTreeMap<Arc<str>, Coordinate>,
    routes: BTreeMap<Arc<str>, PendingRoute>,
    distances: BTreeMap<(Arc<str>, Arc<str>), Distance>,
    distance_policy: DistancePolicy,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_distance_policy(mut self, policy: DistancePolicy) -> Self {
        self.distance_policy = policy;
        self
    }

    pub fn add_stop(&mut self, name: &str, coordinate: Coordinate) -> &mut Self {
        if self.stops.insert(name.into(), coordinate).is_some() {
            debug!("Stop {name} was redefined");
        }
        self
    }

    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stops: &[S],
        is_circular: bool,
    ) -> &mut Self {
        let pending = PendingRoute {
            stops: stops.iter().map(|stop| Arc::from(stop.as_ref())).collect(),
            is_circular,
        };
        if self.routes.insert(name.into(), pending).is_some() {
            debug!("Route {name} was redefined");
        }
        self
    }

    /// Records the measured distance driving from `from` to `to`.
    /// The opposite direction is left untouched.
    pub fn set_road_distance(&mut self, from: &str, to: &str, distance: Distance) -> &mut Self {
        self.distances.insert((from.into(), to.into()), distance);
        self
    }

    /// Resolves every reference and freezes the network.
    ///
    /// Fails on the first route or distance that names an unknown stop, on
    /// invalid coordinates or distances, and, under [`DistancePolicy::Reject`],
    /// on any route segment without a recorded distance.
    pub fn build(self) -> Result<Catalogue, self::Error> {
        // BTreeMap iteration gives the lexicographic order the arenas rely on
        let stops: Vec<Stop> = self
            .stops
            .into_iter()
            .enumerate()
            .map(|(i, (name, coordinate))| {
                if !coordinate.is_valid() {
                    return Err(Error::InvalidCoordinate(name.to_string()));
                }
                Ok(Stop {
                    index: i as u32,
                    name,
                    coordinate,
                })
            })
            .collect::<Result<_, _>>()?;
        let stop_lookup = index_by_name(&stops);

        let mut routes: Vec<Route> = Vec::with_capacity(self.routes.len());
        for (i, (name, pending)) in self.routes.into_iter().enumerate() {
            let route_stops = pending
                .stops
                .iter()
                .map(|stop| {
                    stop_lookup
                        .get(stop)
                        .copied()
                        .ok_or_else(|| Error::UnknownRouteStop {
                            route: name.to_string(),
                            stop: stop.to_string(),
                        })
                })
                .collect::<Result<Vec<u32>, _>>()?;
            routes.push(Route {
                index: i as u32,
                name,
                stops: route_stops.into(),
                is_circular: pending.is_circular,
            });
        }
        let route_lookup = index_by_name(&routes);

        let mut distances = HashMap::with_capacity(self.distances.len());
        for ((from, to), distance) in self.distances.into_iter() {
            if !distance.is_valid() {
                return Err(Error::InvalidDistance {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            let from_idx = *stop_lookup
                .get(&from)
                .ok_or_else(|| Error::UnknownDistanceStop(from.to_string()))?;
            let to_idx = *stop_lookup
                .get(&to)
                .ok_or_else(|| Error::UnknownDistanceStop(to.to_string()))?;
            distances.insert((from_idx, to_idx), distance);
        }

        // Routes are visited in name order so every list comes out sorted
        let mut stop_to_routes: Vec<Vec<u32>> = vec![Vec::new(); stops.len()];
        routes.iter().for_each(|route| {
            route.stops.iter().for_each(|stop_idx| {
                let serving = &mut stop_to_routes[*stop_idx as usize];
                if serving.last() != Some(&route.index) {
                    serving.push(route.index);
                }
            });
        });

        let catalogue = Catalogue {
            stops: stops.into(),
            routes: routes.into(),
            stop_lookup: stop_lookup.into(),
            route_lookup: route_lookup.into(),
            stop_to_routes: stop_to_routes
                .into_iter()
                .map(Vec::into_boxed_slice)
                .collect(),
            distances: distances.into(),
            distance_policy: self.distance_policy,
        };

        if self.distance_policy == DistancePolicy::Reject {
            catalogue.check_route_distances()?;
        }

        info!(
            "Catalogue ready with {} stops, {} routes and {} road distances",
            catalogue.stops.len(),
            catalogue.routes.len(),
            catalogue.distances.len()
        );
        Ok(catalogue)
    }
}
