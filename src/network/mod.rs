use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::{
    catalogue::{self, Catalogue, RouteInfo, StopInfo},
    render::{MapRenderer, RenderSettings},
    router::{self, Itinerary, RoutingSettings, TransitRouter},
    shared::geo::{Coordinate, Distance},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] catalogue::Error),
    #[error("Router error: {0}")]
    Router(#[from] router::Error),
    #[error("Routing settings must be configured before the graph is built")]
    RoutingNotConfigured,
    #[error("The routing graph has not been built")]
    GraphNotBuilt,
}

/// The setup and query entry points of a bus network.
///
/// Setup runs in a fixed order: build the catalogue, configure routing, build
/// the routing graph. Queries are read only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Network {
    catalogue: Arc<Catalogue>,
    settings: Option<RoutingSettings>,
    router: Option<TransitRouter>,
}

impl Network {
    pub fn from_catalogue(catalogue: Catalogue) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            settings: None,
            router: None,
        }
    }

    /// Builds the catalogue from stops, routes and road distances.
    pub fn build<S, Stops, Routes, Distances>(
        stops: Stops,
        routes: Routes,
        distances: Distances,
    ) -> Result<Self, self::Error>
    where
        S: AsRef<str>,
        Stops: IntoIterator<Item = (S, Coordinate)>,
        Routes: IntoIterator<Item = (S, Vec<S>, bool)>,
        Distances: IntoIterator<Item = (S, S, Distance)>,
    {
        let mut builder = Catalogue::builder();
        stops.into_iter().for_each(|(name, coordinate)| {
            builder.add_stop(name.as_ref(), coordinate);
        });
        routes.into_iter().for_each(|(name, route_stops, is_circular)| {
            builder.add_route(name.as_ref(), &route_stops, is_circular);
        });
        distances.into_iter().for_each(|(from, to, distance)| {
            builder.set_road_distance(from.as_ref(), to.as_ref(), distance);
        });
        Ok(Self::from_catalogue(builder.build()?))
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Sets the routing constants. A graph built with earlier settings is dropped.
    pub fn configure_routing(&mut self, settings: RoutingSettings) -> Result<(), self::Error> {
        settings.validate()?;
        if self.router.take().is_some() {
            warn!("Routing settings changed, the routing graph must be rebuilt");
        }
        self.settings = Some(settings);
        Ok(())
    }

    /// Builds the routing graph from the complete catalogue.
    pub fn build_graph(&mut self) -> Result<&TransitRouter, self::Error> {
        let settings = self.settings.ok_or(Error::RoutingNotConfigured)?;
        let router = TransitRouter::new(self.catalogue.clone(), settings)?;
        Ok(&*self.router.insert(router))
    }

    pub fn router(&self) -> Result<&TransitRouter, self::Error> {
        self.router.as_ref().ok_or(Error::GraphNotBuilt)
    }

    pub fn route_info(&self, name: &str) -> Option<RouteInfo> {
        self.catalogue.route_info(name)
    }

    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        self.catalogue.stop_info(name)
    }

    /// Fastest trip between two stops. Fails if the graph was never built.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, self::Error> {
        Ok(self.router()?.find_route(from, to)?)
    }

    /// Draws the network as an SVG document.
    pub fn render_map(&self, settings: &RenderSettings) -> String {
        MapRenderer::new(settings, &self.catalogue).render().to_string()
    }
}
