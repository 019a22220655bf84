use std::io::{self, Read, Write};

mod models;
pub use models::*;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalogue::{self, Catalogue},
    network::{self, Network},
    render::RenderSettings,
    shared::geo::{Coordinate, Distance},
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] catalogue::Error),
    #[error("Network error: {0}")]
    Network(#[from] network::Error),
}

impl Document {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, self::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, self::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the catalogue described by the base requests.
    pub fn catalogue(&self) -> Result<Catalogue, self::Error> {
        let mut builder = Catalogue::builder().with_distance_policy(self.distance_policy);
        for request in self.base_requests.iter() {
            match request {
                BaseRequest::Stop {
                    name,
                    latitude,
                    longitude,
                    road_distances,
                } => {
                    builder.add_stop(name, Coordinate::from((*latitude, *longitude)));
                    road_distances.iter().for_each(|(to, meters)| {
                        builder.set_road_distance(name, to, Distance::from_meters(*meters));
                    });
                }
                BaseRequest::Bus {
                    name,
                    stops,
                    is_roundtrip,
                } => {
                    builder.add_route(name, stops, *is_roundtrip);
                }
            }
        }
        Ok(builder.build()?)
    }

    /// Builds the network, and its routing graph when routing settings are present.
    pub fn build_network(&self) -> Result<Network, self::Error> {
        let mut network = Network::from_catalogue(self.catalogue()?);
        if let Some(settings) = self.routing_settings {
            network.configure_routing(settings)?;
            network.build_graph()?;
        }
        Ok(network)
    }

    pub fn handler<'a>(&'a self, network: &'a Network) -> RequestHandler<'a> {
        RequestHandler::new(network, self.render_settings.as_ref())
    }
}

/// Answers stat requests against a built network.
pub struct RequestHandler<'a> {
    network: &'a Network,
    render_settings: Option<&'a RenderSettings>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(network: &'a Network, render_settings: Option<&'a RenderSettings>) -> Self {
        Self {
            network,
            render_settings,
        }
    }

    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let body = match &request.query {
            Query::Bus { name } => self.network.route_info(name).map(ResponseBody::from),
            Query::Stop { name } => self.network.stop_info(name).map(ResponseBody::from),
            Query::Map => self.render_settings.map(|settings| ResponseBody::Map {
                map: self.network.render_map(settings),
            }),
            Query::Route { from, to } => match self.network.find_route(from, to) {
                Ok(itinerary) => itinerary.map(ResponseBody::from),
                Err(err @ network::Error::Router(_)) => {
                    debug!("Route request {} failed: {err}", request.id);
                    None
                }
                Err(err) => {
                    warn!("Route request {} cannot be answered: {err}", request.id);
                    None
                }
            },
        };
        StatResponse {
            request_id: request.id,
            body: body.unwrap_or_else(ResponseBody::not_found),
        }
    }

    pub fn process(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|request| self.handle(request)).collect()
    }
}

/// Reads a whole document, answers its stat requests and writes the answers as a JSON array.
pub fn run<R: Read, W: Write>(reader: R, mut writer: W) -> Result<(), self::Error> {
    let document = Document::from_reader(reader)?;
    let network = document.build_network()?;
    let responses = document.handler(&network).process(&document.stat_requests);
    info!("Answered {} stat requests", responses.len());
    serde_json::to_writer_pretty(&mut writer, &responses)?;
    writer.flush()?;
    Ok(())
}
