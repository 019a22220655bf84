use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    catalogue::{DistancePolicy, RouteInfo, StopInfo},
    render::RenderSettings,
    router::{Itinerary, Leg, RoutingSettings},
};

pub(crate) const NOT_FOUND: &str = "not found";

/// Describes a network and the questions to ask about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    #[serde(default)]
    pub distance_policy: DistancePolicy,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A stop or bus definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Meters driven from this stop to each named neighbour.
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRequest {
    pub id: i64,
    #[serde(flatten)]
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Query {
    Bus { name: String },
    Stop { name: String },
    Map,
    Route { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus {
        curvature: f64,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        buses: Vec<Arc<str>>,
    },
    Map {
        map: String,
    },
    Route {
        total_time: f64,
        items: Vec<Leg>,
    },
    NotFound {
        error_message: String,
    },
}

impl ResponseBody {
    pub fn not_found() -> Self {
        Self::NotFound {
            error_message: NOT_FOUND.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<RouteInfo> for ResponseBody {
    fn from(value: RouteInfo) -> Self {
        Self::Bus {
            curvature: value.curvature,
            route_length: value.route_length.as_meters(),
            stop_count: value.stop_count,
            unique_stop_count: value.unique_stop_count,
        }
    }
}

impl From<StopInfo> for ResponseBody {
    fn from(value: StopInfo) -> Self {
        Self::Stop { buses: value.buses }
    }
}

impl From<Itinerary> for ResponseBody {
    fn from(value: Itinerary) -> Self {
        Self::Route {
            total_time: value.total_time.as_minutes(),
            items: value.items,
        }
    }
}
