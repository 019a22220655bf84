pub mod catalogue;
pub mod document;
pub mod graph;
pub mod network;
pub mod render;
pub mod router;
pub mod shared;

pub mod prelude {
    pub use crate::catalogue::{
        Catalogue, CatalogueBuilder, DistancePolicy, Route, RouteInfo, Stop, StopInfo,
    };
    pub use crate::document::{Document, RequestHandler, StatRequest, StatResponse};
    pub use crate::network::Network;
    pub use crate::render::RenderSettings;
    pub use crate::router::{Itinerary, Leg, RoutingSettings, TransitRouter};
    pub use crate::shared::{Coordinate, Distance, Duration, Named};
}
