use busline::{document::RequestHandler, network::Network, render::RenderSettings};

pub struct AppState {
    pub network: Network,
    pub render_settings: Option<RenderSettings>,
}

impl AppState {
    pub fn new(network: Network, render_settings: Option<RenderSettings>) -> Self {
        Self {
            network,
            render_settings,
        }
    }

    pub fn handler(&self) -> RequestHandler<'_> {
        RequestHandler::new(&self.network, self.render_settings.as_ref())
    }
}
