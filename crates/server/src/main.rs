mod api;
mod state;

use crate::state::AppState;
use axum::routing::{get, post};
use busline::document::Document;
use std::{fs::File, io::BufReader, sync::Arc, time::Instant};
use tracing::{error, info};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing request document");
        std::process::exit(1);
    }

    info!("Loading network...");
    let now = Instant::now();
    let document = match File::open(&args[1]) {
        Ok(file) => Document::from_reader(BufReader::new(file)),
        Err(err) => {
            error!("Failed to open {}: {err}", args[1]);
            std::process::exit(1);
        }
    };
    let (network, render_settings) = match document
        .and_then(|document| Ok((document.build_network()?, document.render_settings)))
    {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("Failed to load network: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} stops and {} buses in {:?}",
        network.catalogue().stop_count(),
        network.catalogue().route_count(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(network, render_settings));

    let port = std::env::var("BUSLINE_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let app = axum::Router::new()
        .route("/bus/{name}", get(api::bus))
        .route("/stop/{name}", get(api::stop))
        .route("/route", get(api::route))
        .route("/map", get(api::map))
        .route("/stat", post(api::stat))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
