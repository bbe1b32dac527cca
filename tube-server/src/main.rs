use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tube_server::geocode::{GeocoderConfig, NominatimClient};
use tube_server::tfl::{TflClient, TflConfig};
use tube_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let geocoder =
        NominatimClient::new(GeocoderConfig::default()).expect("Failed to create geocoder client");
    let tfl = TflClient::new(TflConfig::default()).expect("Failed to create TfL client");

    let state = AppState::new(geocoder, tfl);
    let app = create_router(state, "tube-server/static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Tube Journey Planner listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
