use axum::{
    Router,
    extract::Extension,
    routing::{get, post, put},
};
use clep_school_finder::geocoding::handlers::handle_zip_coordinates;
use clep_school_finder::geocoding::service::Geocoder;
use clep_school_finder::ranking::handlers::handle_top_schools;
use clep_school_finder::search::handlers::{
    handle_filter_tests, handle_health, handle_root, handle_search_tests,
};
use clep_school_finder::store::client::StoreState;
use clep_school_finder::universities::handlers::handle_universities;
use clep_school_finder::update::handlers::{handle_bulk_update, handle_update_score};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8000".parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let Some(value) = args.get(i + 1) else {
                    anyhow::bail!("--bind requires an address, e.g. --bind 0.0.0.0:8000");
                };
                bind_addr = value.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting CLEP school finder on {}", bind_addr);

    // 1. Remote store client (degrades to disconnected, never crashes):
    let store = Arc::new(StoreState::from_env());

    // 2. Geocoding collaborators:
    let geocoder = Arc::new(Geocoder::from_env()?);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/tests/search", get(handle_search_tests))
        .route("/tests/filter", post(handle_filter_tests))
        .route("/tests/top", get(handle_top_schools))
        .route("/tests/:id/score", put(handle_update_score))
        .route("/tests/bulk-update", put(handle_bulk_update))
        .route("/api/universities", get(handle_universities))
        .route("/api/coordinates", get(handle_zip_coordinates))
        .layer(Extension(store))
        .layer(Extension(geocoder));

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
