//! Axum application setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Navigation
        .route("/pages", get(handlers::list_pages))
        // Art Explorer
        .route("/explorer", get(handlers::get_explorer))
        .route("/explorer/select", post(handlers::select_art))
        // Cultural Experiences
        .route("/experiences", get(handlers::get_experiences))
        // Responsible Tourism
        .route("/dashboards", get(handlers::get_dashboards))
        // Preservation Hub
        .route("/preservation", get(handlers::get_preservation))
        .route("/preservation/artifacts", post(handlers::submit_artifact))
        // Settings
        .route(
            "/settings",
            get(handlers::get_settings).post(handlers::update_settings),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
