use crate::server::handlers;
use crate::server::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the HTTP API
///
/// CORS is fully permissive; the API is consumed by a browser front end
/// served from another origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/analyze", post(handlers::analyze))
        .route("/reports", get(handlers::list_reports))
        .route(
            "/reports/:month",
            get(handlers::get_report).delete(handlers::delete_report),
        )
        .route("/infographic", post(handlers::infographic))
        .route("/send-email", post(handlers::send_email))
        .route("/cities", get(handlers::cities))
        .route("/compare-cities", post(handlers::compare_cities))
        .route(
            "/email-city-comparison",
            post(handlers::email_city_comparison),
        )
        .route(
            "/city-comparison-image",
            post(handlers::city_comparison_image),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
