use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::client::SearchBackend;
use crate::controller::SearchController;

pub mod handlers;
pub mod models;

/// Every visitor shares the controller's single view; the page is meant for one local user.
pub fn create_router<B: SearchBackend>(controller: SearchController<B>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index_handler::<B>))
        .route("/search", get(handlers::search_handler::<B>))
        .route("/output", post(handlers::output_handler::<B>))
        .with_state(controller)
        .layer(cors)
}
