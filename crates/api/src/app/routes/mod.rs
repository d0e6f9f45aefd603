use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for all storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::router())
}
