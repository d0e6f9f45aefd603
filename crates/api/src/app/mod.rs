//! Storefront HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `collaborators.rs`: capability traits for the platform services the resources call
//! - `serializer.rs`: the product resource (type dispatch + reshaping)
//! - `dto.rs`: typed response resources
//! - `services.rs`: product repository + shared service bundle
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

pub mod collaborators;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod serializer;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

/// Build the storefront router around already-wired services.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(Extension(services))
}
