//! `storefront-core`: shared building blocks for the storefront catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::{
    AttributeId, BookingProductId, DownloadableLinkId, DownloadableSampleId, ProductId,
};
