//! Storefront API: product resources and the routes that serve them.

pub mod app;
pub mod config;

pub use app::collaborators::Collaborators;
pub use app::dto::SerializedProduct;
pub use app::serializer::ProductSerializer;
pub use config::ResourceConfig;
