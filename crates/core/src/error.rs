//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog and resource layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The resource layer has no recovery logic of its own: whatever a collaborator
/// reports is carried to the caller unchanged in one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required record was missing (e.g. the booking record of a booking product).
    #[error("{entity} not found for {key}")]
    NotFound { entity: &'static str, key: String },

    /// An external service failed while answering a lookup.
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    /// Nested serialization went deeper than the configured limit.
    #[error("nesting depth limit of {limit} exceeded at product {product_id}")]
    DepthExceeded { limit: usize, product_id: String },

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator,
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for "record is missing" failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
