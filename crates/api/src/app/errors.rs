use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::NotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        CatalogError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        CatalogError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        CatalogError::DepthExceeded { .. } => {
            tracing::error!("product graph too deep: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "depth_exceeded", err.to_string())
        }
        CatalogError::Collaborator { .. } => {
            tracing::warn!("upstream failure while building product resource: {err}");
            json_error(StatusCode::BAD_GATEWAY, "collaborator_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
