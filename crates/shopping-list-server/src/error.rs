//! Error types for the server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shopping_list_core::{ItemError, StoreError};
use thiserror::Error;

/// Startup and configuration errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::Serialization(e.to_string())
    }
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Per-request failure, rendered as a plain text response.
///
/// The `Display` text of each variant is exactly the body sent to the client,
/// except for store failures which are logged and reported generically.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Item name is required")]
    MissingName,

    #[error("Invalid item. Name must be non-empty and quantity must be greater than 0.")]
    InvalidItem(#[from] ItemError),

    #[error("Item not found")]
    ItemNotFound(String),

    #[error("Not Found")]
    UnknownRoute,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal Server Error")]
    Store(StoreError),

    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingName | ApiError::InvalidItem(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ItemNotFound(_) | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(name) => ApiError::ItemNotFound(name),
            StoreError::InvalidItem(reason) => ApiError::InvalidItem(reason),
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store(e) => tracing::error!("Store failure: {}", e),
            ApiError::Internal(e) => tracing::error!("Internal failure: {}", e),
            ApiError::InvalidItem(reason) => tracing::debug!("Rejected item: {}", reason),
            ApiError::ItemNotFound(name) => tracing::debug!("No item named {:?}", name),
            other => tracing::debug!("Rejected request: {}", other),
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_store_errors_map_to_statuses() {
        let not_found: ApiError = StoreError::NotFound("milk".into()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid: ApiError = StoreError::InvalidItem(ItemError::InvalidQuantity).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let corrupt: ApiError = StoreError::Corrupt {
            path: PathBuf::from("list.json"),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(corrupt.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(corrupt.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(ApiError::InvalidJson.to_string(), "Invalid JSON format");
        assert_eq!(ApiError::MissingName.to_string(), "Item name is required");
        assert_eq!(ApiError::ItemNotFound("x".into()).to_string(), "Item not found");
        assert!(ApiError::InvalidItem(ItemError::InvalidName)
            .to_string()
            .starts_with("Invalid item."));
    }
}
