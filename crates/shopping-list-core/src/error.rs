//! Error types for the shopping list store
//!
//! We use `thiserror` so every failure carries a readable message for logs
//! while callers can still match on the variant to pick a response.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No item carries the requested name
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item violates the name/quantity rules
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),

    /// The backing file exists but could not be read
    #[error("Failed to read store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backing file could not be replaced
    #[error("Failed to write store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The backing file is not a JSON array of valid items
    #[error("Corrupt store {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The collection could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a JSON value is not an acceptable item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("item must be a JSON object")]
    NotAnObject,

    #[error("name must be a non-empty string")]
    InvalidName,

    #[error("quantity must be a number greater than 0")]
    InvalidQuantity,
}
