//! Typed error handling for the catalog
//!
//! The pure query engine never fails. Errors come from turning user input
//! into a query, from moderation actions, from configuration, and from the
//! storage behind a service.
//!
//! # Error Categories
//!
//! - [`QueryError`]: a query could not be served
//! - [`MutationError`]: a bulk status action was refused or failed as a whole
//! - [`ValidationError`]: user input could not be turned into a query state
//! - [`ConfigError`]: configuration parsing and validation
//! - [`StorageError`]: storage backend failures
//!
//! # Example
//!
//! ```rust,ignore
//! match service.bulk_update_status(&selection, BulkAction::Approve, "Admin").await {
//!     Ok(outcome) => println!("{} approved", outcome.affected()),
//!     Err(CatalogError::Mutation(MutationError::ActionPending)) => {
//!         println!("an action is already running");
//!     }
//!     Err(e) => eprintln!("Error updating status: {}", e),
//! }
//! ```

use crate::core::mutation::BulkAction;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias used by catalog services
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The main error type for the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Query(e) => e.status_code(),
            CatalogError::Mutation(e) => e.status_code(),
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Storage(e) => e.status_code(),
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Query(e) => e.error_code(),
            CatalogError::Mutation(e) => e.error_code(),
            CatalogError::Validation(e) => e.error_code(),
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Storage(e) => e.error_code(),
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::Query(QueryError::RecordNotFound { resource, id }) => {
                Some(serde_json::json!({ "resource": resource, "id": id }))
            }
            CatalogError::Mutation(MutationError::UnsupportedAction { resource, action }) => {
                Some(serde_json::json!({ "resource": resource, "action": action }))
            }
            CatalogError::Storage(StorageError::DuplicateId { resource, id }) => {
                Some(serde_json::json!({ "resource": resource, "id": id }))
            }
            CatalogError::Validation(ValidationError::UnknownSortField { field, allowed }) => {
                Some(serde_json::json!({ "field": field, "allowed": allowed }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors while serving a listing
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{resource} with id '{id}' not found")]
    RecordNotFound { resource: String, id: String },

    #[error("Unknown resource: {resource}")]
    UnknownResource { resource: String },
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            QueryError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
        }
    }
}

// =============================================================================
// Mutation Errors
// =============================================================================

/// Errors from bulk status actions
///
/// Any of these means no record was changed.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("No records selected")]
    EmptySelection,

    #[error("Action '{action}' is not supported for {resource}")]
    UnsupportedAction {
        resource: String,
        action: BulkAction,
    },

    #[error("Another status update is still in progress")]
    ActionPending,

    #[error("Status update failed: {reason}")]
    Rejected { reason: String },
}

impl MutationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MutationError::EmptySelection => StatusCode::BAD_REQUEST,
            MutationError::UnsupportedAction { .. } => StatusCode::BAD_REQUEST,
            MutationError::ActionPending => StatusCode::CONFLICT,
            MutationError::Rejected { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            MutationError::EmptySelection => "EMPTY_SELECTION",
            MutationError::UnsupportedAction { .. } => "UNSUPPORTED_ACTION",
            MutationError::ActionPending => "ACTION_PENDING",
            MutationError::Rejected { .. } => "MUTATION_REJECTED",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors turning user input into a query state
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown price range '{key}'")]
    UnknownPriceBucket { key: String },

    #[error("Invalid price range: minimum {min} is above maximum {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("Invalid price bound {value}: must be a finite number")]
    NonFiniteBound { value: f64 },

    #[error("Invalid sort expression '{value}', expected 'field', 'field:asc' or 'field:desc'")]
    InvalidSort { value: String },

    #[error("Cannot sort by '{field}'")]
    UnknownSortField {
        field: String,
        allowed: Vec<String>,
    },

    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::UnknownPriceBucket { .. } => "UNKNOWN_PRICE_RANGE",
            ValidationError::InvertedRange { .. } => "INVERTED_RANGE",
            ValidationError::NonFiniteBound { .. } => "INVALID_PRICE_BOUND",
            ValidationError::InvalidSort { .. } => "INVALID_SORT",
            ValidationError::UnknownSortField { .. } => "UNKNOWN_SORT_FIELD",
            ValidationError::FieldError { .. } => "VALIDATION_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Failed to parse config{}: {message}",
        .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default()
    )]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the storage behind a service
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to acquire {kind} lock on {resource}")]
    LockPoisoned {
        resource: String,
        kind: &'static str,
    },

    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("{resource} already holds a record with id '{id}'")]
    DuplicateId { resource: String, id: String },
}

impl StorageError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorageError::LockPoisoned { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            StorageError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            StorageError::DuplicateId { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::LockPoisoned { .. } => "STORAGE_LOCK_ERROR",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
            StorageError::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_status_codes() {
        let err: CatalogError = MutationError::EmptySelection.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "EMPTY_SELECTION");

        let err: CatalogError = MutationError::ActionPending.into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_config_parse_error_message() {
        let with_file = ConfigError::ParseError {
            file: Some("catalog.yaml".into()),
            message: "bad indent".into(),
        };
        assert_eq!(
            with_file.to_string(),
            "Failed to parse config file 'catalog.yaml': bad indent"
        );

        let without = ConfigError::ParseError {
            file: None,
            message: "bad indent".into(),
        };
        assert_eq!(without.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_transparent_display() {
        let err: CatalogError = ValidationError::UnknownPriceBucket {
            key: "cheap".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown price range 'cheap'");
    }

    #[test]
    fn test_response_details() {
        let err: CatalogError = MutationError::UnsupportedAction {
            resource: "product_submissions".into(),
            action: BulkAction::Block,
        }
        .into();
        let response = err.to_response();
        assert_eq!(response.code, "UNSUPPORTED_ACTION");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "resource": "product_submissions", "action": "block" }))
        );
    }
}
