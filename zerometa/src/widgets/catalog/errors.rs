use thiserror::Error;

/// Errors emitted while reading or validating the layer catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    /// Filesystem operation failed.
    #[error("catalog IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Catalog entries did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
