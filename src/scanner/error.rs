//! Scanner Error Types

use crate::backend::error::BackendError;

/// Message shown when the service reports failure without explaining why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Product not found or invalid QR code";

/// Message shown when a scan ends without reaching a verdict
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Unknown error occurred";

/// Scanner error types
///
/// The display form of every variant is the message surfaced in the read
/// model's `error` field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    /// The code was rejected before any backend call
    #[error("{message}")]
    Validation { message: String },

    /// Transport failure or non-success HTTP status
    #[error("{message}")]
    Network { message: String },

    /// The service answered but produced no usable product
    #[error("{message}")]
    NotFoundOrInvalid { message: String },

    /// Anything else raised below the orchestrator
    #[error("{message}")]
    Unknown { message: String },

    /// Another scan is still in flight; this command was not started
    #[error("A scan is already in progress")]
    Busy,
}

impl ScanError {
    /// Short category name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::Validation { .. } => "validation",
            ScanError::Network { .. } => "network",
            ScanError::NotFoundOrInvalid { .. } => "not-found-or-invalid",
            ScanError::Unknown { .. } => "unknown",
            ScanError::Busy => "busy",
        }
    }
}

impl From<BackendError> for ScanError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Transport { .. } | BackendError::Status { .. } => ScanError::Network {
                message: error.to_string(),
            },
            BackendError::Decode { .. } | BackendError::InvalidUrl { .. } => ScanError::Unknown {
                message: error.to_string(),
            },
        }
    }
}

impl crate::core::error_handling::ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ScanError::Validation { .. } => true,        // User can fix the code
            ScanError::NotFoundOrInvalid { .. } => true, // Service explained the verdict
            ScanError::Busy => true,                     // User can retry later
            ScanError::Network { .. } => false,
            ScanError::Unknown { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ScanError::Validation { message } => Some(message),
            ScanError::NotFoundOrInvalid { message } => Some(message),
            ScanError::Busy => Some("A scan is already in progress"),
            _ => None,
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
