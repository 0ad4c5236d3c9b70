//! Backend Error Types

/// Failures raised by the backend client
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced an HTTP response (connection, timeout, TLS)
    #[error("Network request failed: {message}")]
    Transport { message: String },

    /// The service answered with a non-success status.
    /// `message` comes from the body when it carries one
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not a valid envelope
    #[error("Failed to decode backend response: {message}")]
    Decode { message: String },

    /// The configured base URL cannot be used
    #[error("Invalid backend URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl crate::core::error_handling::ContextualError for BackendError {
    fn is_user_actionable(&self) -> bool {
        match self {
            BackendError::InvalidUrl { .. } => true, // User can fix the URL
            BackendError::Status { .. } => true,     // Service explained the failure
            BackendError::Transport { .. } => false,
            BackendError::Decode { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            BackendError::InvalidUrl { message, .. } => Some(message),
            BackendError::Status { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
