//! Generic error handling utilities
//!
//! Provides unified error reporting across the backend, scanner and CLI error
//! types while keeping each domain's own error enum.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (an empty product code, a malformed backend URL, a bad
/// config file) carry a message that should be shown as-is. System errors
/// (transport failures, undecodable responses) are shown with generic context
/// and their details go to the debug log.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`. When it returns `false`, `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error contains a specific message that should be
    /// displayed directly to the user
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// # Arguments
/// * `error` - The error to handle (must implement ContextualError)
/// * `operation_context` - Human-readable description of the operation that failed
///
/// # Examples
/// ```rust,no_run
/// # use authscan::core::error_handling::log_error_with_context;
/// # use authscan::scanner::api::ScanError;
/// let err = ScanError::Validation { message: "Product code must not be empty".into() };
/// log_error_with_context(&err, "Product verification");
/// // Logs: "FATAL: Product code must not be empty"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("FATAL: {}", headline(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// The single line shown to the user for a failed operation
///
/// User-actionable errors show their own message, system errors show the
/// operation context followed by the error's display form.
pub fn headline<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match (error.is_user_actionable(), error.user_message()) {
        (true, Some(user_msg)) => user_msg.to_string(),
        _ => format!("{}: {}", operation_context, error),
    }
}
