//! Scanner API
//!
//! Public API for the scanner system, consolidating all external exports.
//! Follows the same pattern as the backend::api module.

// Orchestration
pub use crate::scanner::orchestrator::ScanOrchestrator;

// Error handling
pub use crate::scanner::error::{ScanError, ScanResult, DEFAULT_FAILURE_MESSAGE};

// Session history
pub use crate::scanner::history::{HistoryBuffer, HISTORY_CAPACITY};

// Normalisation
pub use crate::scanner::normalizer::{demo_product, from_record, normalize, DEMO_PRODUCT_ID};

// Core data types and read model
pub use crate::scanner::types::{ProductStatus, ScanSnapshot, ScanState, VerifiedProduct};
