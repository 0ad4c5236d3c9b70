//! Scanner Component
//!
//! Turns a decoded product code (or an explicit demo request) into a classified
//! authenticity verdict and keeps a short history of verdicts for the session.
//!
//! ## Core Features
//!
//! - **ScanOrchestrator**: single-flight scanning state machine and read model
//! - **Result Normalizer**: maps backend payloads onto `VerifiedProduct`
//! - **HistoryBuffer**: most-recent-first, five-entry session history
//! - **Demo Path**: fixed demo verdict without a network call

pub mod api;
pub mod error;
pub mod history;
pub mod normalizer;
pub mod orchestrator;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ScanError, ScanResult};
pub use history::HistoryBuffer;
pub use orchestrator::ScanOrchestrator;
pub use types::{ProductStatus, ScanSnapshot, ScanState, VerifiedProduct};
