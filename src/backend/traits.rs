//! Backend trait
//!
//! The scan orchestrator talks to the verification service through this trait
//! so that the HTTP client can be replaced by an in-process double.

use crate::backend::error::BackendResult;
use crate::backend::types::{Envelope, FullProductRecord, VerifyPayload};

/// Operations offered by the product verification service
///
/// Implementations must translate every failure into a `BackendError` value;
/// they never panic on transport or status errors.
#[async_trait::async_trait]
pub trait ProductBackend: Send + Sync {
    /// Verify a product: identity and authenticity only
    async fn verify(&self, product_id: &str) -> BackendResult<Envelope<VerifyPayload>>;

    /// Fetch the full product record
    async fn get(&self, product_id: &str) -> BackendResult<Envelope<FullProductRecord>>;

    /// Register a product record
    async fn register(
        &self,
        product: &FullProductRecord,
    ) -> BackendResult<Envelope<FullProductRecord>>;
}
