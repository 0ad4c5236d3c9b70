//! Backend Client
//!
//! HTTP client for the product verification service. Every call returns the
//! service's `{success, message?, data?}` envelope or a typed `BackendError`;
//! transport and status failures never escape as panics.
//!
//! ## Endpoints
//!
//! - `GET {base}/products/{id}/verify`: identity and authenticity only
//! - `GET {base}/products/{id}`: full product record
//! - `POST {base}/products/register`: register a full product record
//!
//! The base URL is injected through `BackendConfig` and resolved once.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::BackendClient;
pub use config::{BackendConfig, BaseUrlSource};
pub use error::{BackendError, BackendResult};
pub use traits::ProductBackend;
pub use types::{Envelope, FullProductRecord, VerifyPayload};
