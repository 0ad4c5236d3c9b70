//! Backend API
//!
//! Public exports of the backend subsystem. Other modules import from here
//! rather than from the internal modules directly.

// HTTP client and its configuration
pub use crate::backend::client::BackendClient;
pub use crate::backend::config::{
    BackendConfig, BaseUrlSource, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS,
};

// Error handling
pub use crate::backend::error::{BackendError, BackendResult};

// Seam for alternative backends and test doubles
pub use crate::backend::traits::ProductBackend;

// Wire types
pub use crate::backend::types::{Envelope, FullProductRecord, VerifyPayload};
