//! Backend Wire Types
//!
//! Shapes exchanged with the verification service. Field names follow the
//! service's camelCase JSON.

use crate::backend::error::BackendError;
use serde::{Deserialize, Serialize};

/// Response wrapper returned by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    // Missing Option fields decode as None without a `T: Default` bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Failed envelope with an optional message
    pub fn failure(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
            data: None,
        }
    }

    /// Failed envelope describing a client-side error
    pub fn from_error(error: &BackendError) -> Self {
        Self::failure(Some(error.to_string()))
    }

    /// The payload, only when the envelope reports success and carries data
    pub fn payload(&self) -> Option<&T> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// The service message, treating an empty string as absent
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

impl<T> From<BackendError> for Envelope<T> {
    fn from(error: BackendError) -> Self {
        Self::from_error(&error)
    }
}

/// Minimal payload of the verify endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPayload {
    #[serde(alias = "id")]
    pub product_id: String,
    pub is_authentic: bool,
}

/// Full product record served by the get and register endpoints
///
/// Looser payloads name the identifier `id` and the display name `name`;
/// both are accepted here so nothing downstream has to probe for them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProductRecord {
    #[serde(alias = "id")]
    pub product_id: String,
    #[serde(default, alias = "name")]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authentic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
}
