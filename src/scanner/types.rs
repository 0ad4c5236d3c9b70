//! Scanner Types and Enums
//!
//! The canonical verdict entity, its status taxonomy and the orchestrator's
//! read model.

use serde::{Deserialize, Serialize};

/// Authenticity classification of a verified product
///
/// The verify endpoint can only ever produce `Verified` or `Suspicious`.
/// `Authentic` and `Unknown` come from other sources such as manual entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductStatus {
    Verified,
    Authentic,
    Suspicious,
    Unknown,
}

impl ProductStatus {
    /// Status derived from the backend's authenticity flag
    pub fn from_authenticity(is_authentic: bool) -> Self {
        if is_authentic {
            ProductStatus::Verified
        } else {
            ProductStatus::Suspicious
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Verified => "Verified",
            ProductStatus::Authentic => "Authentic",
            ProductStatus::Suspicious => "Suspicious",
            ProductStatus::Unknown => "Unknown",
        }
    }

    /// Verified and authentic products are presented as trustworthy
    pub fn is_trusted(&self) -> bool {
        matches!(self, ProductStatus::Verified | ProductStatus::Authentic)
    }
}

/// A classified product verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedProduct {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_tested: Option<bool>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub is_authentic: bool,
    pub status: ProductStatus,
}

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Resolved,
    Failed,
}

/// Point-in-time copy of the orchestrator's read model
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSnapshot {
    pub state: ScanState,
    pub current_result: Option<VerifiedProduct>,
    pub error: Option<String>,
    pub history: Vec<VerifiedProduct>,
}

impl ScanSnapshot {
    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }
}
