//! Result Normalizer
//!
//! Pure mapping from backend payloads (or the built-in demo fixture) onto
//! `VerifiedProduct`.

use crate::backend::types::{Envelope, FullProductRecord, VerifyPayload};
use crate::scanner::types::{ProductStatus, VerifiedProduct};

pub const DEMO_PRODUCT_ID: &str = "DEMO123";

pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNKNOWN_ORIGIN: &str = "Unknown Origin";

/// The fixed demo verdict
pub fn demo_product() -> VerifiedProduct {
    VerifiedProduct {
        product_id: DEMO_PRODUCT_ID.to_string(),
        product_name: "Demo Product".to_string(),
        category: "Demo Category".to_string(),
        origin: "Demo Origin".to_string(),
        farmer: None,
        harvest_date: None,
        lab_tested: None,
        certifications: vec!["Demo Cert".to_string()],
        is_authentic: true,
        status: ProductStatus::Verified,
    }
}

/// Map a verify envelope onto a product
///
/// With `is_demo` the envelope is ignored and the demo product returned.
/// Otherwise `None` signals that the envelope carries no usable product:
/// it reported failure, has no data, or names no product.
pub fn normalize(envelope: &Envelope<VerifyPayload>, is_demo: bool) -> Option<VerifiedProduct> {
    if is_demo {
        return Some(demo_product());
    }

    let payload = envelope.payload()?;
    if payload.product_id.trim().is_empty() {
        return None;
    }

    Some(VerifiedProduct {
        product_id: payload.product_id.clone(),
        product_name: UNKNOWN_PRODUCT_NAME.to_string(),
        category: UNKNOWN_CATEGORY.to_string(),
        origin: UNKNOWN_ORIGIN.to_string(),
        farmer: None,
        harvest_date: None,
        lab_tested: None,
        certifications: Vec::new(),
        is_authentic: payload.is_authentic,
        status: ProductStatus::from_authenticity(payload.is_authentic),
    })
}

/// Adapt a full product record onto a product
///
/// Blank display fields fall back to the same placeholders as the verify
/// mapping. A record that does not state its authenticity is treated as not
/// authentic.
pub fn from_record(record: &FullProductRecord) -> Option<VerifiedProduct> {
    if record.product_id.trim().is_empty() {
        return None;
    }

    let or_placeholder = |value: &str, placeholder: &str| {
        if value.trim().is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        }
    };

    let is_authentic = record.is_authentic.unwrap_or(false);

    Some(VerifiedProduct {
        product_id: record.product_id.clone(),
        product_name: or_placeholder(&record.product_name, UNKNOWN_PRODUCT_NAME),
        category: or_placeholder(&record.category, UNKNOWN_CATEGORY),
        origin: or_placeholder(&record.origin, UNKNOWN_ORIGIN),
        farmer: None,
        harvest_date: None,
        lab_tested: None,
        certifications: record.certifications.clone(),
        is_authentic,
        status: ProductStatus::from_authenticity(is_authentic),
    })
}
