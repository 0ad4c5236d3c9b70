//! Validation utilities for product codes and configuration values
//!
//! Plain `Result<_, String>` checks; callers wrap the message in their own
//! domain error.

use reqwest::Url;

/// Validate a decoded product code and return its trimmed form
///
/// Only blank codes are rejected. Inner characters, including GS1 group
/// separators, are passed through untouched.
pub fn validate_product_code(code: &str) -> Result<String, String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err("Product code must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate a backend base URL
///
/// Only http:// and https:// are accepted. The returned URL has no trailing
/// empty path segment so that endpoint paths can be appended directly.
pub fn validate_base_url(url: &str) -> Result<Url, String> {
    let trimmed = url.trim();
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(format!(
            "Invalid URL scheme. Only http:// and https:// are supported: {}",
            trimmed
        ));
    }

    let mut parsed =
        Url::parse(trimmed).map_err(|e| format!("Invalid backend URL '{}': {}", trimmed, e))?;

    if parsed.cannot_be_a_base() {
        return Err(format!("Backend URL '{}' cannot be used as a base", trimmed));
    }

    if let Ok(mut segments) = parsed.path_segments_mut() {
        segments.pop_if_empty();
    }
    Ok(parsed)
}

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_code() {
        assert_eq!(validate_product_code("HERB-001").unwrap(), "HERB-001");
        assert_eq!(validate_product_code("  HERB-001 \n").unwrap(), "HERB-001");
        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
        assert!(validate_product_code("\t\n").is_err());
        assert_eq!(
            validate_product_code(" 0109501101530008\u{1d}10ABC123 ").unwrap(),
            "0109501101530008\u{1d}10ABC123"
        );
    }

    #[test]
    fn test_validate_base_url() {
        let url = validate_base_url("http://localhost:4001/blockchain").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4001/blockchain");

        let url = validate_base_url("https://verify.example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://verify.example.com/api");

        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("localhost:4001").is_err());
        assert!(validate_base_url("http://").is_err());
    }

    #[test]
    fn test_validate_positive_int() {
        assert_eq!(validate_positive_int("5").unwrap(), 5);
        assert_eq!(validate_positive_int(" 30 ").unwrap(), 30);
        assert!(validate_positive_int("0").is_err());
        assert!(validate_positive_int("-5").is_err());
        assert!(validate_positive_int("not_a_number").is_err());
    }
}
