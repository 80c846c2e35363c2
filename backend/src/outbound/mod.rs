//! Outbound adapters implementing domain ports for external services.
//!
//! - **overpass**: road elements from the Overpass interpreter.
//! - **nominatim**: reverse geocoding.
//!
//! Adapters are thin translators between domain types and provider payloads.
//! They contain no business logic.

use std::time::Duration;

use reqwest::Client;

pub mod nominatim;
pub mod overpass;

/// Build the shared reqwest client used by every outbound adapter.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_http_client(timeout: Duration, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

/// Collapse whitespace in a provider error body and cap its length for logs.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(body_preview(b"  too \n many\trequests "), "too many requests");
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.len(), 163);
        assert!(preview.ends_with("..."));
    }
}
