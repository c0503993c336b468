//! Boundary classification of provider failures into [`TranslationError`].
//!
//! This is the only place that looks at transport errors and HTTP statuses.

use polyglot_core::error::TranslationError;
use reqwest::StatusCode;

/// Longest slice of a provider error body kept for logs.
const MAX_BODY_IN_ERROR: usize = 200;

/// Classify a failed request (no usable HTTP response).
pub fn classify_transport_error(e: &reqwest::Error) -> TranslationError {
    if e.is_timeout() {
        return TranslationError::Timeout;
    }
    if let Some(status) = e.status() {
        return classify_status(status, "");
    }
    if e.is_decode() {
        return TranslationError::ServiceUnavailable(format!("unreadable response: {e}"));
    }
    // connect, DNS, reset, redirect loops, body read errors
    TranslationError::ServiceUnavailable(e.to_string())
}

/// Classify a non-success HTTP status.
pub fn classify_status(status: StatusCode, body: &str) -> TranslationError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return TranslationError::RateLimited;
    }
    if status == StatusCode::PAYLOAD_TOO_LARGE || status == StatusCode::URI_TOO_LONG {
        return TranslationError::InvalidInput(format!("text too long for provider ({status})"));
    }
    if status.is_server_error() {
        return TranslationError::ServiceUnavailable(format!("provider returned {status}"));
    }
    if status.is_client_error() {
        return TranslationError::Rejected(format!("{status}: {}", truncate(body)));
    }
    TranslationError::ServiceUnavailable(format!("unexpected status {status}"))
}

fn truncate(s: &str) -> &str {
    let s = s.trim();
    if s.len() <= MAX_BODY_IN_ERROR {
        return s;
    }
    let mut end = MAX_BODY_IN_ERROR;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
