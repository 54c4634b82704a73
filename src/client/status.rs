//! Response status checking and error classification.

use crate::transport::TransportResponse;
use crate::{Error, Result};
use tracing::warn;

// Non-JSON error bodies can be whole HTML pages from proxies.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Coarse error class for a non-success HTTP status.
pub fn error_class_for_status(status: u16) -> &'static str {
    match status {
        400 => "bad_request",
        401 => "authentication",
        403 => "permission_denied",
        404 => "not_found",
        409 => "conflict",
        429 => "rate_limited",
        503 => "overloaded",
        500..=599 => "server_error",
        _ => "http_error",
    }
}

/// Whether a caller could reasonably retry. Informational only; nothing here retries.
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 502 | 503 | 504)
}

/// Fail with [`Error::Remote`] unless the response carries a 2xx status.
pub(crate) fn check_response(response: &TransportResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let (body_status, message) = parse_error_body(&response.body);
    let status = if response.status == 0 {
        body_status.unwrap_or(0)
    } else {
        response.status
    };
    let class = error_class_for_status(status);
    warn!(status, class, %message, "store returned an error status");

    Err(Error::Remote {
        status,
        class: class.to_string(),
        message,
        retryable: is_retryable_status(status),
    })
}

/// Extract `(status, message)` from an error body.
///
/// Older stores answer `{"error": "...", "status": 404}`, newer ones
/// `{"error": {"type": "...", "reason": "..."}, "status": 404}`.
fn parse_error_body(body: &[u8]) -> (Option<u16>, String) {
    let json: serde_json::Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => return (None, raw_body_message(body)),
    };

    let status = json
        .get("status")
        .and_then(|v| v.as_u64())
        .and_then(|n| u16::try_from(n).ok());

    let message = match json.get("error") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(obj @ serde_json::Value::Object(_)) => {
            let kind = obj.get("type").and_then(|v| v.as_str());
            let reason = obj.get("reason").and_then(|v| v.as_str());
            match (kind, reason) {
                (Some(k), Some(r)) => format!("{}: {}", k, r),
                (None, Some(r)) => r.to_string(),
                (Some(k), None) => k.to_string(),
                (None, None) => obj.to_string(),
            }
        }
        Some(other) => other.to_string(),
        None => raw_body_message(body),
    };

    (status, message)
}

fn raw_body_message(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    if text.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
