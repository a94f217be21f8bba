//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (rate limiting with `Retry-After` parsing,
//! non-success → [`GitHubError::Api`]) so the endpoint modules stay focused on
//! request construction and response mapping.

use serde::Deserialize;

use crate::error::GitHubError;

/// Fallback wait when GitHub does not say how long to back off.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429**, or **403** with `X-RateLimit-Remaining: 0` →
///   [`GitHubError::RateLimited`]
/// - **Non-success status** → [`GitHubError::Api`] carrying GitHub's
///   `message` field when the body is JSON, else the raw body
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GitHubError> {
    let status = resp.status().as_u16();
    if status == 429 || (status == 403 && rate_limit_exhausted(&resp)) {
        return Err(GitHubError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(GitHubError::Api { status, message });
    }
    Ok(resp)
}

fn rate_limit_exhausted(resp: &reqwest::Response) -> bool {
    resp.headers()
        .get("X-RateLimit-Remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u32>().ok())
        == Some(0)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
