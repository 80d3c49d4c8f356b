//! Shared HTTP response checks for sheet fetches.
//!
//! Centralizes status-code handling (429 with `Retry-After` parsing,
//! non-success → [`SheetError::Api`]) so the client stays focused on caching
//! and parsing.

use crate::error::SheetError;

/// Longest response body kept in an [`SheetError::Api`] message.
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(
    resp: reqwest::Response,
    sheet: &str,
) -> Result<reqwest::Response, SheetError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(SheetError::RateLimited {
            sheet: sheet.to_string(),
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        truncate_on_char_boundary(&mut message, MAX_ERROR_BODY);
        return Err(SheetError::Api {
            sheet: sheet.to_string(),
            status,
            message,
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
