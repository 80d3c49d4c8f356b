//! Sheet fetch error types.

use thiserror::Error;

/// Errors that abort fetching a sheet. Row-level CSV problems are never
/// errors; they surface as [`crate::ParseWarning`]s.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (DNS, TLS, timeout, body read).
    #[error("failed to fetch {sheet}: {error}")]
    Http {
        /// Display name of the sheet being fetched.
        sheet: String,
        #[source]
        error: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("failed to fetch {sheet} ({status})")]
    Api {
        /// Display name of the sheet being fetched.
        sheet: String,
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// The server returned 429 Too Many Requests.
    #[error("failed to fetch {sheet} (429): rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        sheet: String,
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl SheetError {
    /// Display name of the sheet the error belongs to, if any.
    #[must_use]
    pub fn sheet(&self) -> Option<&str> {
        match self {
            Self::Client(_) => None,
            Self::Http { sheet, .. } | Self::Api { sheet, .. } | Self::RateLimited { sheet, .. } => {
                Some(sheet.as_str())
            }
        }
    }

    /// HTTP status, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Client(_) | Self::Http { .. } => None,
        }
    }
}
