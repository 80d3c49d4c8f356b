//! # ventore-sheets
//!
//! Fetches published spreadsheets as CSV and turns them into header-keyed
//! rows.
//!
//! - [`SheetClient`] retrieves text over HTTP through a per-URL TTL cache
//!   and parses it; any non-success status is a [`SheetError`].
//! - [`parse_csv`] is the network-free parser: malformed records become
//!   [`ParseWarning`]s instead of errors.
//! - [`get_cell`], [`to_bool`] and [`to_number`] read cells across
//!   header-name variants and coerce text without ever failing.

mod cache;
mod cell;
mod error;
mod http;
mod parse;
mod row;

pub use cache::{CacheLookup, CachedText, SheetCache};
pub use cell::{get_cell, normalize_header, to_bool, to_number};
pub use error::SheetError;
pub use parse::{ParseWarning, ParsedSheet, parse_csv};
pub use row::Row;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use ventore_config::{CacheConfig, HttpConfig, SourceConfig};

use crate::http::check_response;

/// Raw text of one sheet and where it came from.
#[derive(Debug, Clone)]
pub struct FetchedText {
    pub text: Arc<str>,
    pub fetched_at: DateTime<Utc>,
    /// Whether the text was served from the cache without a request.
    pub from_cache: bool,
}

/// A fetched and parsed sheet.
#[derive(Debug, Clone)]
pub struct FetchedSheet {
    /// Display name of the source.
    pub name: String,
    pub sheet: ParsedSheet,
    pub fetched_at: DateTime<Utc>,
    pub from_cache: bool,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for published CSV sheets. Cheap to clone; clones share one
/// cache.
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    cache: Arc<SheetCache>,
}

impl SheetClient {
    /// Build a client from the `[http]` and `[cache]` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Client`] if the TLS backend cannot initialize.
    pub fn new(http: &HttpConfig, cache: &CacheConfig) -> Result<Self, SheetError> {
        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(Duration::from_secs(http.timeout_secs))
            .build()
            .map_err(SheetError::Client)?;
        if !cache.is_enabled() {
            tracing::debug!("sheet cache disabled");
        }
        Ok(Self {
            http: client,
            cache: Arc::new(SheetCache::new(cache.ttl())),
        })
    }

    #[must_use]
    pub fn cache(&self) -> &SheetCache {
        &self.cache
    }

    /// Fetch the raw text of a sheet, serving fresh cache entries without a
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError`] if the request fails or the server answers
    /// with a non-success status. Failed responses are never cached.
    pub async fn fetch_text(&self, source: &SourceConfig) -> Result<FetchedText, SheetError> {
        match self.cache.lookup(&source.url, Utc::now()).await {
            CacheLookup::Fresh(entry) => {
                tracing::debug!(sheet = %source.name, fetched_at = %entry.fetched_at, "sheet cache hit");
                return Ok(FetchedText {
                    text: entry.text,
                    fetched_at: entry.fetched_at,
                    from_cache: true,
                });
            }
            CacheLookup::Stale(_) => {
                tracing::debug!(sheet = %source.name, "sheet cache stale; refetching");
            }
            CacheLookup::Miss => {}
        }

        let transport = |error| SheetError::Http {
            sheet: source.name.clone(),
            error,
        };
        let resp = self
            .http
            .get(&source.url)
            .send()
            .await
            .map_err(transport)?;
        let resp = check_response(resp, &source.name).await?;
        let text: Arc<str> = Arc::from(resp.text().await.map_err(transport)?);

        let entry = self.cache.put(&source.url, text, Utc::now()).await;
        tracing::debug!(sheet = %source.name, bytes = entry.text.len(), "sheet fetched");
        Ok(FetchedText {
            text: entry.text,
            fetched_at: entry.fetched_at,
            from_cache: false,
        })
    }

    /// Fetch and parse a sheet. Parse warnings are logged and returned on
    /// the sheet; they never fail the fetch.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_text`].
    pub async fn fetch_sheet(&self, source: &SourceConfig) -> Result<FetchedSheet, SheetError> {
        let fetched = self.fetch_text(source).await?;
        let sheet = parse_csv(&fetched.text);
        for warning in &sheet.warnings {
            tracing::warn!(
                sheet = %source.name,
                line = warning.line,
                message = %warning.message,
                "CSV parse warning"
            );
        }
        tracing::debug!(sheet = %source.name, rows = sheet.rows.len(), "sheet parsed");
        Ok(FetchedSheet {
            name: source.name.clone(),
            sheet,
            fetched_at: fetched.fetched_at,
            from_cache: fetched.from_cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let client = SheetClient::new(&HttpConfig::default(), &CacheConfig::default()).unwrap();
        assert!(client.cache().is_enabled());
        assert_eq!(client.cache().ttl(), Duration::from_secs(300));
    }

    #[test]
    fn zero_revalidate_window_disables_client_cache() {
        let cache = CacheConfig { revalidate_secs: 0 };
        let client = SheetClient::new(&HttpConfig::default(), &cache).unwrap();
        assert!(!client.cache().is_enabled());
    }

    #[test]
    fn clones_share_cache() {
        let client = SheetClient::new(&HttpConfig::default(), &CacheConfig::default()).unwrap();
        let clone = client.clone();
        assert!(std::ptr::eq(client.cache(), clone.cache()));
    }
}
