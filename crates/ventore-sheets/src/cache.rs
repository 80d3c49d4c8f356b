//! In-memory TTL cache of fetched sheet text, keyed by URL.
//!
//! Lookups classify entries as fresh or stale against a caller-supplied
//! clock so expiry is testable. A zero TTL disables the cache: every lookup
//! misses and nothing is stored.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

/// Cached response body for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedText {
    pub text: Arc<str>,
    pub fetched_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum CacheLookup {
    Miss,
    Fresh(CachedText),
    Stale(CachedText),
}

#[derive(Debug)]
pub struct SheetCache {
    entries: RwLock<HashMap<String, CachedText>>,
    ttl: Duration,
}

impl SheetCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub async fn lookup(&self, url: &str, now: DateTime<Utc>) -> CacheLookup {
        if !self.is_enabled() {
            return CacheLookup::Miss;
        }
        let entries = self.entries.read().await;
        match entries.get(url) {
            None => CacheLookup::Miss,
            Some(entry) if entry.expires_at > now => CacheLookup::Fresh(entry.clone()),
            Some(entry) => CacheLookup::Stale(entry.clone()),
        }
    }

    /// Store `text` for `url`, replacing any previous entry.
    pub async fn put(&self, url: &str, text: Arc<str>, now: DateTime<Utc>) -> CachedText {
        let ttl = TimeDelta::from_std(self.ttl).unwrap_or(TimeDelta::MAX);
        let entry = CachedText {
            text,
            fetched_at: now,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        if self.is_enabled() {
            self.entries
                .write()
                .await
                .insert(url.to_string(), entry.clone());
        }
        entry
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn miss_then_fresh_then_stale() {
        let cache = SheetCache::new(Duration::from_secs(300));
        let url = "https://sheets.example/master.csv";

        assert!(matches!(cache.lookup(url, t0()).await, CacheLookup::Miss));

        cache.put(url, Arc::from("Record ID\nR1\n"), t0()).await;
        match cache.lookup(url, t0() + TimeDelta::seconds(299)).await {
            CacheLookup::Fresh(entry) => assert_eq!(&*entry.text, "Record ID\nR1\n"),
            other => panic!("expected fresh, got {other:?}"),
        }

        assert!(matches!(
            cache.lookup(url, t0() + TimeDelta::seconds(300)).await,
            CacheLookup::Stale(_)
        ));
    }

    #[tokio::test]
    async fn put_replaces_previous_entry() {
        let cache = SheetCache::new(Duration::from_secs(60));
        let url = "https://sheets.example/aria.csv";
        cache.put(url, Arc::from("old"), t0()).await;
        let later = t0() + TimeDelta::seconds(120);
        cache.put(url, Arc::from("new"), later).await;

        match cache.lookup(url, later).await {
            CacheLookup::Fresh(entry) => {
                assert_eq!(&*entry.text, "new");
                assert_eq!(entry.fetched_at, later);
            }
            other => panic!("expected fresh, got {other:?}"),
        }
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn zero_ttl_never_stores() {
        let cache = SheetCache::new(Duration::ZERO);
        let url = "https://sheets.example/rune.csv";
        let entry = cache.put(url, Arc::from("x"), t0()).await;
        assert_eq!(entry.expires_at, t0());
        assert!(cache.is_empty().await);
        assert!(matches!(cache.lookup(url, t0()).await, CacheLookup::Miss));
    }
}
