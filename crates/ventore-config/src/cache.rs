//! Sheet cache configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default revalidation window for fetched sheet text.
const fn default_revalidate_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long fetched CSV text is reused before refetching. `0` disables
    /// caching.
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            revalidate_secs: default_revalidate_secs(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.revalidate_secs > 0
    }
}
