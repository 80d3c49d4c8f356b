//! Published spreadsheet endpoints.

use serde::{Deserialize, Serialize};
use ventore_core::enums::SourceKind;

const PUBLISHED_BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQNzPsY1fQD5eC_gQCejmrmRiQpkbAN1F62ov_WU53xWyOD89Gd4k30v_yBkWuxDRxF5UNzE0AM4BKJ/pub";

fn published_url(gid: &str) -> String {
    format!("{PUBLISHED_BASE}?gid={gid}&single=true&output=csv")
}

/// A single CSV endpoint and its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Display name used in logs and error messages.
    pub name: String,
    /// URL returning `text/csv` with a header row.
    pub url: String,
}

impl SourceConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The five sheets the model is reconciled from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub master: SourceConfig,
    pub rune: SourceConfig,
    pub aria: SourceConfig,
    pub polarity: SourceConfig,
    pub compliance: SourceConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            master: SourceConfig::new("Master VG Investor List", published_url("0")),
            rune: SourceConfig::new("RUNE Cap Table", published_url("1998248498")),
            aria: SourceConfig::new("ARIA Cap Table", published_url("1947816093")),
            polarity: SourceConfig::new("Polarity Cap Table", published_url("189213357")),
            compliance: SourceConfig::new("Compliance Database", published_url("451856504")),
        }
    }
}

impl SourcesConfig {
    #[must_use]
    pub const fn get(&self, kind: SourceKind) -> &SourceConfig {
        match kind {
            SourceKind::Master => &self.master,
            SourceKind::Rune => &self.rune,
            SourceKind::Aria => &self.aria,
            SourceKind::Polarity => &self.polarity,
            SourceKind::Compliance => &self.compliance,
        }
    }

    /// All sources paired with their kind, in build order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceKind, &SourceConfig)> {
        SourceKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_published_csv() {
        let sources = SourcesConfig::default();
        for (_, source) in sources.iter() {
            assert!(source.url.starts_with("https://docs.google.com/"));
            assert!(source.url.ends_with("output=csv"));
            assert!(!source.name.is_empty());
        }
        assert!(sources.master.url.contains("gid=0&"));
    }

    #[test]
    fn get_maps_every_kind() {
        let sources = SourcesConfig::default();
        assert_eq!(sources.get(SourceKind::Rune).name, "RUNE Cap Table");
        assert_eq!(sources.get(SourceKind::Compliance).name, "Compliance Database");
        assert_eq!(sources.iter().count(), 5);
    }
}
