//! Text normalization shared by the token parser and identity resolver.

/// Trim and collapse every whitespace run to a single space.
#[must_use]
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lookup form of `value`: [`normalize_text`] then lowercase.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    normalize_text(value).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_text("  Acme \t Holdings\n Ltd "), "Acme Holdings Ltd");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn key_is_lowercase() {
        assert_eq!(normalize_key(" ARIA  Stage 2 "), "aria stage 2");
    }
}
