/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(local.or(global).unwrap_or(fallback)).unwrap_or(usize::MAX)
}

/// Truncate `items` to the global `--limit`, if one was given.
pub fn apply_limit<T>(items: &mut Vec<T>, global: Option<u32>) {
    if let Some(limit) = global {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_limit, effective_limit};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 50), 50);
    }

    #[test]
    fn apply_limit_only_truncates_when_set() {
        let mut items = vec![1, 2, 3];
        apply_limit(&mut items, None);
        assert_eq!(items.len(), 3);
        apply_limit(&mut items, Some(2));
        assert_eq!(items, vec![1, 2]);
    }
}
