//! Deterministic investor identity.
//!
//! Every row gets a stable key derived only from its own cells:
//!
//! ```text
//! rid:<record id>          record id present
//! name:<normalized name>   known name, else legal name
//! unknown                  nothing to go on
//! ```
//!
//! Cap-table rows are additionally matched against the master list through
//! [`InvestorIndex`], which answers "first investor in master order whose
//! known or legal name equals this one" without scanning the list.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ventore_core::UNKNOWN_KEY;
use ventore_core::entities::Investor;

use crate::normalize::{normalize_key, normalize_text};

/// `name:<key>` for a non-empty name, `None` otherwise.
#[must_use]
pub fn name_key(name: &str) -> Option<String> {
    let key = normalize_key(name);
    (!key.is_empty()).then(|| format!("name:{key}"))
}

/// Stable key for a row: record id first, then known name, then legal name.
#[must_use]
pub fn stable_key(record_id: &str, known_name: &str, legal_name: &str) -> String {
    let record_id = normalize_text(record_id);
    if !record_id.is_empty() {
        return format!("rid:{record_id}");
    }
    name_key(known_name)
        .or_else(|| name_key(legal_name))
        .unwrap_or_else(|| UNKNOWN_KEY.to_string())
}

/// Two or more master-list investors sharing one normalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homonym {
    pub name_key: String,
    /// Investor ids in master order; the first one wins every match.
    pub investor_ids: Vec<String>,
}

/// Name lookup over the master list with first-match-wins semantics.
#[derive(Debug)]
pub struct InvestorIndex<'a> {
    investors: &'a [Investor],
    by_known: HashMap<String, usize>,
    by_legal: HashMap<String, usize>,
}

impl<'a> InvestorIndex<'a> {
    #[must_use]
    pub fn new(investors: &'a [Investor]) -> Self {
        let mut by_known = HashMap::new();
        let mut by_legal = HashMap::new();
        for (position, investor) in investors.iter().enumerate() {
            insert_first(&mut by_known, &investor.known_name, position);
            insert_first(&mut by_legal, &investor.legal_name, position);
        }
        Self {
            investors,
            by_known,
            by_legal,
        }
    }

    /// The earliest investor whose known name equals `known_name` or whose
    /// legal name equals `legal_name`. Empty names never match, so a
    /// nameless cap-table row is never attached to a nameless investor.
    #[must_use]
    pub fn find(&self, known_name: &str, legal_name: &str) -> Option<&'a Investor> {
        let known = lookup(&self.by_known, known_name);
        let legal = lookup(&self.by_legal, legal_name);
        let position = match (known, legal) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return None,
        };
        self.investors.get(position)
    }

    /// Normalized names (known or legal) shared by more than one investor.
    #[must_use]
    pub fn homonyms(&self) -> Vec<Homonym> {
        let mut groups: Vec<Homonym> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        for investor in self.investors {
            let mut keys = [
                normalize_key(&investor.known_name),
                normalize_key(&investor.legal_name),
            ];
            if keys[0] == keys[1] {
                keys[1].clear();
            }
            for key in keys.into_iter().filter(|key| !key.is_empty()) {
                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    groups.push(Homonym {
                        name_key: key,
                        investor_ids: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[slot].investor_ids.push(investor.id.clone());
            }
        }
        groups.retain(|group| group.investor_ids.len() > 1);
        groups
    }
}

fn insert_first(map: &mut HashMap<String, usize>, name: &str, position: usize) {
    let key = normalize_key(name);
    if key.is_empty() {
        return;
    }
    if let Entry::Vacant(slot) = map.entry(key) {
        slot.insert(position);
    }
}

fn lookup(map: &HashMap<String, usize>, name: &str) -> Option<usize> {
    let key = normalize_key(name);
    if key.is_empty() {
        return None;
    }
    map.get(&key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn investor(id: &str, known: &str, legal: &str) -> Investor {
        Investor {
            id: id.to_string(),
            record_id: Some(id.to_string()),
            legal_name: legal.to_string(),
            known_name: known.to_string(),
            display_name: known.to_string(),
            intake_form: String::new(),
            projects: Vec::new(),
        }
    }

    fn master() -> Vec<Investor> {
        vec![
            investor("R1", "Acme", "Acme Holdings Ltd"),
            investor("R2", "Globex", "Acme Trust"),
            investor("R3", "", "Initech LLC"),
            investor("R4", "acme", "Acme Second"),
        ]
    }

    #[rstest]
    #[case("R1", "Acme", "Acme Ltd", "rid:R1")]
    #[case("  R7 ", "", "", "rid:R7")]
    #[case("", "  Big   Fund ", "Ignored", "name:big fund")]
    #[case("", "", "Initech LLC", "name:initech llc")]
    #[case("", "", "", "unknown")]
    #[case(" ", "  ", "\t", "unknown")]
    fn stable_keys(
        #[case] record_id: &str,
        #[case] known: &str,
        #[case] legal: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(stable_key(record_id, known, legal), expected);
    }

    #[test]
    fn stable_key_is_deterministic() {
        let a = stable_key("", "Acme", "Acme Holdings");
        let b = stable_key("", "ACME", "something else");
        assert_eq!(a, b);
    }

    #[test]
    fn finds_by_known_or_legal_name() {
        let investors = master();
        let index = InvestorIndex::new(&investors);
        assert_eq!(index.find("ACME", "").map(|i| i.id.as_str()), Some("R1"));
        assert_eq!(index.find("", "initech  llc").map(|i| i.id.as_str()), Some("R3"));
        assert_eq!(index.find("Nobody", "Nothing"), None);
    }

    #[test]
    fn earlier_investor_wins_when_fields_disagree() {
        let investors = master();
        let index = InvestorIndex::new(&investors);
        // Known name points at R2, legal name at R1.
        assert_eq!(
            index.find("Globex", "Acme Holdings Ltd").map(|i| i.id.as_str()),
            Some("R1")
        );
    }

    #[test]
    fn empty_names_never_match() {
        let investors = master();
        let index = InvestorIndex::new(&investors);
        assert_eq!(index.find("", ""), None);
        assert_eq!(index.find("   ", ""), None);
    }

    #[test]
    fn agrees_with_linear_scan() {
        let investors = master();
        let index = InvestorIndex::new(&investors);
        let queries = [
            ("Acme", ""),
            ("", "Acme Trust"),
            ("globex", "Acme Holdings Ltd"),
            ("Initech LLC", "Initech LLC"),
            ("acme", "Acme Second"),
            ("", ""),
            ("Unknown", "Nobody"),
        ];
        for (known, legal) in queries {
            let scan = investors.iter().find(|inv| {
                let (k, l) = (normalize_key(known), normalize_key(legal));
                (!k.is_empty() && normalize_key(&inv.known_name) == k)
                    || (!l.is_empty() && normalize_key(&inv.legal_name) == l)
            });
            assert_eq!(
                index.find(known, legal).map(|i| &i.id),
                scan.map(|i| &i.id),
                "query ({known:?}, {legal:?})"
            );
        }
    }

    #[test]
    fn reports_homonyms_in_master_order() {
        let investors = master();
        let index = InvestorIndex::new(&investors);
        assert_eq!(
            index.homonyms(),
            vec![Homonym {
                name_key: "acme".to_string(),
                investor_ids: vec!["R1".to_string(), "R4".to_string()],
            }]
        );
    }

    #[test]
    fn same_known_and_legal_name_is_not_a_homonym() {
        let investors = vec![investor("R1", "Acme", "ACME")];
        assert!(InvestorIndex::new(&investors).homonyms().is_empty());
    }
}
