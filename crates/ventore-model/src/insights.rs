//! Read-only views derived from a built [`DataModel`].

use std::collections::HashMap;

use serde::Serialize;
use ventore_core::entities::{CapTableEntry, ComplianceRow, DataModel, Investor};
use ventore_core::enums::Severity;

/// Default number of rows returned by [`stuck_entries`].
pub const DEFAULT_STUCK_LIMIT: usize = 50;
/// Default number of rows returned by [`project_stage_counts`].
pub const DEFAULT_STAGE_COUNT_LIMIT: usize = 12;
/// Number of statuses kept in [`Overview::statuses`].
pub const TOP_STATUSES: usize = 7;

/// Label for cap-table lines with an empty status.
pub const BLANK_STATUS: &str = "\u{2014}";

/// A label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountBucket {
    pub name: String,
    pub value: usize,
}

/// Counts labels, remembering the order each label was first seen.
#[derive(Debug, Default)]
struct Tally {
    buckets: Vec<CountBucket>,
    positions: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, name: &str) {
        if let Some(&position) = self.positions.get(name) {
            self.buckets[position].value += 1;
        } else {
            self.positions.insert(name.to_string(), self.buckets.len());
            self.buckets.push(CountBucket {
                name: name.to_string(),
                value: 1,
            });
        }
    }

    fn in_order(self) -> Vec<CountBucket> {
        self.buckets
    }

    /// Sorted by count descending; ties keep first-seen order.
    fn by_count(self) -> Vec<CountBucket> {
        let mut buckets = self.buckets;
        buckets.sort_by(|a, b| b.value.cmp(&a.value));
        buckets
    }
}

/// Issue counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Headline statistics for a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub investors: usize,
    pub projects: usize,
    pub cap_entries: usize,
    pub total_signed_value: f64,
    /// Investor memberships per stage label.
    pub stages: Vec<CountBucket>,
    /// Cap-table lines per project, first-seen order.
    pub cap_by_project: Vec<CountBucket>,
    /// Most common cap-table statuses; blank statuses are counted under
    /// [`BLANK_STATUS`].
    pub statuses: Vec<CountBucket>,
    pub issues: SeverityCounts,
}

impl Overview {
    #[must_use]
    pub fn from_model(model: &DataModel) -> Self {
        let mut stages = Tally::default();
        for ps in model.investors.iter().flat_map(|inv| &inv.projects) {
            stages.add(&ps.stage);
        }

        let mut cap_by_project = Tally::default();
        let mut statuses = Tally::default();
        for entry in &model.cap_table {
            cap_by_project.add(&entry.project);
            statuses.add(if entry.status.is_empty() {
                BLANK_STATUS
            } else {
                entry.status.as_str()
            });
        }
        let mut statuses = statuses.by_count();
        statuses.truncate(TOP_STATUSES);

        let mut issues = SeverityCounts::default();
        for issue in &model.issues {
            match issue.severity {
                Severity::High => issues.high += 1,
                Severity::Medium => issues.medium += 1,
                Severity::Low => issues.low += 1,
            }
        }

        Self {
            investors: model.investors.len(),
            projects: model.projects.len(),
            cap_entries: model.cap_table.len(),
            total_signed_value: model.cap_table.iter().map(|e| e.total_signed_value).sum(),
            stages: stages.by_count(),
            cap_by_project: cap_by_project.in_order(),
            statuses,
            issues,
        }
    }
}

/// Cap-table status distribution for the pipeline view; blank statuses
/// count as `Unknown`.
#[must_use]
pub fn status_counts(model: &DataModel) -> Vec<CountBucket> {
    let mut tally = Tally::default();
    for entry in &model.cap_table {
        tally.add(if entry.status.is_empty() {
            ventore_core::UNKNOWN_NAME
        } else {
            entry.status.as_str()
        });
    }
    tally.by_count()
}

/// An investor with the cap-table lines and compliance rows attributed to
/// them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile<'a> {
    pub investor: &'a Investor,
    pub cap_entries: Vec<&'a CapTableEntry>,
    pub compliance: Vec<&'a ComplianceRow>,
}

/// Profile for the investor with `id`, or `None` if there is none.
///
/// Cap-table lines match on `rid:<id>` or the name keys of the investor's
/// known and legal names; compliance rows match on display name, ignoring
/// case.
#[must_use]
pub fn investor_profile<'a>(model: &'a DataModel, id: &str) -> Option<InvestorProfile<'a>> {
    let investor = model.investor(id)?;

    let keys: Vec<String> = std::iter::once(format!("rid:{}", investor.id))
        .chain(
            [&investor.known_name, &investor.legal_name]
                .into_iter()
                .filter(|name| !name.is_empty())
                .map(|name| format!("name:{}", name.trim().to_lowercase())),
        )
        .collect();
    let display = investor.display_name.trim().to_lowercase();

    Some(InvestorProfile {
        investor,
        cap_entries: model
            .cap_table
            .iter()
            .filter(|entry| keys.contains(&entry.investor_key))
            .collect(),
        compliance: model
            .compliance
            .iter()
            .filter(|row| row.investor_name.trim().to_lowercase() == display)
            .collect(),
    })
}

/// Whether a cap-table line looks stalled before close: its status is
/// reserved, pending or lost, no capital call has been invoiced, and it
/// carries some quantity or value.
#[must_use]
pub fn is_stuck(entry: &CapTableEntry) -> bool {
    let status = entry.status.to_lowercase();
    let pre_close = ["reserved", "pending", "lost"]
        .iter()
        .any(|needle| status.contains(needle));
    let has_money = entry.quantity() > 0.0 || entry.total_signed_value > 0.0;
    pre_close && !entry.invoices.any_invoice_sent() && has_money
}

/// The first `limit` stuck cap-table lines, in model order.
#[must_use]
pub fn stuck_entries(model: &DataModel, limit: usize) -> Vec<&CapTableEntry> {
    model
        .cap_table
        .iter()
        .filter(|entry| is_stuck(entry))
        .take(limit)
        .collect()
}

/// Investor memberships per `PROJECT · stage`, most common first.
#[must_use]
pub fn project_stage_counts(model: &DataModel, limit: usize) -> Vec<CountBucket> {
    let mut tally = Tally::default();
    for ps in model.investors.iter().flat_map(|inv| &inv.projects) {
        tally.add(&format!(
            "{} \u{b7} {}",
            ps.project_name.to_uppercase(),
            ps.stage
        ));
    }
    let mut counts = tally.by_count();
    counts.truncate(limit);
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivitySource {
    CapTable,
    Compliance,
}

/// One free-text note or follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    /// `cap:<entry id>` or `comp:<compliance id>`.
    pub id: String,
    pub source: ActivitySource,
    pub project: String,
    pub investor: String,
    pub text: String,
}

/// Cap-table notes and compliance next steps, ordered by project then
/// investor (case-insensitive).
#[must_use]
pub fn activity_feed(model: &DataModel) -> Vec<ActivityItem> {
    let notes = model
        .cap_table
        .iter()
        .filter(|entry| !entry.notes.is_empty())
        .map(|entry| ActivityItem {
            id: format!("cap:{}", entry.id),
            source: ActivitySource::CapTable,
            project: entry.project.clone(),
            investor: entry.investor_name.clone(),
            text: entry.notes.clone(),
        });
    let next_steps = model
        .compliance
        .iter()
        .filter(|row| !row.next_steps.is_empty())
        .map(|row| ActivityItem {
            id: format!("comp:{}", row.id),
            source: ActivitySource::Compliance,
            project: if row.project.is_empty() {
                BLANK_STATUS.to_string()
            } else {
                row.project.clone()
            },
            investor: row.investor_name.clone(),
            text: row.next_steps.clone(),
        });

    let mut items: Vec<ActivityItem> = notes.chain(next_steps).collect();
    items.sort_by_cached_key(|item| format!("{} {}", item.project, item.investor).to_lowercase());
    items
}
