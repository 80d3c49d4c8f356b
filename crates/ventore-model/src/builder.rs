//! Builds a [`DataModel`] from the five source sheets.
//!
//! [`build_data_model`] fetches every sheet concurrently and hands the rows
//! to [`build_from_sheets`], which is pure: identical rows always give an
//! identical model apart from `fetched_at`.
//!
//! Issue emission order is fixed: per-investor issues in master order, then
//! cap-table rows missing a record id (RUNE, ARIA, POLARITY in sheet order),
//! then duplicate cap-table ids, then unmatched compliance references.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use ventore_config::{CapTableHeaders, ComplianceHeaders, HeaderMap, MasterHeaders, VentoreConfig};
use ventore_core::entities::{
    CapTableEntry, ComplianceFlags, ComplianceRow, DataModel, DataQualityIssue, Investor,
    InvoiceFlags,
};
use ventore_core::enums::{IssueKind, SourceKind};
use ventore_core::{UNKNOWN_KEY, UNKNOWN_NAME, UNSPECIFIED_STAGE};
use ventore_sheets::{Row, SheetClient, parse_csv, to_bool, to_number};

use crate::error::BuildError;
use crate::identity::{InvestorIndex, name_key, stable_key};
use crate::index::build_project_index;
use crate::normalize::{normalize_key, normalize_text};
use crate::tokens::{is_recognized_stage, parse_projects_list};

/// Parsed rows of every source sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetSet {
    pub master: Vec<Row>,
    pub rune: Vec<Row>,
    pub aria: Vec<Row>,
    pub polarity: Vec<Row>,
    pub compliance: Vec<Row>,
}

impl SheetSet {
    /// Parse raw CSV text for each source. Parse warnings are dropped.
    #[must_use]
    pub fn from_csv(
        master: &str,
        rune: &str,
        aria: &str,
        polarity: &str,
        compliance: &str,
    ) -> Self {
        Self {
            master: parse_csv(master).rows,
            rune: parse_csv(rune).rows,
            aria: parse_csv(aria).rows,
            polarity: parse_csv(polarity).rows,
            compliance: parse_csv(compliance).rows,
        }
    }

    #[must_use]
    pub fn rows(&self, kind: SourceKind) -> &[Row] {
        match kind {
            SourceKind::Master => &self.master,
            SourceKind::Rune => &self.rune,
            SourceKind::Aria => &self.aria,
            SourceKind::Polarity => &self.polarity,
            SourceKind::Compliance => &self.compliance,
        }
    }
}

/// Fetch all sources and build the model.
///
/// # Errors
///
/// Returns [`BuildError::Fetch`] if any source fails; no partial model is
/// produced.
pub async fn build_data_model(
    client: &SheetClient,
    config: &VentoreConfig,
) -> Result<DataModel, BuildError> {
    let sources = &config.sources;
    let (master, rune, aria, polarity, compliance) = tokio::try_join!(
        client.fetch_sheet(&sources.master),
        client.fetch_sheet(&sources.rune),
        client.fetch_sheet(&sources.aria),
        client.fetch_sheet(&sources.polarity),
        client.fetch_sheet(&sources.compliance),
    )?;

    let sheets = SheetSet {
        master: master.sheet.rows,
        rune: rune.sheet.rows,
        aria: aria.sheet.rows,
        polarity: polarity.sheet.rows,
        compliance: compliance.sheet.rows,
    };
    let model = build_from_sheets(&sheets, &config.headers, Utc::now());

    tracing::info!(
        investors = model.investors.len(),
        cap_entries = model.cap_table.len(),
        compliance = model.compliance.len(),
        projects = model.projects.len(),
        issues = model.issues.len(),
        "data model built"
    );
    Ok(model)
}

/// Build the model from already-parsed rows.
#[must_use]
pub fn build_from_sheets(
    sheets: &SheetSet,
    headers: &HeaderMap,
    fetched_at: DateTime<Utc>,
) -> DataModel {
    let mut issues = Vec::new();

    let investors = investors_from_master(&sheets.master, &headers.master, &mut issues);

    let index = InvestorIndex::new(&investors);
    for homonym in index.homonyms() {
        tracing::debug!(
            name = %homonym.name_key,
            investors = ?homonym.investor_ids,
            "several investors share a name; first in master order wins"
        );
    }

    let mut cap_table = Vec::new();
    for kind in SourceKind::CAP_TABLES {
        let Some(project) = kind.project_name() else {
            continue;
        };
        let rows = sheets.rows(kind);
        let entries = cap_table_from_tab(
            project,
            rows,
            &headers.cap_table.for_project(project),
            &index,
            &mut issues,
        );
        tracing::debug!(project, rows = rows.len(), entries = entries.len(), "cap table read");
        cap_table.extend(entries);
    }

    let cap_ids = report_duplicates(&cap_table, &mut issues);
    let compliance = compliance_rows(&sheets.compliance, &headers.compliance, &cap_ids, &mut issues);
    let projects = build_project_index(&investors, &cap_table);

    DataModel {
        fetched_at,
        investors,
        cap_table,
        compliance,
        projects,
        issues,
    }
}

fn display_name(known_name: &str, legal_name: &str) -> String {
    [known_name, legal_name]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

fn investors_from_master(
    rows: &[Row],
    headers: &MasterHeaders,
    issues: &mut Vec<DataQualityIssue>,
) -> Vec<Investor> {
    rows.iter()
        .map(|row| {
            let record_id = normalize_text(row.get(&headers.record_id));
            let legal_name = normalize_text(row.get(&headers.legal_name));
            let known_name = normalize_text(row.get(&headers.known_name));
            let intake_form = normalize_text(row.get(&headers.intake_form));
            let projects = parse_projects_list(row.get(&headers.project));
            let display_name = display_name(&known_name, &legal_name);

            if projects.is_empty() && display_name != UNKNOWN_NAME {
                issues.push(DataQualityIssue::new(
                    IssueKind::MissingProject,
                    "Investor has no project listed in master tab.",
                    Some(display_name.clone()),
                ));
            }
            if record_id.is_empty() {
                issues.push(DataQualityIssue::new(
                    IssueKind::MissingInvestorId,
                    "Investor is missing Record ID in master tab; matching will use name fallback.",
                    Some(display_name.clone()),
                ));
            }
            for ps in projects.iter().filter(|ps| !is_recognized_stage(&ps.stage)) {
                issues.push(DataQualityIssue::new(
                    IssueKind::UnknownStage,
                    format!("Unrecognized stage label \"{}\" for investor.", ps.stage),
                    Some(display_name.clone()),
                ));
            }

            let (id, record_id) = if record_id.is_empty() {
                (stable_key("", &known_name, &legal_name), None)
            } else {
                (record_id.clone(), Some(record_id))
            };

            Investor {
                id,
                record_id,
                legal_name,
                known_name,
                display_name,
                intake_form,
                projects,
            }
        })
        .collect()
}

fn cap_table_from_tab(
    project: &str,
    rows: &[Row],
    headers: &CapTableHeaders,
    index: &InvestorIndex<'_>,
    issues: &mut Vec<DataQualityIssue>,
) -> Vec<CapTableEntry> {
    let project_key = normalize_key(project);
    let stage_key = normalize_key(UNSPECIFIED_STAGE);

    rows.iter()
        .map(|row| {
            let record_id = normalize_text(row.get(&headers.record_id));
            let legal_name = normalize_text(row.get(&headers.legal_name));
            let known_name = normalize_text(row.get(&headers.known_name));
            let investor_name = display_name(&known_name, &legal_name);
            let contract_number = normalize_text(row.get(&headers.contract_number));

            let investor_key = index.find(&known_name, &legal_name).map_or_else(
                || stable_key("", &known_name, &legal_name),
                |investor| format!("rid:{}", investor.id),
            );

            if record_id.is_empty() {
                issues.push(DataQualityIssue::new(
                    IssueKind::MissingInvestorId,
                    format!("Cap table row is missing Record ID in {project}."),
                    Some(investor_name.clone()),
                ));
            }

            let id = if record_id.is_empty() {
                format!("{project_key}:{investor_key}:{contract_number}")
            } else {
                record_id
            };

            CapTableEntry {
                id,
                project: project.to_string(),
                project_key: project_key.clone(),
                stage: UNSPECIFIED_STAGE.to_string(),
                stage_key: stage_key.clone(),
                investment_type: normalize_text(row.get(&headers.investment_type)),
                status: normalize_text(row.get(&headers.status)),
                contract_number,
                reserved: to_number(row.get(&headers.reserved)),
                pending: to_number(row.get(&headers.pending)),
                signed: to_number(row.get(&headers.signed)),
                sold: to_number(row.get(&headers.sold)),
                total_signed_value: to_number(row.get(&headers.total_signed_value)),
                notes: normalize_text(row.get(&headers.notes)),
                investor_name,
                investor_key,
                tracker_id: normalize_text(row.get(&headers.tracker_id)),
                invoices: InvoiceFlags {
                    cc01_invoice_sent: to_bool(row.get(&headers.cc01_invoice_sent)),
                    cc01_payment_received: to_bool(row.get(&headers.cc01_payment_received)),
                    cc02_invoice_sent: to_bool(row.get(&headers.cc02_invoice_sent)),
                    cc02_payment_received: to_bool(row.get(&headers.cc02_payment_received)),
                    shares_issued: to_bool(row.get(&headers.shares_issued)),
                },
            }
        })
        .collect()
}

/// Report every repeat of a cap-table id and return the set of all ids.
fn report_duplicates<'a>(
    cap_table: &'a [CapTableEntry],
    issues: &mut Vec<DataQualityIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::with_capacity(cap_table.len());
    for entry in cap_table {
        if !seen.insert(entry.id.as_str()) {
            issues.push(DataQualityIssue::new(
                IssueKind::DuplicateCapTableId,
                format!("Duplicate cap-table entry id detected: {}", entry.id),
                Some(entry.investor_name.clone()),
            ));
        }
    }
    seen
}

fn compliance_rows(
    rows: &[Row],
    headers: &ComplianceHeaders,
    cap_ids: &HashSet<&str>,
    issues: &mut Vec<DataQualityIssue>,
) -> Vec<ComplianceRow> {
    rows.iter()
        .map(|row| {
            let record_id = normalize_text(row.get(&headers.record_id));
            let project_text = normalize_text(row.get(&headers.project));
            let (project, project_key, stage, stage_key) =
                match parse_projects_list(&project_text).into_iter().next() {
                    Some(first) => (
                        first.project_name,
                        first.project_key,
                        first.stage,
                        first.stage_key,
                    ),
                    None => (
                        project_text.clone(),
                        normalize_key(&project_text),
                        UNSPECIFIED_STAGE.to_string(),
                        normalize_key(UNSPECIFIED_STAGE),
                    ),
                };

            let investor = normalize_text(row.get(&headers.investor));
            let investor_key = name_key(&investor).unwrap_or_else(|| UNKNOWN_KEY.to_string());
            let cap_table_record_id = normalize_text(row.get(&headers.cap_table_record_id));

            if !cap_table_record_id.is_empty() && !cap_ids.contains(cap_table_record_id.as_str()) {
                let reference = if investor.is_empty() {
                    record_id.clone()
                } else {
                    investor.clone()
                };
                issues.push(DataQualityIssue::new(
                    IssueKind::UnmatchedCompliance,
                    format!(
                        "Compliance row references missing cap-table record id: {cap_table_record_id}"
                    ),
                    Some(reference),
                ));
            }

            let id = if record_id.is_empty() {
                format!("compliance:{project_key}:{investor_key}")
            } else {
                record_id
            };

            ComplianceRow {
                id,
                project,
                project_key,
                stage,
                stage_key,
                investment_type: normalize_text(row.get(&headers.investment_type)),
                investor_name: if investor.is_empty() {
                    UNKNOWN_NAME.to_string()
                } else {
                    investor
                },
                investor_key,
                cap_table_record_id,
                flags: ComplianceFlags {
                    compliance_hub_sent: to_bool(row.get(&headers.compliance_hub_sent)),
                    kyc_form: to_bool(row.get(&headers.kyc_form)),
                    passport: to_bool(row.get(&headers.passport)),
                    address: to_bool(row.get(&headers.address)),
                    linkedin_cv: to_bool(row.get(&headers.linkedin_cv)),
                    aml_form: to_bool(row.get(&headers.aml_form)),
                    all_aml_docs_provided: to_bool(row.get(&headers.all_aml_docs_provided)),
                    company_kyc: to_bool(row.get(&headers.company_kyc)),
                    verified: to_bool(row.get(&headers.verified)),
                    approved_by_adgm: to_bool(row.get(&headers.approved_by_adgm)),
                    share_certificate_issued: to_bool(row.get(&headers.share_certificate_issued)),
                },
                next_steps: normalize_text(row.get(&headers.next_steps)),
            }
        })
        .collect()
}
