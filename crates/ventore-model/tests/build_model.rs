//! Model construction from CSV fixtures, with and without the network.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use ventore_config::{HeaderMap, SourceConfig, VentoreConfig};
use ventore_core::entities::DataModel;
use ventore_core::enums::{IssueKind, Severity};
use ventore_model::{BuildError, SheetSet, build_data_model, build_from_sheets};
use ventore_sheets::{SheetClient, SheetError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MASTER: &str = "\
Record ID,Legal Investment Name,Known Name,Project,Investor Intake Form
R1,Acme Holdings Ltd,Acme,\"ARIA (Stage 1), RUNE\",https://forms.example/acme
R2,Globex Corporation,Globex,Polarity - Stage 2,
";

const RUNE: &str = "\
Record ID,Legal Investment Name,Known Name,Investment Type,Status,Contract Number,Blocks Pending
U1,,Globex,Direct,Pending,G-1,4
";

const ARIA: &str = "\
Record ID,Legal Investment Name,Known Name,Status,Contract Number,Shares Signed,Total Signed Value
,,Acme,Signed,C1,10,\"25,000\"
";

const POLARITY: &str = "\
Record ID,Legal Investment Name,Known Name,Status
P1,,Globex,Reserved
P1,,Globex,Reserved
";

const COMPLIANCE: &str = "\
Record ID,Project,Investor,Investor (Cap Table),KYC Form,Next Steps
K1,ARIA (Stage 1),Acme,aria:rid:R1:C1,yes,Collect passport
K2,RUNE,Globex,U404,,
";

fn sheets() -> SheetSet {
    SheetSet::from_csv(MASTER, RUNE, ARIA, POLARITY, COMPLIANCE)
}

fn build() -> DataModel {
    build_from_sheets(
        &sheets(),
        &HeaderMap::default(),
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
    )
}

#[test]
fn master_and_cap_table_reconcile() {
    let model = build();

    let acme = model.investor("R1").unwrap();
    assert_eq!(acme.display_name, "Acme");
    assert_eq!(acme.intake_form, "https://forms.example/acme");
    let stages: Vec<_> = acme
        .projects
        .iter()
        .map(|ps| (ps.project_name.as_str(), ps.stage.as_str()))
        .collect();
    assert_eq!(stages, vec![("ARIA", "Stage 1"), ("RUNE", "Unspecified")]);

    let entry = model.cap_table_entry("aria:rid:R1:C1").unwrap();
    assert_eq!(entry.investor_key, "rid:R1");
    assert_eq!(entry.project, "ARIA");
    assert_eq!(entry.total_signed_value, 25_000.0);
    assert_eq!(model.cap_table_entry("U1").unwrap().investor_key, "rid:R2");
}

#[test]
fn issues_follow_emission_order() {
    let model = build();
    let summary: Vec<_> = model
        .issues
        .iter()
        .map(|issue| (issue.kind, issue.severity, issue.reference.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (IssueKind::MissingInvestorId, Severity::Medium, Some("Acme")),
            (IssueKind::DuplicateCapTableId, Severity::High, Some("Globex")),
            (IssueKind::UnmatchedCompliance, Severity::Medium, Some("Globex")),
        ]
    );
    assert!(model.issues[1].message.contains("P1"));
    assert!(model.issues[2].message.contains("U404"));
}

#[test]
fn duplicate_ids_are_reported_once_per_repeat() {
    let polarity = "Record ID,Known Name\nP1,A\nP1,B\nP1,C\n";
    let sheets = SheetSet::from_csv("Record ID\n", "", "", polarity, "");
    let model = build_from_sheets(&sheets, &HeaderMap::default(), Utc::now());
    let duplicates = model
        .issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::DuplicateCapTableId)
        .count();
    assert_eq!(duplicates, 2);
    assert_eq!(model.cap_table.len(), 3);
}

#[test]
fn duplicate_ids_across_tabs_are_reported() {
    let rune = "Record ID,Known Name,Status\nX1,Acme,Pending\n";
    let aria = "Record ID,Known Name,Status\nX1,Globex,Signed\n";
    let sheets = SheetSet::from_csv("Record ID\n", rune, aria, "", "");
    let model = build_from_sheets(&sheets, &HeaderMap::default(), Utc::now());

    let duplicates: Vec<_> = model
        .issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::DuplicateCapTableId)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].severity, Severity::High);
    assert_eq!(
        duplicates[0].message,
        "Duplicate cap-table entry id detected: X1"
    );
    let projects: Vec<_> = model.cap_table.iter().map(|entry| entry.project.as_str()).collect();
    assert_eq!(projects, vec!["RUNE", "ARIA"]);
}

#[test]
fn aria_row_with_record_id_links_to_master_investor() {
    let master = "Record ID,Known Name,Project\nR1,Acme,\"ARIA (Stage 1), RUNE\"\n";
    let aria = "Record ID,Known Name\nC1,Acme\n";
    let sheets = SheetSet::from_csv(master, "", aria, "", "");
    let model = build_from_sheets(&sheets, &HeaderMap::default(), Utc::now());

    let acme = model.investor("R1").unwrap();
    assert_eq!(acme.projects.len(), 2);
    assert_eq!(model.cap_table.len(), 1);
    let entry = &model.cap_table[0];
    assert_eq!(entry.id, "C1");
    assert_eq!(entry.investor_key, "rid:R1");
    assert!(model.issues.is_empty());
}

#[test]
fn unmatched_compliance_yields_exactly_one_issue() {
    let compliance = "Record ID,Investor,Investor (Cap Table)\nK9,Initech,CAP-404\n";
    let sheets = SheetSet::from_csv("Record ID\n", "", "", "", compliance);
    let model = build_from_sheets(&sheets, &HeaderMap::default(), Utc::now());
    assert_eq!(model.issues.len(), 1);
    assert_eq!(model.issues[0].kind, IssueKind::UnmatchedCompliance);
    assert_eq!(
        model.issues[0].message,
        "Compliance row references missing cap-table record id: CAP-404"
    );
}

#[test]
fn rebuilding_is_deterministic() {
    let first = build_from_sheets(&sheets(), &HeaderMap::default(), Utc::now());
    let second = build_from_sheets(&sheets(), &HeaderMap::default(), Utc::now());
    assert_eq!(first.investors, second.investors);
    assert_eq!(first.cap_table, second.cap_table);
    assert_eq!(first.compliance, second.compliance);
    assert_eq!(first.projects, second.projects);
    assert_eq!(first.issues, second.issues);
}

#[test]
fn project_index_covers_master_then_cap_tables() {
    let model = build();
    let projects: Vec<_> = model.projects.iter().map(|p| p.project.as_str()).collect();
    assert_eq!(projects, vec!["ARIA", "RUNE", "Polarity"]);

    let aria = &model.projects[0];
    let stages: Vec<_> = aria.stages.iter().map(|s| s.stage.as_str()).collect();
    assert_eq!(stages, vec!["Stage 1", "Unspecified"]);
    assert_eq!(aria.stages[1].entries, vec!["aria:rid:R1:C1"]);

    let polarity = &model.projects[2];
    assert_eq!(polarity.stages[1].entries, vec!["P1"]);
}

#[test]
fn renamed_headers_come_from_config() {
    let mut headers = HeaderMap::default();
    headers.master.known_name = vec!["Nickname".to_string()];
    let master = "Record ID,Nickname,Project\nR1,Acme,RUNE\n";
    let sheets = SheetSet::from_csv(master, "", "", "", "");
    let model = build_from_sheets(&sheets, &headers, Utc::now());
    assert_eq!(model.investors[0].display_name, "Acme");
}

#[test]
fn model_serializes_camel_case() {
    let json = serde_json::to_value(build()).unwrap();
    assert!(json["fetchedAt"].as_str().unwrap().starts_with("2026-10-19T08:30:00"));
    assert_eq!(json["capTable"][0]["investorKey"], "rid:R2");
    assert_eq!(json["issues"][0]["kind"], "missing-investor-id");
    assert_eq!(json["issues"][0]["ref"], "Acme");
}

// ── Network ────────────────────────────────────────────────────────

async fn mount(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> VentoreConfig {
    let mut config = VentoreConfig::default();
    let uri = server.uri();
    config.sources.master = SourceConfig::new("Master VG Investor List", format!("{uri}/master"));
    config.sources.rune = SourceConfig::new("RUNE Cap Table", format!("{uri}/rune"));
    config.sources.aria = SourceConfig::new("ARIA Cap Table", format!("{uri}/aria"));
    config.sources.polarity = SourceConfig::new("Polarity Cap Table", format!("{uri}/polarity"));
    config.sources.compliance = SourceConfig::new("Compliance Database", format!("{uri}/compliance"));
    config
}

#[tokio::test]
async fn builds_from_http_sources() {
    let server = MockServer::start().await;
    mount(&server, "/master", 200, MASTER).await;
    mount(&server, "/rune", 200, RUNE).await;
    mount(&server, "/aria", 200, ARIA).await;
    mount(&server, "/polarity", 200, POLARITY).await;
    mount(&server, "/compliance", 200, COMPLIANCE).await;

    let config = config_for(&server);
    let client = SheetClient::new(&config.http, &config.cache).unwrap();
    let model = build_data_model(&client, &config).await.unwrap();

    let offline = build();
    assert_eq!(model.investors, offline.investors);
    assert_eq!(model.cap_table, offline.cap_table);
    assert_eq!(model.issues, offline.issues);
    assert_eq!(client.cache().len().await, 5);
}

#[tokio::test]
async fn one_failing_source_aborts_the_build() {
    let server = MockServer::start().await;
    mount(&server, "/master", 200, MASTER).await;
    mount(&server, "/rune", 200, RUNE).await;
    mount(&server, "/aria", 404, "Not Found").await;
    mount(&server, "/polarity", 200, POLARITY).await;
    mount(&server, "/compliance", 200, COMPLIANCE).await;

    let config = config_for(&server);
    let client = SheetClient::new(&config.http, &config.cache).unwrap();
    let err = build_data_model(&client, &config).await.unwrap_err();

    let BuildError::Fetch(inner) = &err;
    assert!(matches!(inner, SheetError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "failed to fetch ARIA Cap Table (404)");
}
