/// Contract tests: `conform check --json` output against check_output.schema.json.
use conform_check::engine::{ConformanceEngine, EngineSettings};
use conform_core::row::{CaseIdPolicy, RowSettings, TableRow};
use conform_output::json::JsonFormatter;
use conform_output::OutputFormatter;

use super::common::{example_rows, generators::generate_table};
use super::test_schema_helpers::{rejected_by_schema, validate_against_schema};

const SCHEMA: &str = include_str!("../schemas/check_output.schema.json");

fn report_json(engine: &ConformanceEngine, rows: &[TableRow]) -> serde_json::Value {
    let report = engine.run(rows);
    serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap()
}

#[test]
fn violations_report_matches_schema() {
    let json = report_json(&ConformanceEngine::default(), &example_rows());
    assert_eq!(json["status"], "violations");
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn clean_report_matches_schema() {
    let rows = vec![TableRow::new("1", "true", "A", "X")];
    let json = report_json(&ConformanceEngine::default(), &rows);
    assert_eq!(json["status"], "clean");
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn skipped_report_matches_schema() {
    let rows = vec![TableRow::new("1", "", "A", "X")];
    let json = report_json(&ConformanceEngine::default(), &rows);
    assert_eq!(json["status"], "skipped");
    assert_eq!(json["reference"], serde_json::json!([]));
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn sentinel_case_ids_serialize_as_null() {
    let mut rows = example_rows();
    rows.push(TableRow::new("unknown", "", "A", "X"));
    let engine = ConformanceEngine::new(EngineSettings {
        rows: RowSettings {
            case_id_policy: CaseIdPolicy::Sentinel,
            ..RowSettings::default()
        },
        ..EngineSettings::default()
    });
    let json = report_json(&engine, &rows);
    assert_eq!(json["violations"][0]["case_ids"], serde_json::json!([1, 3, null]));
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn large_report_matches_schema() {
    let json = report_json(&ConformanceEngine::default(), &generate_table(500));
    assert!(json["total_violations"].as_u64().unwrap() > 1);
    validate_against_schema(&json, SCHEMA);
}

#[test]
fn schema_rejects_unknown_kind() {
    let mut json = report_json(&ConformanceEngine::default(), &example_rows());
    json["violations"][0]["kind"] = serde_json::json!("SKIPPED");
    assert!(rejected_by_schema(&json, SCHEMA));
}
