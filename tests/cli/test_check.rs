// Tests for `conform check`

use conform_core::row::TableRow;
use tempfile::TempDir;

use super::common::{example_project, example_rows, run_conform, write_table, write_table_lines};

#[test]
fn test_check_human_output() {
    let (dir, _table) = example_project();
    let out = run_conform(dir.path(), &["check", "cases.json"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Selected cases: 4\n\n\
         50% of cases is MISSING B\n\
         \x20   100% (2 out of 2 cases from X)\n\
         25% of cases DID D\n\
         \x20   100% (1 out of 1 cases from Y)\n"
    );
}

#[test]
fn test_check_json_output() {
    let (dir, _table) = example_project();
    let out = run_conform(dir.path(), &["check", "cases.json", "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "violations");
    assert_eq!(json["total_cases"], 4);
    assert_eq!(json["reference"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["violations"][0]["key"], "MISSING:B");
    assert_eq!(json["violations"][0]["case_ids"], serde_json::json!([1, 3]));
    assert_eq!(json["violations"][1]["key"], "DID:D");
}

#[test]
fn test_check_llm_output() {
    let (dir, _table) = example_project();
    let out = run_conform(dir.path(), &["check", "cases.json", "--llm"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("CHECK VIOLATIONS cases=4 skipped_rows=0 groups=2 shown=2\n"));
    assert!(stdout.contains("REFERENCE A -> B -> C\n"));
    assert!(stdout.contains("MISSING:B cases=2 pct=50 top=X:2\n"));
}

#[test]
fn test_check_reference_flag_overrides_row_flags() {
    let (dir, _table) = example_project();
    let out = run_conform(
        dir.path(),
        &["check", "cases.json", "--json", "--reference", "A -> C"],
    );
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["reference"], serde_json::json!(["A", "C"]));
    assert_eq!(json["violations"][0]["key"], "DID:B");
    assert_eq!(json["violations"][0]["case_ids"], serde_json::json!([2, 100]));
}

#[test]
fn test_check_top_and_breakdown_limits() {
    let dir = TempDir::new().unwrap();
    let rows = vec![
        TableRow::new("0", "true", "A -> B", "REF"),
        TableRow::new("1", "", "A", "X"),
        TableRow::new("2", "", "A", "Y"),
        TableRow::new("3", "", "A -> B -> Q", "X"),
    ];
    write_table(dir.path(), "cases.json", &rows);

    let out = run_conform(
        dir.path(),
        &["check", "cases.json", "--top", "1", "--breakdown", "1"],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("50% of cases is MISSING B\n"));
    assert!(stdout.contains("(1 out of 2 cases from X)"));
    assert!(!stdout.contains("from Y"));
    assert!(!stdout.contains("DID Q"));
    assert!(stdout.ends_with("... and 1 more violation(s)\n"));
}

#[test]
fn test_check_no_reference_row() {
    let dir = TempDir::new().unwrap();
    write_table(
        dir.path(),
        "cases.json",
        &[TableRow::new("1", "false", "A -> C", "X")],
    );
    let out = run_conform(dir.path(), &["check", "cases.json", "--strict"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("conformance check skipped"), "stdout: {stdout}");
}

#[test]
fn test_check_reports_skipped_rows() {
    let dir = TempDir::new().unwrap();
    let rows = vec![
        TableRow::new("1", "true", "A -> B", "REF"),
        TableRow::new("n/a", "", "A", "X"),
        TableRow::new("2", "", "A", "X"),
    ];
    write_table(dir.path(), "cases.json", &rows);
    let out = run_conform(dir.path(), &["check", "cases.json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Selected cases: 2\nSkipped rows: 1"));
    assert!(stdout.contains("50% of cases is MISSING B"));
}

#[test]
fn test_check_reads_json_lines() {
    let dir = TempDir::new().unwrap();
    write_table_lines(dir.path(), "cases.jsonl", &example_rows());
    let out = run_conform(dir.path(), &["check", "cases.jsonl", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["total_violations"], 2);
}

#[test]
fn test_check_row_budget_warns() {
    let (dir, _table) = example_project();
    let out = run_conform(
        dir.path(),
        &["check", "cases.json", "--max-rows", "2", "--window", "1"],
    );
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Memory limit hit"), "stderr: {stderr}");
    assert!(stderr.contains("2 rows"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Selected cases: 2\n"));
}

#[test]
fn test_check_uses_display_config() {
    let (dir, _table) = example_project();
    assert!(run_conform(dir.path(), &["init"]).status.success());
    assert!(run_conform(dir.path(), &["config", "display.max_groups", "1"])
        .status
        .success());

    let out = run_conform(dir.path(), &["check", "cases.json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("is MISSING B"));
    assert!(!stdout.contains("DID D"));
    assert!(stdout.ends_with("... and 1 more violation(s)\n"));
}

#[test]
fn test_check_llm_uses_breakdown_config() {
    let (dir, _table) = example_project();
    let args = ["check", "cases.json", "--llm", "--reference", "A -> C"];

    let out = run_conform(dir.path(), &args);
    assert!(String::from_utf8_lossy(&out.stdout).contains("DID:B cases=2 pct=50 top=REF:1,Y:1\n"));

    assert!(run_conform(dir.path(), &["init"]).status.success());
    assert!(run_conform(dir.path(), &["config", "display.max_breakdowns", "1"])
        .status
        .success());
    let out = run_conform(dir.path(), &args);
    assert!(String::from_utf8_lossy(&out.stdout).contains("DID:B cases=2 pct=50 top=REF:1\n"));

    let mut with_flag = args.to_vec();
    with_flag.extend(["--breakdown", "2"]);
    let out = run_conform(dir.path(), &with_flag);
    assert!(String::from_utf8_lossy(&out.stdout).contains("top=REF:1,Y:1\n"));
}
