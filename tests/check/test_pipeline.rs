// Full pipeline from files on disk.

use std::fs;

use conform_check::engine::ConformanceEngine;
use conform_check::types::ReportStatus;
use conform_core::config::ConformConfig;
use conform_core::paging::{PagingLimits, WindowedTable};
use conform_core::table::{load_table, open_rows};
use conform_core::types::CaseId;
use tempfile::TempDir;

use super::common::{example_rows, write_table, write_table_lines};

#[test]
fn test_array_and_lines_give_same_report() {
    let dir = TempDir::new().unwrap();
    let array = write_table(dir.path(), "cases.json", &example_rows());
    let lines = write_table_lines(dir.path(), "cases.jsonl", &example_rows());

    let engine = ConformanceEngine::default();
    let from_array = engine.run(&load_table(&array).unwrap());
    let from_lines = engine.run(&load_table(&lines).unwrap());
    assert_eq!(from_array.violations, from_lines.violations);
    assert_eq!(from_array.violations[0].key, "MISSING:B");
}

#[test]
fn test_positional_rows_with_mixed_field_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    fs::write(
        &path,
        r#"[
            [100, true, "A -> B -> C", "REF"],
            [1, false, "A -> C", "X"],
            [2.0, null, "A -> B -> C -> D", "Y"],
            ["3", "false", "A -> C", "X"]
        ]"#,
    )
    .unwrap();

    let report = ConformanceEngine::default().run(&load_table(&path).unwrap());
    assert_eq!(report.status, ReportStatus::Violations);
    assert_eq!(report.total_cases, 4);
    assert_eq!(report.violations[0].case_ids, vec![CaseId::Id(1), CaseId::Id(3)]);
    assert_eq!(report.violations[1].case_ids, vec![CaseId::Id(2)]);
}

#[test]
fn test_windowed_load_feeds_engine() {
    let dir = TempDir::new().unwrap();
    let path = write_table_lines(dir.path(), "cases.jsonl", &example_rows());

    let limits = PagingLimits {
        window_size: 1,
        max_rows: 100,
    };
    let loaded = WindowedTable::new(open_rows(&path).unwrap(), limits)
        .load_all()
        .unwrap();
    assert!(!loaded.limit_reached);
    assert_eq!(loaded.rows.len(), 4);
    assert_eq!(loaded.windows_loaded, 4);

    let report = ConformanceEngine::default().run(&loaded.rows);
    assert_eq!(report.total_violations, 2);
}

#[test]
fn test_row_budget_truncates_input() {
    let dir = TempDir::new().unwrap();
    let path = write_table(dir.path(), "cases.json", &example_rows());

    let limits = PagingLimits {
        window_size: 10,
        max_rows: 3,
    };
    let loaded = WindowedTable::new(open_rows(&path).unwrap(), limits)
        .load_all()
        .unwrap();
    assert!(loaded.limit_reached);
    assert_eq!(loaded.rows.len(), 3);
    assert!(loaded.status_message().starts_with("Memory limit hit"));

    // case 3 was never loaded
    let report = ConformanceEngine::default().run(&loaded.rows);
    assert_eq!(report.violations[0].case_ids, vec![CaseId::Id(1)]);
}

#[test]
fn test_config_file_drives_engine() {
    let dir = TempDir::new().unwrap();
    let mut config = ConformConfig::default();
    config.reference.delimiter = ">".to_string();
    config.reference.activities = Some(vec!["A".into(), "B".into()]);
    config.save(dir.path()).unwrap();

    let loaded = ConformConfig::load(dir.path());
    let rows = vec![conform_core::row::TableRow::new("7", "", "A > Q", "X")];
    let report = ConformanceEngine::with_config(&loaded).run(&rows);
    let keys: Vec<&str> = report.violations.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(keys, vec!["DID:Q", "MISSING:B"]);
}
