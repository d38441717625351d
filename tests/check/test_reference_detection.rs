// How the happy path is picked from the table.

use conform_check::engine::{ConformanceEngine, EngineSettings};
use conform_check::types::ReportStatus;
use conform_core::row::{ReferenceMarker, RowSettings, TableRow};
use conform_core::types::ReferenceSequence;

#[test]
fn test_last_flagged_row_wins() {
    let rows = vec![
        TableRow::new("1", "true", "A -> B", "X"),
        TableRow::new("2", "false", "A", "X"),
        TableRow::new("3", "true", "A", "X"),
    ];
    let engine = ConformanceEngine::default();
    assert_eq!(engine.reference_for(&rows), ReferenceSequence::new(["A"]));
    let report = engine.run(&rows);
    assert_eq!(report.status, ReportStatus::Violations);
    assert_eq!(report.violations[0].key, "DID:B");
}

#[test]
fn test_only_literal_true_marks_reference_by_default() {
    let rows = vec![
        TableRow::new("1", "True", "A -> B", "X"),
        TableRow::new("2", "1", "A", "X"),
        TableRow::new("3", "yes", "A", "X"),
    ];
    let report = ConformanceEngine::default().run(&rows);
    assert_eq!(report.status, ReportStatus::Skipped);
}

#[test]
fn test_any_non_empty_marker() {
    let rows = vec![
        TableRow::new("1", "x", "A -> B", "X"),
        TableRow::new("2", "", "A", "X"),
    ];
    let engine = ConformanceEngine::new(EngineSettings {
        rows: RowSettings {
            marker: ReferenceMarker::AnyNonEmpty,
            ..RowSettings::default()
        },
        ..EngineSettings::default()
    });
    let report = engine.run(&rows);
    assert_eq!(report.reference, vec!["A", "B"]);
    assert_eq!(report.violations[0].key, "MISSING:B");
}

#[test]
fn test_empty_explicit_reference_falls_back_to_flags() {
    let rows = vec![
        TableRow::new("1", "true", "A -> B", "X"),
        TableRow::new("2", "", "A", "X"),
    ];
    let engine = ConformanceEngine::default().with_reference(ReferenceSequence::default());
    assert_eq!(engine.run(&rows).reference, vec!["A", "B"]);
}
