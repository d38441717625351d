//! Deriving the happy path from flagged rows.

use crate::row::{RowSettings, TableRow};
use crate::types::ReferenceSequence;

/// Build the reference sequence from the rows flagged by `settings.marker`.
///
/// When several rows qualify the last one wins. Returns an empty sequence
/// when no row is flagged, or when the flagged variant is blank.
pub fn derive_reference(rows: &[TableRow], settings: &RowSettings) -> ReferenceSequence {
    let flagged = rows.iter().rev().find(|r| r.is_reference(settings.marker));
    match flagged {
        Some(row) => {
            tracing::debug!(case_id = %row.case_id, "reference row found");
            ReferenceSequence::parse(&row.variant, &settings.delimiter)
        }
        None => ReferenceSequence::default(),
    }
}

/// Pick the reference for a run: an explicit, non-empty sequence takes
/// precedence over row flags.
pub fn resolve_reference(
    explicit: Option<&ReferenceSequence>,
    rows: &[TableRow],
    settings: &RowSettings,
) -> ReferenceSequence {
    match explicit {
        Some(reference) if !reference.is_empty() => reference.clone(),
        _ => derive_reference(rows, settings),
    }
}
