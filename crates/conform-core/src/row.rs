//! Raw table rows and their conversion into [`Case`]s.
//!
//! A row carries four positional fields: case id, reference flag, variant,
//! and specification label. On disk a row is either a JSON array
//! `[caseId, isReference, variant, label]` or an object with the keys
//! `case_id`, `happy_path`, `variant`, `specification`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{split_variant, Case, CaseId, DEFAULT_DELIMITER};

/// How a row's reference field is recognized as marking the happy path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMarker {
    /// Field is exactly `true`.
    #[default]
    LiteralTrue,
    /// Field is `yes`, compared case-insensitively.
    YesIgnoreCase,
    /// Any non-blank field.
    AnyNonEmpty,
}

impl ReferenceMarker {
    pub fn matches(&self, field: &str) -> bool {
        match self {
            ReferenceMarker::LiteralTrue => field == "true",
            ReferenceMarker::YesIgnoreCase => field.trim().eq_ignore_ascii_case("yes"),
            ReferenceMarker::AnyNonEmpty => !field.trim().is_empty(),
        }
    }
}

/// What to do with a row whose case id does not parse as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseIdPolicy {
    /// Exclude the row from analysis and count it as skipped.
    #[default]
    Skip,
    /// Keep the row under the [`CaseId::Invalid`] sentinel.
    Sentinel,
}

/// Settings that govern how rows become cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSettings {
    pub marker: ReferenceMarker,
    pub case_id_policy: CaseIdPolicy,
    pub delimiter: String,
}

impl Default for RowSettings {
    fn default() -> Self {
        Self {
            marker: ReferenceMarker::default(),
            case_id_policy: CaseIdPolicy::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// A row was excluded because its case id did not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("case id {raw:?} is not an integer")]
pub struct RowRejected {
    pub raw: String,
}

/// One input row with every field coerced to its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct TableRow {
    pub case_id: String,
    pub happy_path: String,
    pub variant: String,
    pub specification: String,
}

impl TableRow {
    pub fn new(
        case_id: impl Into<String>,
        happy_path: impl Into<String>,
        variant: impl Into<String>,
        specification: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            happy_path: happy_path.into(),
            variant: variant.into(),
            specification: specification.into(),
        }
    }

    /// Whether this row marks the reference sequence under `marker`.
    pub fn is_reference(&self, marker: ReferenceMarker) -> bool {
        marker.matches(&self.happy_path)
    }

    /// Activities of this row's variant, split and trimmed.
    pub fn activities(&self, delimiter: &str) -> Vec<String> {
        split_variant(&self.variant, delimiter)
    }

    /// Convert to a [`Case`], applying the case id policy.
    pub fn to_case(&self, settings: &RowSettings) -> Result<Case, RowRejected> {
        let id = match CaseId::parse(&self.case_id) {
            Some(id) => id,
            None => match settings.case_id_policy {
                CaseIdPolicy::Sentinel => CaseId::Invalid,
                CaseIdPolicy::Skip => {
                    return Err(RowRejected {
                        raw: self.case_id.clone(),
                    })
                }
            },
        };
        Ok(Case::new(
            id,
            self.activities(&settings.delimiter),
            self.specification.clone(),
        ))
    }
}

impl TryFrom<Value> for TableRow {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(fields) => {
                let mut fields = fields.into_iter().map(|v| field_text(&v));
                Ok(TableRow {
                    case_id: fields.next().unwrap_or_default(),
                    happy_path: fields.next().unwrap_or_default(),
                    variant: fields.next().unwrap_or_default(),
                    specification: fields.next().unwrap_or_default(),
                })
            }
            Value::Object(map) => {
                let get = |key: &str| map.get(key).map(field_text).unwrap_or_default();
                Ok(TableRow {
                    case_id: get("case_id"),
                    happy_path: get("happy_path"),
                    variant: get("variant"),
                    specification: get("specification"),
                })
            }
            other => Err(format!(
                "expected an array or object, found {}",
                value_kind(&other)
            )),
        }
    }
}

/// Coerce a JSON scalar to the string a table cell would show.
fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
