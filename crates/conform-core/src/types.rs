use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default delimiter between activities in a variant string.
pub const DEFAULT_DELIMITER: &str = "->";

/// Identifier of one process instance.
///
/// `Invalid` is the sentinel for a case id field that did not parse as an
/// integer. It renders as `NaN` and serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseId {
    Id(i64),
    Invalid,
}

impl CaseId {
    /// Parse a raw field. Surrounding whitespace is ignored, and integral
    /// floats such as `"42.0"` are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Some(CaseId::Id(id));
        }
        let float: f64 = trimmed.parse().ok()?;
        if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
            Some(CaseId::Id(float as i64))
        } else {
            None
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseId::Id(id) => write!(f, "{}", id),
            CaseId::Invalid => f.write_str("NaN"),
        }
    }
}

// Valid ids sort numerically; the sentinel sorts last.
impl Ord for CaseId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CaseId::Id(a), CaseId::Id(b)) => a.cmp(b),
            (CaseId::Id(_), CaseId::Invalid) => Ordering::Less,
            (CaseId::Invalid, CaseId::Id(_)) => Ordering::Greater,
            (CaseId::Invalid, CaseId::Invalid) => Ordering::Equal,
        }
    }
}

impl PartialOrd for CaseId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for CaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CaseId::Id(id) => serializer.serialize_i64(*id),
            CaseId::Invalid => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = Option::<i64>::deserialize(deserializer)?;
        Ok(id.map_or(CaseId::Invalid, CaseId::Id))
    }
}

/// Split a delimited variant string into trimmed activity names.
///
/// Empty tokens are kept so that a blank variant yields `[""]`, which never
/// matches a real reference activity.
pub fn split_variant(variant: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![variant.trim().to_string()];
    }
    variant
        .split(delimiter)
        .map(|a| a.trim().to_string())
        .collect()
}

/// One process instance: id, observed activities, and its specification label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub variant: Vec<String>,
    pub specification: String,
}

impl Case {
    pub fn new(id: CaseId, variant: Vec<String>, specification: impl Into<String>) -> Self {
        Self {
            id,
            variant,
            specification: specification.into(),
        }
    }
}

/// The intended, compliant ordered list of activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSequence(Vec<String>);

impl ReferenceSequence {
    /// Build from activity names, trimming each one.
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            activities
                .into_iter()
                .map(|a| a.as_ref().trim().to_string())
                .collect(),
        )
    }

    /// Parse a delimited string such as `"A -> B -> C"`.
    pub fn parse(raw: &str, delimiter: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        Self(split_variant(raw, delimiter))
    }

    pub fn activities(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, activity: &str) -> bool {
        self.0.iter().any(|a| a == activity)
    }
}

impl fmt::Display for ReferenceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

/// Errors raised while loading tables or configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConformError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    #[error("Invalid config: {0}")]
    Config(String),
}
