mod report;

pub use report::*;

use std::collections::HashMap;
use std::fmt;

use conform_core::types::CaseId;
use serde::{Deserialize, Serialize};

/// How a case departs from the happy path for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviationKind {
    /// Expected by the reference, never observed in the case.
    #[serde(rename = "MISSING")]
    MissingStep,
    /// Observed in the case, not part of the reference.
    #[serde(rename = "DID")]
    ExtraOrDifferentStep,
}

impl DeviationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviationKind::MissingStep => "MISSING",
            DeviationKind::ExtraOrDifferentStep => "DID",
        }
    }

    /// The kind the same activity would get with reference and variant swapped.
    pub fn inverse(&self) -> Self {
        match self {
            DeviationKind::MissingStep => DeviationKind::ExtraOrDifferentStep,
            DeviationKind::ExtraOrDifferentStep => DeviationKind::MissingStep,
        }
    }

    /// Composite aggregation key, e.g. `MISSING:Pay Invoice`.
    pub fn key_for(&self, activity: &str) -> String {
        format!("{}:{}", self.as_str(), activity)
    }
}

impl fmt::Display for DeviationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of nonconformance produced for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviationRecord {
    pub kind: DeviationKind,
    pub activity: String,
    pub case_id: CaseId,
    pub specification: String,
}

impl DeviationRecord {
    pub fn key(&self) -> String {
        self.kind.key_for(&self.activity)
    }
}

/// Working aggregate for one (kind, activity) key during a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationGroup {
    pub key: String,
    pub kind: DeviationKind,
    pub activity: String,
    /// Affected cases in arrival order.
    pub case_ids: Vec<CaseId>,
    /// Specification label -> affected cases carrying that label.
    pub specifications: HashMap<String, Vec<CaseId>>,
}

impl ViolationGroup {
    pub fn case_count(&self) -> usize {
        self.case_ids.len()
    }
}

/// Groups keyed by composite key, as produced by the aggregator.
pub type ViolationMap = HashMap<String, ViolationGroup>;
