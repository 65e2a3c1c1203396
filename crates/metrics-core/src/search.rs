//! Search criteria for filtering dashboard rows.

use crate::record::StoreMetricsRecord;
use serde::{Deserialize, Serialize};

/// Optional filter over a record batch.
///
/// Every dimension is optional; an absent field places no constraint. The
/// dimensions are conjunctive: a record matches only if it satisfies all
/// present constraints.
///
/// Date bounds are ISO `YYYY-MM-DD` strings compared against `reportDate`.
/// The range is closed on both ends, and either end may be given alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Exact zone label match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// Substring match against the rendered store label (`[CODE]name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,

    /// Inclusive lower bound on `reportDate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Inclusive upper bound on `reportDate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl SearchCriteria {
    /// Criteria with no constraints; matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no constraint is present on any dimension.
    pub fn is_empty(&self) -> bool {
        self.area.is_none()
            && self.store.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Whether the record satisfies every present constraint.
    ///
    /// ISO date strings order lexicographically, so the range check is a
    /// plain string comparison.
    pub fn matches(&self, record: &StoreMetricsRecord) -> bool {
        if let Some(area) = &self.area {
            if record.area != *area {
                return false;
            }
        }

        if let Some(store) = &self.store {
            if !record.store_label().contains(store.as_str()) {
                return false;
            }
        }

        if let Some(from) = &self.date_from {
            if record.report_date.as_str() < from.as_str() {
                return false;
            }
        }

        if let Some(to) = &self.date_to {
            if record.report_date.as_str() > to.as_str() {
                return false;
            }
        }

        true
    }
}
