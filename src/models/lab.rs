use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One collected value in an analyte's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabPoint {
    pub date: NaiveDate,
    pub value: f64,
    /// Unit as reported by the lab; used when the analyte has no reference entry.
    #[serde(default)]
    pub unit: Option<String>,
}

impl LabPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            unit: None,
        }
    }
}
