use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Published reference range for one analyte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, alias = "criticalLow", skip_serializing_if = "Option::is_none")]
    pub critical_low: Option<f64>,
    #[serde(default, alias = "criticalHigh", skip_serializing_if = "Option::is_none")]
    pub critical_high: Option<f64>,
}

impl NormalRange {
    fn new(min: f64, max: f64, unit: &str) -> Self {
        Self {
            min,
            max,
            unit: unit.to_string(),
            critical_low: None,
            critical_high: None,
        }
    }

    fn critical(mut self, low: Option<f64>, high: Option<f64>) -> Self {
        self.critical_low = low;
        self.critical_high = high;
        self
    }

    /// Check `critical_low <= min <= max <= critical_high` over present bounds.
    fn check(&self, analyte: &str) -> Result<(), ReferenceError> {
        let invalid = |reason: &str| ReferenceError::InvalidRange {
            analyte: analyte.to_string(),
            reason: reason.to_string(),
        };

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if self.min > self.max {
            return Err(invalid("min exceeds max"));
        }
        if self.critical_low.is_some_and(|low| low > self.min) {
            return Err(invalid("critical_low exceeds min"));
        }
        if self.critical_high.is_some_and(|high| high < self.max) {
            return Err(invalid("critical_high below max"));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference data load failed ({0}): {1}")]
    Load(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Invalid reference range for {analyte}: {reason}")]
    InvalidRange { analyte: String, reason: String },
}

/// Lab reference ranges keyed by analyte name (exact, case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabReferenceData {
    pub ranges: BTreeMap<String, NormalRange>,
}

static BUILTIN: LazyLock<LabReferenceData> = LazyLock::new(|| {
    let table = [
        // Complete blood count
        ("WBC", NormalRange::new(4.5, 11.0, "K/uL").critical(Some(2.0), Some(30.0))),
        ("RBC", NormalRange::new(4.5, 5.5, "M/uL").critical(Some(2.5), Some(7.0))),
        ("Hemoglobin", NormalRange::new(12.0, 17.5, "g/dL").critical(Some(7.0), Some(20.0))),
        ("Hematocrit", NormalRange::new(36.0, 50.0, "%").critical(Some(20.0), Some(60.0))),
        ("Platelets", NormalRange::new(150.0, 400.0, "K/uL").critical(Some(50.0), Some(1000.0))),
        // Basic metabolic panel
        ("Sodium", NormalRange::new(136.0, 145.0, "mEq/L").critical(Some(120.0), Some(160.0))),
        ("Potassium", NormalRange::new(3.5, 5.0, "mEq/L").critical(Some(2.5), Some(6.5))),
        ("Chloride", NormalRange::new(98.0, 106.0, "mEq/L")),
        ("CO2", NormalRange::new(23.0, 29.0, "mEq/L").critical(Some(10.0), Some(40.0))),
        ("BUN", NormalRange::new(7.0, 20.0, "mg/dL").critical(None, Some(100.0))),
        ("Creatinine", NormalRange::new(0.7, 1.3, "mg/dL").critical(None, Some(10.0))),
        ("Glucose", NormalRange::new(70.0, 100.0, "mg/dL").critical(Some(40.0), Some(500.0))),
        ("Calcium", NormalRange::new(8.5, 10.5, "mg/dL").critical(Some(6.0), Some(13.0))),
        // Liver
        ("AST", NormalRange::new(10.0, 40.0, "U/L").critical(None, Some(1000.0))),
        ("ALT", NormalRange::new(7.0, 56.0, "U/L").critical(None, Some(1000.0))),
        ("ALP", NormalRange::new(44.0, 147.0, "U/L")),
        ("Bilirubin Total", NormalRange::new(0.1, 1.2, "mg/dL").critical(None, Some(15.0))),
        ("Albumin", NormalRange::new(3.5, 5.0, "g/dL").critical(Some(1.5), None)),
        // Cardiac
        ("Troponin I", NormalRange::new(0.0, 0.04, "ng/mL").critical(None, Some(0.5))),
        ("BNP", NormalRange::new(0.0, 100.0, "pg/mL").critical(None, Some(500.0))),
        // Diabetes
        ("HbA1c", NormalRange::new(4.0, 5.6, "%")),
        // Thyroid
        ("TSH", NormalRange::new(0.4, 4.0, "mIU/L")),
        ("Free T4", NormalRange::new(0.8, 1.8, "ng/dL")),
        // Lipids
        ("Total Cholesterol", NormalRange::new(0.0, 200.0, "mg/dL")),
        ("LDL", NormalRange::new(0.0, 100.0, "mg/dL")),
        ("HDL", NormalRange::new(40.0, 999.0, "mg/dL")),
        ("Triglycerides", NormalRange::new(0.0, 150.0, "mg/dL")),
        // Coagulation
        ("PT", NormalRange::new(11.0, 13.5, "seconds")),
        ("INR", NormalRange::new(0.8, 1.1, "")),
        ("PTT", NormalRange::new(25.0, 35.0, "seconds")),
        // Urinalysis
        ("Urine pH", NormalRange::new(4.5, 8.0, "")),
        ("Urine Specific Gravity", NormalRange::new(1.005, 1.030, "")),
    ];

    LabReferenceData {
        ranges: table
            .into_iter()
            .map(|(name, range)| (name.to_string(), range))
            .collect(),
    }
});

/// Read-only view of the built-in published ranges.
pub fn normal_ranges() -> &'static LabReferenceData {
    &BUILTIN
}

impl LabReferenceData {
    /// The built-in published table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load ranges from a JSON object keyed by analyte name.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read lab reference file");
            ReferenceError::Load(path.display().to_string(), e.to_string())
        })?;

        Self::parse(&json, &path.display().to_string()).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Rejected lab reference file");
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        Self::parse(json, "<inline>")
    }

    fn parse(json: &str, source: &str) -> Result<Self, ReferenceError> {
        let data: LabReferenceData = serde_json::from_str(json)
            .map_err(|e| ReferenceError::Parse(source.to_string(), e.to_string()))?;

        for (analyte, range) in &data.ranges {
            range.check(analyte)?;
        }

        Ok(data)
    }

    /// Overlay `other` onto this table; entries in `other` win.
    pub fn merged(mut self, other: LabReferenceData) -> Self {
        self.ranges.extend(other.ranges);
        self
    }

    pub fn get(&self, analyte: &str) -> Option<&NormalRange> {
        self.ranges.get(analyte)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
