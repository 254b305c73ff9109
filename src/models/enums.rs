use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The wire string doubles as the serde representation.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Direction a vital reading leaves its normal band in.
    AbnormalDirection {
        Low => "low",
        High => "high",
        CriticalLow => "critical_low",
        CriticalHigh => "critical_high",
    }
);

str_enum!(
    /// Clinical severity tier shared by every alert the engine emits.
    Severity {
        Critical => "critical",
        High => "high",
        Moderate => "moderate",
        Low => "low",
    }
);

impl Severity {
    /// Sort rank, most severe first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Moderate => 3,
            Self::Low => 4,
        }
    }
}

str_enum!(
    /// Vital a critical alert was raised against.
    VitalName {
        BloodPressure => "bloodPressure",
        Spo2 => "spo2",
        Pulse => "pulse",
        Temperature => "temperature",
        RespiratoryRate => "respiratoryRate",
        BloodSugar => "bloodSugar",
    }
);

str_enum!(AlertType {
    Vital => "vital",
    ElderlySafety => "elderly_safety",
});

str_enum!(
    /// Drug classes on the elderly high-risk formulary.
    MedicationCategory {
        Benzodiazepines => "benzodiazepines",
        Anticholinergics => "anticholinergics",
        Nsaids => "nsaids",
        Opioids => "opioids",
        Antipsychotics => "antipsychotics",
        Sulfonylureas => "sulfonylureas",
        MuscleRelaxants => "muscle_relaxants",
    }
);

str_enum!(BmiCategory {
    Underweight => "underweight",
    Normal => "normal",
    Overweight => "overweight",
    Obese => "obese",
});

str_enum!(TrendDirection {
    Stable => "stable",
    Increasing => "increasing",
    IncreasingRapidly => "increasing_rapidly",
    Decreasing => "decreasing",
    DecreasingRapidly => "decreasing_rapidly",
});

str_enum!(
    /// Status of a lab value against its analyte's reference range.
    ValueStatus {
        Normal => "normal",
        Low => "low",
        High => "high",
        CriticalLow => "critical_low",
        CriticalHigh => "critical_high",
        Unknown => "unknown",
    }
);

str_enum!(LabAlertType {
    Critical => "critical",
    Abnormal => "abnormal",
    Change => "change",
});

str_enum!(
    /// Look-back window for lab trending.
    TimeRange {
        OneMonth => "1m",
        ThreeMonths => "3m",
        SixMonths => "6m",
        OneYear => "1y",
        TwoYears => "2y",
        FiveYears => "5y",
    }
);

impl TimeRange {
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::TwoYears => 24,
            Self::FiveYears => 60,
        }
    }

    /// Unrecognised windows fall back to one year.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::OneYear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn abnormal_direction_round_trip() {
        for (variant, s) in [
            (AbnormalDirection::Low, "low"),
            (AbnormalDirection::High, "high"),
            (AbnormalDirection::CriticalLow, "critical_low"),
            (AbnormalDirection::CriticalHigh, "critical_high"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AbnormalDirection::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn severity_rank_orders_most_severe_first() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Moderate.rank());
        assert!(Severity::Moderate.rank() < Severity::Low.rank());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&TrendDirection::IncreasingRapidly).unwrap();
        assert_eq!(json, "\"increasing_rapidly\"");
        let name: VitalName = serde_json::from_str("\"respiratoryRate\"").unwrap();
        assert_eq!(name, VitalName::RespiratoryRate);
    }

    #[test]
    fn time_range_unknown_defaults_to_one_year() {
        assert_eq!(TimeRange::parse_or_default("3m"), TimeRange::ThreeMonths);
        assert_eq!(TimeRange::parse_or_default("10y"), TimeRange::OneYear);
        assert_eq!(TimeRange::FiveYears.months(), 60);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Severity::from_str("severe").is_err());
        assert!(ValueStatus::from_str("").is_err());
        let err = MedicationCategory::from_str("statins").unwrap_err();
        assert!(err.to_string().contains("MedicationCategory"));
    }
}
