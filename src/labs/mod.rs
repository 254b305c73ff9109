//! Lab Trend Analyzer: reference ranges, summary statistics, regression
//! trend and the per-analyte report.

pub mod analyzer;
pub mod reference;
pub mod statistics;
pub mod trend;

pub use analyzer::{
    analyze_trend, generate_alerts, generate_analysis, value_status, AvailableLab,
    LabDataPoint, LabTrendAnalyzer, LabTrendReport, RangeBounds,
};
pub use reference::{normal_ranges, LabReferenceData, NormalRange, ReferenceError};
pub use statistics::{calculate_statistics, Statistics};
pub use trend::{calculate_trend, TrendResult};
