//! Pure aggregation and classification logic - no presentation concerns
//!
//! Everything in this module is a total function over already-fetched data:
//! summary statistics, chart/table view models, and failure classification.

pub mod error_classifier;
pub mod stats;
pub mod view_model;

pub use error_classifier::{classify_failure, ErrorCategory, FailureReport};
pub use stats::{compute_summary_stats, SummaryStats};
pub use view_model::{
    build_category_rollup, build_competitor_comparison, build_price_series, CategoryRollup,
    ChartSeriesPoint, CompetitorComparisonPoint,
};
