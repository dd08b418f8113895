//! Pricing Dashboard - client-side data layer for a dynamic-pricing dashboard
//!
//! This crate fetches computed product pricing and observed competitor prices
//! from a pricing service over HTTP/JSON, derives summary statistics and
//! chart-ready view models, and owns the connectivity state that tells a
//! presentation layer what it may display.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod coordinator;
pub mod http;
pub mod render;
pub mod traits;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use analysis::{
    build_category_rollup, build_competitor_comparison, build_price_series, classify_failure,
    compute_summary_stats, CategoryRollup, ChartSeriesPoint, CompetitorComparisonPoint,
    ErrorCategory, FailureReport, SummaryStats,
};
pub use config::{DashboardConfig, DashboardConfigBuilder, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use coordinator::{DashboardCoordinator, DashboardSnapshot, DefaultDashboardCoordinator};
pub use error::{DashboardError, Result};
pub use http::PricingClient;
pub use render::{CliRenderer, JsonRenderer, SnapshotRenderer, TableBuilder};
pub use traits::PricingApi;
pub use types::{CompetitorPrice, ConnectionState, HealthStatus, ProductPricing, ProductSeed};

/// Run one full fetch cycle with the given configuration
///
/// Convenience entry point over `DashboardCoordinator` for callers that do
/// not need to keep state across cycles. The returned snapshot reflects the
/// cycle outcome; a failed cycle settles `ConnectionState::Failed` with a
/// classified failure rather than returning an error.
pub async fn run_fetch_cycle(config: DashboardConfig) -> Result<DashboardSnapshot> {
    let mut coordinator = DashboardCoordinator::new(config)?;
    coordinator.fetch_data().await;
    Ok(coordinator.snapshot())
}
