//! Fetch orchestration and connection state ownership
//!
//! `DashboardCoordinator` runs the probe-then-fetch cycle, recomputes the
//! derived collections, and owns the only mutable state in the crate. All
//! writes happen at settle points; readers get snapshots.

use crate::analysis::error_classifier::{classify_failure, FailureReport};
use crate::analysis::stats::{compute_summary_stats, SummaryStats};
use crate::analysis::view_model::{
    build_category_rollup, build_competitor_comparison, build_price_series, CategoryRollup,
    ChartSeriesPoint, CompetitorComparisonPoint,
};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::http::PricingClient;
use crate::traits::PricingApi;
use crate::types::{CompetitorPrice, ConnectionState, ProductPricing, ProductSeed};
use chrono::{DateTime, Utc};
use futures::future;
use serde::Serialize;

/// Type alias for the coordinator over the real HTTP client
pub type DefaultDashboardCoordinator = DashboardCoordinator<PricingClient>;

/// Everything the presentation layer reads, settled as one unit
///
/// Derived collections are recomputed from scratch on every successful
/// cycle and replaced wholesale. On failure they keep their prior values,
/// empty on first run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub connection: ConnectionState,
    /// True only while a fetch cycle is in flight
    pub loading: bool,
    pub products: Vec<ProductPricing>,
    pub competitors: Vec<CompetitorPrice>,
    pub stats: SummaryStats,
    pub price_series: Vec<ChartSeriesPoint>,
    pub category_rollup: Vec<CategoryRollup>,
    pub comparison: Vec<CompetitorComparisonPoint>,
    /// Diagnostic from the most recent failed probe or fetch
    pub last_failure: Option<FailureReport>,
    /// When the last successful cycle settled
    pub last_updated: Option<DateTime<Utc>>,
}

/// Coordinates the connectivity probe and the two data fetches
pub struct DashboardCoordinator<C>
where
    C: PricingApi,
{
    config: DashboardConfig,
    client: C,
    state: DashboardSnapshot,
}

impl DashboardCoordinator<PricingClient> {
    /// Create a coordinator backed by the real HTTP client
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let client = PricingClient::new(&config)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C> DashboardCoordinator<C>
where
    C: PricingApi,
{
    /// Create a coordinator over any API implementation
    pub fn with_client(config: DashboardConfig, client: C) -> Self {
        Self {
            config,
            client,
            state: DashboardSnapshot::default(),
        }
    }

    /// Current state, borrowed
    pub fn state(&self) -> &DashboardSnapshot {
        &self.state
    }

    /// Current state, cloned for handing across task boundaries
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.clone()
    }

    /// Run one full cycle: probe, then concurrent product + competitor fetch
    ///
    /// The probe is awaited to completion before the data fetches are
    /// issued; the two fetches run concurrently and both are awaited before
    /// anything is recomputed, so a partial success never replaces prior
    /// results. A call that observes an in-flight cycle returns the current
    /// state untouched.
    pub async fn fetch_data(&mut self) -> &DashboardSnapshot {
        if self.state.loading {
            return &self.state;
        }
        self.state.loading = true;

        let timeout = self.config.fetch_timeout();
        if let Err(error) = self.client.check_health(timeout).await {
            self.settle_failure(&error);
            return &self.state;
        }

        let (products, competitors) = future::join(
            self.client.fetch_products(timeout),
            self.client.fetch_competitor_prices(timeout),
        )
        .await;

        match (products, competitors) {
            (Ok(products), Ok(competitors)) => self.settle_success(products, competitors),
            // On a double failure the product error is the one reported.
            (Err(error), _) | (_, Err(error)) => self.settle_failure(&error),
        }
        &self.state
    }

    /// Run the standalone probe and update connection state only
    ///
    /// Product and competitor data plus all derived collections stay
    /// untouched whatever the probe outcome.
    pub async fn test_connection(&mut self) -> &DashboardSnapshot {
        let timeout = self.config.probe_timeout();
        match self.client.check_health(timeout).await {
            Ok(_) => {
                self.state.connection = ConnectionState::Connected;
                self.state.last_failure = None;
            }
            Err(error) => {
                self.state.connection = ConnectionState::Failed;
                self.state.last_failure = Some(classify_failure(&error));
            }
        }
        &self.state
    }

    /// Submit seed products to the legacy adjustment endpoint
    ///
    /// Pass-through call; coordinator state is not involved.
    pub async fn adjust_prices(&self, seeds: &[ProductSeed]) -> Result<Vec<ProductPricing>> {
        self.client
            .adjust_prices(seeds, self.config.fetch_timeout())
            .await
    }

    fn settle_success(
        &mut self,
        products: Vec<ProductPricing>,
        competitors: Vec<CompetitorPrice>,
    ) {
        self.state.stats = compute_summary_stats(&products);
        self.state.price_series = build_price_series(&products);
        self.state.category_rollup = build_category_rollup(&products);
        self.state.comparison = build_competitor_comparison(&products, &competitors);
        self.state.products = products;
        self.state.competitors = competitors;
        self.state.connection = ConnectionState::Connected;
        self.state.last_failure = None;
        self.state.last_updated = Some(Utc::now());
        self.state.loading = false;
    }

    fn settle_failure(&mut self, error: &DashboardError) {
        self.state.connection = ConnectionState::Failed;
        self.state.last_failure = Some(classify_failure(error));
        self.state.loading = false;
    }
}
