use crate::error::Result;
use crate::types::{CompetitorPrice, HealthStatus, ProductPricing, ProductSeed};
use std::future::Future;
use std::time::Duration;

/// Trait for pricing-service API implementations
///
/// Every call takes an explicit timeout because the same endpoint is probed
/// with different bounds depending on context (standalone check vs. fetch
/// cycle). Implementations perform one bounded request and never retry.
pub trait PricingApi: Send + Sync {
    /// Check the service health endpoint
    fn check_health(&self, timeout: Duration)
        -> impl Future<Output = Result<HealthStatus>> + Send;

    /// Fetch all products with current pricing
    fn fetch_products(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<ProductPricing>>> + Send;

    /// Fetch observed competitor prices
    fn fetch_competitor_prices(
        &self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<CompetitorPrice>>> + Send;

    /// Submit seed products to the legacy price-adjustment endpoint
    fn adjust_prices(
        &self,
        seeds: &[ProductSeed],
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<ProductPricing>>> + Send;
}
