use crate::error::{DashboardError, Result};
use crate::traits::PricingApi;
use crate::types::{CompetitorPrice, HealthStatus, ProductPricing, ProductSeed};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Failure a mock call reproduces on demand
///
/// `DashboardError` carries non-clonable transport errors, so mocks script
/// failures as constructible shapes instead of holding error values.
#[derive(Debug, Clone)]
pub enum ScriptedFailure {
    /// A non-2xx response with the given status and body
    Status { status: u16, body: String },
    /// A generic failure with the given message
    Message(String),
}

impl ScriptedFailure {
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: body.to_string(),
        }
    }

    pub fn message(message: &str) -> Self {
        Self::Message(message.to_string())
    }

    fn to_error(&self, url: &str) -> DashboardError {
        match self {
            ScriptedFailure::Status { status, body } => DashboardError::UnexpectedStatus {
                status: *status,
                body: body.clone(),
                url: url.to_string(),
            },
            ScriptedFailure::Message(message) => DashboardError::general(message.clone()),
        }
    }
}

#[derive(Debug, Default)]
struct FailureScript {
    health: Option<ScriptedFailure>,
    products: Option<ScriptedFailure>,
    competitors: Option<ScriptedFailure>,
    adjust: Option<ScriptedFailure>,
}

/// Mock pricing API for testing
///
/// Clones share the failure script, so a test can keep a handle and
/// re-script failures between calls on a coordinator that owns the mock.
#[derive(Debug, Clone, Default)]
pub struct MockPricingApi {
    pub products: Vec<ProductPricing>,
    pub competitors: Vec<CompetitorPrice>,
    failures: Arc<Mutex<FailureScript>>,
}

impl MockPricingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: Vec<ProductPricing>) -> Self {
        self.products = products;
        self
    }

    pub fn with_competitors(mut self, competitors: Vec<CompetitorPrice>) -> Self {
        self.competitors = competitors;
        self
    }

    pub fn with_health_failure(self, failure: ScriptedFailure) -> Self {
        self.set_health_failure(Some(failure));
        self
    }

    pub fn with_product_failure(self, failure: ScriptedFailure) -> Self {
        self.set_product_failure(Some(failure));
        self
    }

    pub fn with_competitor_failure(self, failure: ScriptedFailure) -> Self {
        self.set_competitor_failure(Some(failure));
        self
    }

    pub fn with_adjust_failure(self, failure: ScriptedFailure) -> Self {
        self.set_adjust_failure(Some(failure));
        self
    }

    pub fn set_health_failure(&self, failure: Option<ScriptedFailure>) {
        self.failures.lock().unwrap().health = failure;
    }

    pub fn set_product_failure(&self, failure: Option<ScriptedFailure>) {
        self.failures.lock().unwrap().products = failure;
    }

    pub fn set_competitor_failure(&self, failure: Option<ScriptedFailure>) {
        self.failures.lock().unwrap().competitors = failure;
    }

    pub fn set_adjust_failure(&self, failure: Option<ScriptedFailure>) {
        self.failures.lock().unwrap().adjust = failure;
    }

    fn scripted_error(
        &self,
        select: impl Fn(&FailureScript) -> Option<ScriptedFailure>,
        url: &str,
    ) -> Option<DashboardError> {
        let script = self.failures.lock().unwrap();
        select(&script).map(|failure| failure.to_error(url))
    }
}

impl PricingApi for MockPricingApi {
    async fn check_health(&self, _timeout: Duration) -> Result<HealthStatus> {
        if let Some(error) = self.scripted_error(|s| s.health.clone(), "mock://pricing/api/health")
        {
            return Err(error);
        }
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }

    async fn fetch_products(&self, _timeout: Duration) -> Result<Vec<ProductPricing>> {
        if let Some(error) =
            self.scripted_error(|s| s.products.clone(), "mock://pricing/api/products")
        {
            return Err(error);
        }
        Ok(self.products.clone())
    }

    async fn fetch_competitor_prices(&self, _timeout: Duration) -> Result<Vec<CompetitorPrice>> {
        if let Some(error) = self.scripted_error(
            |s| s.competitors.clone(),
            "mock://pricing/api/competitor-prices",
        ) {
            return Err(error);
        }
        Ok(self.competitors.clone())
    }

    async fn adjust_prices(
        &self,
        _seeds: &[ProductSeed],
        _timeout: Duration,
    ) -> Result<Vec<ProductPricing>> {
        if let Some(error) = self.scripted_error(|s| s.adjust.clone(), "mock://pricing/api/prices")
        {
            return Err(error);
        }
        Ok(self.products.clone())
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;

    pub fn product(
        id: &str,
        category: &str,
        base_price: f64,
        adjusted_price: f64,
        price_change_percent: f64,
        inventory: i64,
        revenue_impact: f64,
    ) -> ProductPricing {
        ProductPricing {
            product_id: id.to_string(),
            category: category.to_string(),
            base_price,
            adjusted_price,
            price_change_percent,
            inventory,
            sales_last_30_days: 120,
            average_rating: 4.5,
            revenue_impact,
            rule_applied: "Standard: +5%".to_string(),
            predicted_sales: None,
        }
    }

    pub fn competitor_entry(id: &str, competitor_price: f64) -> CompetitorPrice {
        CompetitorPrice {
            product_id: id.to_string(),
            competitor_price,
            competitor_name: None,
        }
    }

    pub fn seed(
        id: &str,
        category: &str,
        base_price: f64,
        inventory: i64,
        sales_last_30_days: i64,
        average_rating: f64,
    ) -> ProductSeed {
        ProductSeed {
            product_id: id.to_string(),
            base_price,
            inventory,
            sales_last_30_days,
            average_rating,
            category: category.to_string(),
        }
    }

    /// Five products matching the service's sample catalog after pricing
    pub fn sample_products() -> Vec<ProductPricing> {
        vec![
            ProductPricing {
                product_id: "P001".to_string(),
                category: "Electronics".to_string(),
                base_price: 100.0,
                adjusted_price: 110.0,
                price_change_percent: 10.0,
                inventory: 15,
                sales_last_30_days: 120,
                average_rating: 4.5,
                revenue_impact: 1200.0,
                rule_applied: "High demand: +10%".to_string(),
                predicted_sales: Some(114.0),
            },
            ProductPricing {
                product_id: "P002".to_string(),
                category: "Apparel".to_string(),
                base_price: 200.0,
                adjusted_price: 220.0,
                price_change_percent: 10.0,
                inventory: 50,
                sales_last_30_days: 40,
                average_rating: 4.0,
                revenue_impact: 800.0,
                rule_applied: "Standard: +5%".to_string(),
                predicted_sales: Some(38.0),
            },
            ProductPricing {
                product_id: "P003".to_string(),
                category: "Home".to_string(),
                base_price: 50.0,
                adjusted_price: 60.0,
                price_change_percent: 20.0,
                inventory: 5,
                sales_last_30_days: 10,
                average_rating: 3.8,
                revenue_impact: 100.0,
                rule_applied: "Low inventory: +20%".to_string(),
                predicted_sales: Some(9.5),
            },
            ProductPricing {
                product_id: "P004".to_string(),
                category: "Electronics".to_string(),
                base_price: 75.0,
                adjusted_price: 82.5,
                price_change_percent: 10.0,
                inventory: 25,
                sales_last_30_days: 80,
                average_rating: 4.2,
                revenue_impact: 600.0,
                rule_applied: "Standard: +5%".to_string(),
                predicted_sales: Some(76.0),
            },
            ProductPricing {
                product_id: "P005".to_string(),
                category: "Apparel".to_string(),
                base_price: 150.0,
                adjusted_price: 180.0,
                price_change_percent: 20.0,
                inventory: 8,
                sales_last_30_days: 60,
                average_rating: 4.7,
                revenue_impact: 1800.0,
                rule_applied: "Low inventory: +20%".to_string(),
                predicted_sales: Some(57.0),
            },
        ]
    }

    /// Competitor feed matching the sample catalog
    pub fn sample_competitors() -> Vec<CompetitorPrice> {
        vec![
            CompetitorPrice {
                product_id: "P001".to_string(),
                competitor_price: 90.0,
                competitor_name: Some("CompetitorA".to_string()),
            },
            CompetitorPrice {
                product_id: "P002".to_string(),
                competitor_price: 195.0,
                competitor_name: Some("CompetitorB".to_string()),
            },
            CompetitorPrice {
                product_id: "P003".to_string(),
                competitor_price: 48.0,
                competitor_name: Some("CompetitorC".to_string()),
            },
            CompetitorPrice {
                product_id: "P004".to_string(),
                competitor_price: 72.0,
                competitor_name: Some("CompetitorA".to_string()),
            },
            CompetitorPrice {
                product_id: "P005".to_string(),
                competitor_price: 145.0,
                competitor_name: Some("CompetitorB".to_string()),
            },
        ]
    }
}
