use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::traits::PricingApi;
use crate::types::{CompetitorPrice, HealthStatus, ProductPricing, ProductSeed};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const HEALTH_PATH: &str = "/api/health";
const PRODUCTS_PATH: &str = "/api/products";
const COMPETITOR_PRICES_PATH: &str = "/api/competitor-prices";
const ADJUST_PRICES_PATH: &str = "/api/prices";

/// Pricing-service client backed by reqwest
///
/// Each call carries its own timeout; the client-level timeout only acts as a
/// backstop for calls that forget to set one.
#[derive(Debug, Clone)]
pub struct PricingClient {
    client: Client,
    base_url: String,
}

impl PricingClient {
    /// Create a new client for the configured pricing service
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        // Validate up front so a bad base URL fails at construction, not on
        // the first call.
        Url::parse(&config.base_url)?;

        let client = Client::builder().timeout(config.fetch_timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve an endpoint path against the configured base URL
    ///
    /// Plain concatenation, so a base URL carrying a path prefix keeps it.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(DashboardError::from)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, timeout: Duration) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self.client.get(url).timeout(timeout).send().await?;
        Self::decode_response(response).await
    }

    /// Convert a response into typed data, preserving error bodies for
    /// classification
    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            // Body read failures on an already-failed call degrade to an
            // empty diagnostic rather than masking the status.
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UnexpectedStatus {
                status: status.as_u16(),
                body,
                url,
            });
        }

        // Keep transport failures during the body read classifiable; only
        // malformed payloads become InvalidResponse.
        response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                DashboardError::invalid_response(err.to_string())
            } else {
                DashboardError::Http(err)
            }
        })
    }
}

impl PricingApi for PricingClient {
    async fn check_health(&self, timeout: Duration) -> Result<HealthStatus> {
        self.get_json(HEALTH_PATH, timeout).await
    }

    async fn fetch_products(&self, timeout: Duration) -> Result<Vec<ProductPricing>> {
        self.get_json(PRODUCTS_PATH, timeout).await
    }

    async fn fetch_competitor_prices(&self, timeout: Duration) -> Result<Vec<CompetitorPrice>> {
        self.get_json(COMPETITOR_PRICES_PATH, timeout).await
    }

    async fn adjust_prices(
        &self,
        seeds: &[ProductSeed],
        timeout: Duration,
    ) -> Result<Vec<ProductPricing>> {
        let url = self.endpoint_url(ADJUST_PRICES_PATH)?;
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(seeds)
            .send()
            .await?;
        Self::decode_response(response).await
    }
}
