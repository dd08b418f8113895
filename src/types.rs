use serde::{Deserialize, Serialize};

/// One backend-computed pricing decision for a product.
///
/// The pricing engine enriches seed data with adjusted prices and, depending
/// on the engine version, a varying set of optional diagnostics. Absent
/// `revenue_impact` means zero; absent `rule_applied` means no rule label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPricing {
    pub product_id: String,
    pub category: String,
    pub base_price: f64,
    pub adjusted_price: f64,
    #[serde(default)]
    pub price_change_percent: f64,
    pub inventory: i64,
    pub sales_last_30_days: i64,
    pub average_rating: f64,
    #[serde(default)]
    pub revenue_impact: f64,
    #[serde(default)]
    pub rule_applied: String,
    /// Demand prediction, emitted only by some engine versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_sales: Option<f64>,
}

/// One externally observed competitor price for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorPrice {
    pub product_id: String,
    pub competitor_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_name: Option<String>,
}

/// Raw product input accepted by the legacy price-adjustment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeed {
    pub product_id: String,
    pub base_price: f64,
    pub inventory: i64,
    pub sales_last_30_days: i64,
    pub average_rating: f64,
    pub category: String,
}

/// Payload returned by the service health endpoint.
///
/// A reachable service reports `"healthy"`; the connectivity state machine
/// treats any decodable answer as a successful probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Tri-state summary of backend reachability.
///
/// Starts `Unknown` at application start and transitions only when a probe or
/// fetch attempt completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Failed,
}

impl ConnectionState {
    /// Get a human-readable name for the state
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Unknown => "Unknown",
            ConnectionState::Connected => "Connected",
            ConnectionState::Failed => "Failed",
        }
    }
}
