//! View-model derivation for charts and tables
//!
//! Pure projections from fetched batches into presentation-ready rows.
//! Ordering is deterministic: series rows follow product order, rollups
//! follow first appearance of each category, comparison rows follow
//! product order with one row per product.

use crate::types::{CompetitorPrice, ProductPricing};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One per-product point of the chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    /// Product id, used as the series label
    pub name: String,
    pub base_price: f64,
    pub adjusted_price: f64,
    pub price_change: f64,
    pub inventory: i64,
    pub sales: i64,
    pub rating: f64,
}

/// Aggregated revenue impact for one product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRollup {
    /// Category label
    pub name: String,
    /// Number of products in the category
    pub count: usize,
    /// Summed revenue impact, rounded to a whole amount for display
    pub revenue: f64,
}

/// One per-product row of the our-price-vs-competitor comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorComparisonPoint {
    /// Product id, used as the row label
    pub name: String,
    pub our_price: f64,
    pub competitor_price: f64,
    /// Competitor price premium over ours, percent, one decimal place
    pub advantage: f64,
}

/// Project the product batch into chart series points, preserving input order
pub fn build_price_series(products: &[ProductPricing]) -> Vec<ChartSeriesPoint> {
    products
        .iter()
        .map(|p| ChartSeriesPoint {
            name: p.product_id.clone(),
            base_price: p.base_price,
            adjusted_price: p.adjusted_price,
            price_change: p.price_change_percent,
            inventory: p.inventory,
            sales: p.sales_last_30_days,
            rating: p.average_rating,
        })
        .collect()
}

/// Aggregate revenue impact per category, preserving first-seen order
pub fn build_category_rollup(products: &[ProductPricing]) -> Vec<CategoryRollup> {
    let mut rollups: Vec<CategoryRollup> = Vec::new();

    for product in products {
        match rollups.iter_mut().find(|r| r.name == product.category) {
            Some(rollup) => {
                rollup.revenue += product.revenue_impact;
                rollup.count += 1;
            }
            None => rollups.push(CategoryRollup {
                name: product.category.clone(),
                count: 1,
                revenue: product.revenue_impact,
            }),
        }
    }

    for rollup in &mut rollups {
        rollup.revenue = rollup.revenue.round();
    }

    rollups
}

/// Join each product against its competitor price, one row per product
///
/// Competitor records are indexed by product id; the first record wins when
/// the feed carries duplicates. A product with no matching record gets a
/// zero competitor price and zero advantage rather than a missing row.
pub fn build_competitor_comparison(
    products: &[ProductPricing],
    competitors: &[CompetitorPrice],
) -> Vec<CompetitorComparisonPoint> {
    let mut index: HashMap<&str, f64> = HashMap::new();
    for entry in competitors {
        index
            .entry(entry.product_id.as_str())
            .or_insert(entry.competitor_price);
    }

    products
        .iter()
        .map(|product| {
            let our_price = product.adjusted_price;
            match index.get(product.product_id.as_str()) {
                Some(&competitor_price) => CompetitorComparisonPoint {
                    name: product.product_id.clone(),
                    our_price,
                    competitor_price,
                    advantage: price_advantage(our_price, competitor_price),
                },
                None => CompetitorComparisonPoint {
                    name: product.product_id.clone(),
                    our_price,
                    competitor_price: 0.0,
                    advantage: 0.0,
                },
            }
        })
        .collect()
}

/// Percentage by which the competitor price exceeds ours, one decimal place
///
/// A non-positive price of ours yields zero advantage instead of a division
/// fault.
fn price_advantage(our_price: f64, competitor_price: f64) -> f64 {
    if our_price <= 0.0 {
        return 0.0;
    }
    let raw = (competitor_price - our_price) / our_price * 100.0;
    (raw * 10.0).round() / 10.0
}
