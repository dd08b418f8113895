use crate::types::ProductPricing;
use serde::{Deserialize, Serialize};

/// Summary statistics over one fetched product batch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of products in the batch
    pub total_products: usize,
    /// Mean of per-product price change percentages
    pub avg_price_increase: f64,
    /// Sum of revenue impact across the batch
    pub total_revenue_impact: f64,
    /// Products holding more than 50 units of inventory
    pub high_inventory_count: usize,
}

/// Inventory level above which a product counts as high-inventory
const HIGH_INVENTORY_THRESHOLD: i64 = 50;

/// Reduce a product batch into summary statistics
///
/// Total over any input: an empty batch yields all-zero stats rather than a
/// NaN mean. Sums do not depend on input ordering.
pub fn compute_summary_stats(products: &[ProductPricing]) -> SummaryStats {
    if products.is_empty() {
        return SummaryStats::default();
    }

    let total_products = products.len();
    let change_sum: f64 = products.iter().map(|p| p.price_change_percent).sum();
    let total_revenue_impact: f64 = products.iter().map(|p| p.revenue_impact).sum();
    let high_inventory_count = products
        .iter()
        .filter(|p| p.inventory > HIGH_INVENTORY_THRESHOLD)
        .count();

    SummaryStats {
        total_products,
        avg_price_increase: change_sum / total_products as f64,
        total_revenue_impact,
        high_inventory_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::test_helpers::{product, sample_products};

    #[test]
    fn empty_batch_yields_zero_stats() {
        let stats = compute_summary_stats(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.avg_price_increase, 0.0);
        assert!(!stats.avg_price_increase.is_nan());
    }

    #[test]
    fn single_product_batch() {
        let products = vec![product("P001", "Electronics", 100.0, 110.0, 10.0, 15, 500.0)];
        let stats = compute_summary_stats(&products);

        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.avg_price_increase, 10.0);
        assert_eq!(stats.total_revenue_impact, 500.0);
        assert_eq!(stats.high_inventory_count, 0);
    }

    #[test]
    fn averages_and_sums_over_batch() {
        let products = vec![
            product("P001", "Electronics", 100.0, 110.0, 10.0, 15, 500.0),
            product("P002", "Apparel", 200.0, 220.0, 10.0, 60, 800.0),
            product("P003", "Home", 50.0, 52.0, 4.0, 5, -20.0),
        ];
        let stats = compute_summary_stats(&products);

        assert_eq!(stats.total_products, 3);
        assert!((stats.avg_price_increase - 8.0).abs() < 1e-9);
        assert!((stats.total_revenue_impact - 1280.0).abs() < 1e-9);
        assert_eq!(stats.high_inventory_count, 1);
    }

    #[test]
    fn high_inventory_threshold_is_strict() {
        let at_threshold = vec![product("P001", "Electronics", 100.0, 110.0, 10.0, 50, 0.0)];
        assert_eq!(compute_summary_stats(&at_threshold).high_inventory_count, 0);

        let above_threshold = vec![product("P001", "Electronics", 100.0, 110.0, 10.0, 51, 0.0)];
        assert_eq!(
            compute_summary_stats(&above_threshold).high_inventory_count,
            1
        );
    }

    #[test]
    fn sums_ignore_input_order() {
        let mut products = sample_products();
        let forward = compute_summary_stats(&products);
        products.reverse();
        let reversed = compute_summary_stats(&products);

        assert_eq!(forward.total_products, reversed.total_products);
        assert!((forward.total_revenue_impact - reversed.total_revenue_impact).abs() < 1e-9);
        assert!((forward.avg_price_increase - reversed.avg_price_increase).abs() < 1e-9);
    }
}
