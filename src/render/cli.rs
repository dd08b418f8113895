//! CLI renderer for terminal output with colors and tables

use super::table::{cells, TableBuilder};
use super::SnapshotRenderer;
use crate::coordinator::DashboardSnapshot;
use crate::types::ConnectionState;
use colored::Colorize;
use comfy_table::Cell;

/// CLI renderer that produces colored terminal output
pub struct CliRenderer {
    /// Whether to include the per-product pricing table
    pub include_product_rows: bool,
}

impl CliRenderer {
    /// Create a new CLI renderer with full output
    pub fn new() -> Self {
        Self {
            include_product_rows: true,
        }
    }

    /// Create a CLI renderer that prints summaries only
    pub fn summary_only() -> Self {
        Self {
            include_product_rows: false,
        }
    }

    fn connection_line(&self, snapshot: &DashboardSnapshot) -> String {
        let label = snapshot.connection.label();
        let colored = match snapshot.connection {
            ConnectionState::Connected => label.green().bold(),
            ConnectionState::Failed => label.red().bold(),
            ConnectionState::Unknown => label.yellow().bold(),
        };
        format!("Backend connection: {}", colored)
    }

    fn failure_block(&self, snapshot: &DashboardSnapshot) -> Option<String> {
        let failure = snapshot.last_failure.as_ref()?;
        let mut lines = Vec::new();
        lines.push(format!(
            "{} {}",
            format!("[{}]", failure.category.name()).red().bold(),
            failure.message
        ));
        if !failure.detail.is_empty() {
            lines.push(format!("  {}", failure.detail.dimmed()));
        }
        Some(lines.join("\n"))
    }

    fn stats_table(&self, snapshot: &DashboardSnapshot) -> String {
        let stats = &snapshot.stats;
        let mut builder = TableBuilder::new();
        builder
            .headers(vec![
                "Products",
                "Avg Price Change",
                "Revenue Impact",
                "High Inventory",
            ])
            .row(vec![
                stats.total_products.to_string(),
                format!("{:.2}%", stats.avg_price_increase),
                format!("${:.2}", stats.total_revenue_impact),
                stats.high_inventory_count.to_string(),
            ]);
        builder.build()
    }

    fn products_table(&self, snapshot: &DashboardSnapshot) -> String {
        let mut builder = TableBuilder::new();
        builder.headers(vec![
            "Product", "Category", "Base", "Adjusted", "Change", "Inventory", "Sales", "Rating",
            "Rule",
        ]);
        for product in &snapshot.products {
            builder.row(vec![
                product.product_id.clone(),
                product.category.clone(),
                format!("${:.2}", product.base_price),
                format!("${:.2}", product.adjusted_price),
                format!("{:+.2}%", product.price_change_percent),
                product.inventory.to_string(),
                product.sales_last_30_days.to_string(),
                format!("{:.1}", product.average_rating),
                product.rule_applied.clone(),
            ]);
        }
        builder.build()
    }

    fn rollup_table(&self, snapshot: &DashboardSnapshot) -> String {
        let mut builder = TableBuilder::new();
        builder.headers(vec!["Category", "Products", "Revenue Impact"]);
        for rollup in &snapshot.category_rollup {
            builder.row(vec![
                rollup.name.clone(),
                rollup.count.to_string(),
                format!("${:.0}", rollup.revenue),
            ]);
        }
        builder.build()
    }

    fn comparison_table(&self, snapshot: &DashboardSnapshot) -> String {
        let mut builder = TableBuilder::new();
        builder.headers(vec!["Product", "Our Price", "Competitor", "Advantage"]);
        for point in &snapshot.comparison {
            let advantage_text = format!("{:+.1}%", point.advantage);
            let advantage_cell = if point.advantage > 0.0 {
                cells::favorable(advantage_text)
            } else if point.advantage < 0.0 {
                cells::unfavorable(advantage_text)
            } else {
                cells::bold(advantage_text)
            };
            builder.styled_row(vec![
                Cell::new(point.name.clone()),
                Cell::new(format!("${:.2}", point.our_price)),
                Cell::new(format!("${:.2}", point.competitor_price)),
                advantage_cell,
            ]);
        }
        builder.build()
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRenderer for CliRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> String {
        let mut sections = Vec::new();

        sections.push(self.connection_line(snapshot));
        if let Some(updated) = &snapshot.last_updated {
            sections.push(format!(
                "Last updated: {}",
                updated.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        if let Some(block) = self.failure_block(snapshot) {
            sections.push(block);
        }

        if snapshot.products.is_empty() {
            sections.push("No product data available.".to_string());
            return sections.join("\n\n");
        }

        sections.push(format!("{}\n{}", "Summary".bold(), self.stats_table(snapshot)));
        if self.include_product_rows {
            sections.push(format!(
                "{}\n{}",
                "Product Pricing".bold(),
                self.products_table(snapshot)
            ));
        }
        sections.push(format!(
            "{}\n{}",
            "Revenue by Category".bold(),
            self.rollup_table(snapshot)
        ));
        sections.push(format!(
            "{}\n{}",
            "Competitor Comparison".bold(),
            self.comparison_table(snapshot)
        ));

        sections.join("\n\n")
    }
}
