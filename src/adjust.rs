use crate::ui;
use pricing_dashboard::config::{load_product_seeds, resolve_config};
use pricing_dashboard::{
    DashboardCoordinator, DashboardError, ProductPricing, Result, TableBuilder,
};
use tokio::runtime::Runtime;

pub fn execute(
    file: String,
    base_url: Option<String>,
    config_path: String,
    json: bool,
) -> Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(execute_async(file, base_url, config_path, json))
}

async fn execute_async(
    file: String,
    base_url: Option<String>,
    config_path: String,
    json: bool,
) -> Result<()> {
    let seeds = load_product_seeds(&file)?;
    if seeds.is_empty() {
        return Err(DashboardError::invalid_config(format!(
            "No seed products found in {}",
            file
        )));
    }

    let config = resolve_config(&config_path, base_url)?;
    let coordinator = DashboardCoordinator::new(config)?;

    let spinner = ui::spinner(&format!("Adjusting prices for {} products...", seeds.len()));
    let result = coordinator.adjust_prices(&seeds).await;
    spinner.finish_and_clear();
    let adjusted = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&adjusted)?);
    } else {
        println!("{}", adjusted_table(&adjusted));
        ui::success_message(&format!("Adjusted {} products", adjusted.len()));
    }
    Ok(())
}

fn adjusted_table(products: &[ProductPricing]) -> String {
    let mut builder = TableBuilder::new();
    builder.headers(vec![
        "Product", "Category", "Base", "Adjusted", "Change", "Rule",
    ]);
    for product in products {
        builder.row(vec![
            product.product_id.clone(),
            product.category.clone(),
            format!("${:.2}", product.base_price),
            format!("${:.2}", product.adjusted_price),
            format!("{:+.2}%", product.price_change_percent),
            product.rule_applied.clone(),
        ]);
    }
    builder.build()
}
