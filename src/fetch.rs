use crate::ui;
use pricing_dashboard::config::{ensure_config_file_exists, resolve_config};
use pricing_dashboard::{
    CliRenderer, DashboardCoordinator, JsonRenderer, Result, SnapshotRenderer,
};
use tokio::runtime::Runtime;

pub fn execute(
    base_url: Option<String>,
    config_path: String,
    init: bool,
    json: bool,
    summary: bool,
) -> Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(execute_async(base_url, config_path, init, json, summary))
}

async fn execute_async(
    base_url: Option<String>,
    config_path: String,
    init: bool,
    json: bool,
    summary: bool,
) -> Result<()> {
    if init {
        if ensure_config_file_exists(&config_path, true)? {
            ui::success_message(&format!("Created {}", config_path));
            ui::info_message(&format!(
                "Edit {} to point at your pricing service",
                config_path
            ));
        } else {
            ui::info_message(&format!("{} already exists", config_path));
        }
    }

    let config = resolve_config(&config_path, base_url)?;
    let mut coordinator = DashboardCoordinator::new(config)?;

    let spinner = ui::spinner("Fetching pricing data...");
    coordinator.fetch_data().await;
    spinner.finish_and_clear();

    let renderer: Box<dyn SnapshotRenderer> = if json {
        Box::new(JsonRenderer::new())
    } else if summary {
        Box::new(CliRenderer::summary_only())
    } else {
        Box::new(CliRenderer::new())
    };
    println!("{}", renderer.render(coordinator.state()));
    Ok(())
}
