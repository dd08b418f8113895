use crate::ui;
use pricing_dashboard::config::resolve_config;
use pricing_dashboard::{ConnectionState, DashboardCoordinator, DashboardError, Result};
use tokio::runtime::Runtime;

pub fn execute(base_url: Option<String>, config_path: String) -> Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(execute_async(base_url, config_path))
}

async fn execute_async(base_url: Option<String>, config_path: String) -> Result<()> {
    let config = resolve_config(&config_path, base_url)?;
    let base = config.base_url.clone();
    let mut coordinator = DashboardCoordinator::new(config)?;

    let spinner = ui::spinner(&format!("Probing {}...", base));
    coordinator.test_connection().await;
    spinner.finish_and_clear();

    let snapshot = coordinator.snapshot();
    match snapshot.connection {
        ConnectionState::Connected => {
            ui::success_message(&format!("{} is reachable", base));
            Ok(())
        }
        _ => match snapshot.last_failure {
            Some(failure) => {
                if !failure.detail.is_empty() {
                    ui::warning_message(&failure.detail);
                }
                Err(DashboardError::general(failure.message))
            }
            None => Err(DashboardError::general(format!(
                "{} is not reachable",
                base
            ))),
        },
    }
}
