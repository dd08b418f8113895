use crate::error::{DashboardError, Result};
use crate::types::ProductSeed;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default base URL of the pricing service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable that overrides the base URL at startup
pub const BASE_URL_ENV_VAR: &str = "PRICING_API_URL";

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Configuration for the dashboard data layer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Base URL of the pricing service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout in seconds for a standalone connectivity probe
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Timeout in seconds for calls made inside a full fetch cycle
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_probe_timeout() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl DashboardConfig {
    /// Create a new config builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::new()
    }

    /// Build a configuration from defaults plus the environment override
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content =
            std::fs::read_to_string(path_ref).map_err(|_| DashboardError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            })?;

        let config: DashboardConfig = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url).map_err(|e| {
            DashboardError::invalid_config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if self.probe_timeout_secs == 0 {
            return Err(DashboardError::invalid_config(
                "probe_timeout_secs must be greater than zero",
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(DashboardError::invalid_config(
                "fetch_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Timeout used by a standalone connectivity probe
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Timeout used by every call inside a full fetch cycle
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Builder for DashboardConfig to improve API ergonomics
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            config: DashboardConfig::default(),
        }
    }

    /// Set the base URL of the pricing service
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the standalone probe timeout in seconds
    #[must_use]
    pub fn probe_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.probe_timeout_secs = seconds;
        self
    }

    /// Set the fetch-cycle timeout in seconds
    #[must_use]
    pub fn fetch_timeout_secs(mut self, seconds: u64) -> Self {
        self.config.fetch_timeout_secs = seconds;
        self
    }

    /// Validate and return the finished configuration
    pub fn build(self) -> Result<DashboardConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DashboardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate default pricing-dash.toml template
pub fn generate_default_config_template() -> String {
    r#"# Pricing dashboard configuration

# Base URL of the pricing service
base_url = "http://localhost:5000"

# Timeout in seconds for a standalone connectivity probe
probe_timeout_secs = 5

# Timeout in seconds for calls made inside a full fetch cycle
fetch_timeout_secs = 10
"#
    .to_string()
}

/// Generate default products.csv template for the adjust command
pub fn generate_default_seeds_csv() -> String {
    r"product_id,base_price,inventory,sales_last_30_days,average_rating,category
P001,100.0,15,120,4.5,Electronics
P002,200.0,50,40,4.0,Apparel
P003,50.0,5,10,3.8,Home
"
    .to_string()
}

/// Check if the configuration file exists and optionally generate it
pub fn ensure_config_file_exists(config_path: &str, force_generate: bool) -> Result<bool> {
    let exists = Path::new(config_path).exists();
    if !exists && force_generate {
        std::fs::write(config_path, generate_default_config_template())
            .map_err(DashboardError::Io)?;
        return Ok(true);
    }
    Ok(false)
}

/// Resolve configuration from file, environment, and an explicit override
///
/// A missing config file is not an error; the environment override and
/// built-in defaults apply instead. An explicit base URL wins over both.
pub fn resolve_config(config_path: &str, base_url: Option<String>) -> Result<DashboardConfig> {
    let mut config = if Path::new(config_path).exists() {
        DashboardConfig::load_from_file(config_path)?
    } else {
        DashboardConfig::from_env()
    };
    if let Some(url) = base_url {
        config.base_url = url;
    }
    config.validate()?;
    Ok(config)
}

/// Load seed products from a CSV file for the legacy adjust endpoint
pub fn load_product_seeds<P: AsRef<Path>>(path: P) -> Result<Vec<ProductSeed>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut seeds = Vec::new();
    for result in reader.deserialize() {
        let seed: ProductSeed = result?;
        seeds.push(seed);
    }
    Ok(seeds)
}
