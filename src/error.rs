use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Comprehensive error types for the dashboard data layer
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Service returned status {status} for {url}")]
    UnexpectedStatus {
        status: u16,
        body: String,
        url: String,
    },

    #[error("Invalid response payload: {message}")]
    InvalidResponse { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl DashboardError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new invalid response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// User-facing message without internal error chains
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::ConfigParse(err) => format!("Failed to parse configuration: {err}"),
            Self::CsvParse(err) => format!("Failed to parse CSV input: {err}"),
            Self::Json(err) => format!("Failed to serialize JSON: {err}"),
            Self::Http(err) => format!("HTTP request failed: {err}"),
            Self::UrlParse(err) => format!("Invalid URL: {err}"),
            Self::ConfigNotFound { path } => {
                format!("Configuration file not found at: {}", path.display())
            }
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
            Self::UnexpectedStatus { status, url, .. } => {
                format!("The pricing service returned status {status} for {url}")
            }
            Self::InvalidResponse { message } => {
                format!("The pricing service returned an unreadable payload: {message}")
            }
            Self::General { message } => message.clone(),
        }
    }
}
