//! Failure classification for network and service errors
//!
//! Maps a failed call into a fixed set of user-facing categories.
//! No presentation concerns - returns structured data only.

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io;

/// User-facing failure categories, from most to least specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// The service actively refused the TCP connection
    ConnectionRefused,
    /// The call exceeded its deadline
    Timeout,
    /// Transport-level failure other than refusal or timeout
    NetworkUnreachable,
    /// HTTP 404 from the service
    NotFound,
    /// HTTP 5xx from the service
    ServerError,
    /// The service answered with an application error payload
    ApplicationError,
    /// Anything the classifier does not recognize
    Unknown,
}

impl ErrorCategory {
    /// Short human-readable label for display
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::ConnectionRefused => "Connection refused",
            ErrorCategory::Timeout => "Timeout",
            ErrorCategory::NetworkUnreachable => "Network unreachable",
            ErrorCategory::NotFound => "Not found",
            ErrorCategory::ServerError => "Server error",
            ErrorCategory::ApplicationError => "Application error",
            ErrorCategory::Unknown => "Unknown",
        }
    }
}

/// Structured diagnostic built from one failed call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub category: ErrorCategory,
    /// Human-readable summary built from the category template
    pub message: String,
    /// Raw error text preserved for diagnostics
    pub detail: String,
}

impl FailureReport {
    fn new(category: ErrorCategory, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            detail: detail.into(),
        }
    }
}

/// Classify a failed call into a category with a diagnostic message
///
/// Total over all error values. Precedence when several signals are
/// present: connection refused, then timeout, then other transport
/// failures, then HTTP 404, then HTTP 5xx, then an application error
/// payload, else `Unknown` with the raw text preserved.
pub fn classify_failure(error: &DashboardError) -> FailureReport {
    match error {
        DashboardError::Http(http_error) => classify_transport(http_error),
        DashboardError::UnexpectedStatus { status, body, url } => {
            // Display for status errors omits the body; keep it in the detail.
            let detail = if body.trim().is_empty() {
                error.to_string()
            } else {
                format!("{}: {}", error, body)
            };
            classify_status(*status, body, url, detail)
        }
        other => FailureReport::new(
            ErrorCategory::Unknown,
            "Unexpected error while talking to the pricing service",
            other.to_string(),
        ),
    }
}

fn classify_transport(error: &reqwest::Error) -> FailureReport {
    if has_connection_refused_source(error) {
        return FailureReport::new(
            ErrorCategory::ConnectionRefused,
            "Connection refused - the pricing service is not accepting connections",
            error.to_string(),
        );
    }
    if error.is_timeout() {
        return FailureReport::new(
            ErrorCategory::Timeout,
            "Request timed out - the pricing service took too long to respond",
            error.to_string(),
        );
    }
    if error.is_connect() || error.is_request() {
        return FailureReport::new(
            ErrorCategory::NetworkUnreachable,
            "Network error - could not reach the pricing service",
            error.to_string(),
        );
    }
    FailureReport::new(
        ErrorCategory::Unknown,
        "Unexpected error while talking to the pricing service",
        error.to_string(),
    )
}

fn classify_status(status: u16, body: &str, url: &str, detail: String) -> FailureReport {
    if status == 404 {
        return FailureReport::new(
            ErrorCategory::NotFound,
            format!("Endpoint not found on the pricing service: {}", url),
            detail,
        );
    }
    if status >= 500 {
        return FailureReport::new(
            ErrorCategory::ServerError,
            format!("Pricing service reported an internal error (status {})", status),
            detail,
        );
    }
    if let Some(app_error) = extract_application_error(body) {
        return FailureReport::new(
            ErrorCategory::ApplicationError,
            format!("Pricing service rejected the request: {}", app_error),
            detail,
        );
    }
    FailureReport::new(
        ErrorCategory::Unknown,
        "Unexpected error while talking to the pricing service",
        detail,
    )
}

/// Walk the source chain looking for a refused TCP connection
fn has_connection_refused_source(error: &reqwest::Error) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if io_error.kind() == io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Extract the application-supplied error field from a JSON body
fn extract_application_error(body: &str) -> Option<String> {
    let json_value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    if let Some(message) = json_value.get("error").and_then(|v| v.as_str()) {
        return Some(message.to_string());
    }
    json_value
        .get("message")
        .and_then(|v| v.as_str())
        .map(|m| m.to_string())
}
