//! JSON renderer for structured output

use super::SnapshotRenderer;
use crate::coordinator::DashboardSnapshot;

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRenderer for JsonRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> String {
        if self.pretty {
            serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(snapshot).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
