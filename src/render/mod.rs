//! Snapshot renderers for different output formats
//!
//! This module renders settled dashboard snapshots for the terminal while
//! keeping the aggregation core free of presentation concerns.

use crate::coordinator::DashboardSnapshot;

/// Simple trait for rendering a snapshot in one output format
pub trait SnapshotRenderer {
    /// Render the snapshot to a printable string
    fn render(&self, snapshot: &DashboardSnapshot) -> String;
}

pub mod cli;
pub mod json;
pub mod table;

pub use cli::CliRenderer;
pub use json::JsonRenderer;
pub use table::TableBuilder;
