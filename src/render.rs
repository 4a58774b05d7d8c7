//! Receipt rendering for the console.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Receipt;

/// How receipts are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Render a receipt in the requested format
pub fn render(receipt: &Receipt, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(receipt)),
        OutputFormat::Json => render_json(receipt),
    }
}

/// Four summary lines: items, missing titles, download estimate, total
pub fn render_text(receipt: &Receipt) -> String {
    let items = receipt.item_titles().join(", ");
    let missing = receipt.missing.join(", ");

    format!(
        "Items: {}\nMissing: {}\nEstimated download: {:.2} s ({:.2} min)\nTotal: ${:.2}\n",
        if items.is_empty() { "-" } else { items.as_str() },
        if missing.is_empty() { "None" } else { missing.as_str() },
        receipt.estimated_seconds,
        receipt.estimated_minutes(),
        receipt.total_price
    )
}

/// Pretty JSON; an infinite estimate serializes as `null`
pub fn render_json(receipt: &Receipt) -> Result<String> {
    serde_json::to_string_pretty(receipt).context("Failed to serialize receipt")
}
