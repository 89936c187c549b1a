//! Output formatting for evaluation reports

use console::style;
use serde::{Deserialize, Serialize};
use synthio_engine::history::HistoryEntry;

use crate::error::CliResult;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// One key press and what the watch showed afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The key as typed
    pub key: String,
    /// Display after the press
    pub display: String,
}

/// Result of pressing a sequence of keys
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalReport {
    /// Final display
    pub display: String,
    /// Per-key displays, empty unless requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<Step>,
    /// Evaluations performed, oldest first
    pub history: Vec<HistoryEntry>,
}

impl EvalReport {
    /// Renders the report in the requested format
    pub fn render(&self, format: OutputFormat, use_color: bool) -> CliResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(use_color)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// `key -> display` lines (when steps were recorded), then the display
    #[must_use]
    pub fn render_text(&self, use_color: bool) -> String {
        let mut out = String::new();
        for step in &self.steps {
            out.push_str(&format!("{} -> {}\n", step.key, step.display));
        }
        out.push_str(&render_display(&self.display, use_color));
        out
    }
}

/// The display as printed, bold when colors are on
#[must_use]
pub fn render_display(display: &str, use_color: bool) -> String {
    if use_color {
        style(display).bold().force_styling(true).to_string()
    } else {
        display.to_string()
    }
}
