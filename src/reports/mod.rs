/*!
# Reports Module

Rendering of analysis results for output.

## Supported formats:
- **JSON** - the structured record (`O`, `Omega`, `Theta`, `details`) for API integration
- **Text** - human-readable report for the console

## Usage:

```rust
use complexity_analyzer::analyzer::ComplexityAnalyzer;
use complexity_analyzer::reports::{ReportFormat, ReportManager};

let report = ComplexityAnalyzer::new().analyze_source(r#"{"type": "program", "body": []}"#)?;
let output = ReportManager::new().render_report(&report, ReportFormat::Json)?;
assert!(output.contains("\"O\": \"O(1)\""));
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod text;

pub use text::TextReporter;

use crate::batch::BatchReport;
use crate::config::OutputSettings;
use crate::core::{AnalysisReport, ErrorReport};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// JSON for API integration
    #[default]
    Json,
    /// Text report for the console
    Text,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            _ => Err(anyhow::anyhow!("Unknown report format: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Text => write!(f, "Text"),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
    /// Indented JSON
    pub pretty: bool,
    /// ANSI colors in text reports
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            pretty: true,
            use_colors: true,
        }
    }
}

impl From<&OutputSettings> for ReportConfig {
    fn from(settings: &OutputSettings) -> Self {
        Self {
            format: settings.format,
            pretty: settings.pretty,
            use_colors: settings.use_colors,
        }
    }
}

/// Renders reports in the configured formats
#[derive(Debug, Clone, Default)]
pub struct ReportManager {
    default_config: ReportConfig,
}

impl ReportManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            default_config: config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.default_config
    }

    fn text_reporter(&self) -> TextReporter {
        if self.default_config.use_colors {
            TextReporter::new()
        } else {
            TextReporter::plain()
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.default_config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize report to JSON")
    }

    /// Renders a single program's report
    pub fn render_report(&self, report: &AnalysisReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(report),
            ReportFormat::Text => Ok(self.text_reporter().render_report(report)),
        }
    }

    /// Renders a failed analysis
    pub fn render_error(&self, error: &ErrorReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(error),
            ReportFormat::Text => Ok(self.text_reporter().render_error(error)),
        }
    }

    /// Renders the results of a directory analysis
    pub fn render_batch(&self, batch: &BatchReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(batch),
            ReportFormat::Text => Ok(self.text_reporter().render_batch(batch)),
        }
    }
}
