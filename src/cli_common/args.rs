//! Common command-line arguments

use crate::config::AnalyzerConfig;
use crate::reports::ReportFormat;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Configuration file selection
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads the selected file, or the defaults when none is given
    pub fn load(&self) -> Result<AnalyzerConfig> {
        AnalyzerConfig::load_or_default(self.config.as_deref())
    }
}

/// Report output arguments
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (json, text)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Disable colors in text output
    #[arg(long)]
    pub no_color: bool,
}

impl OutputArgs {
    /// Command-line flags override the `[output]` section
    pub fn apply(&self, config: &mut AnalyzerConfig) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.pretty {
            config.output.pretty = true;
        }
        if self.no_color || self.output.is_some() {
            config.output.use_colors = false;
        }
    }
}
