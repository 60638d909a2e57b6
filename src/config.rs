/*!
# Analyzer Configuration

Configuration structures and loading for the complexity analyzer.
Supports TOML and YAML files; the format is picked from the file extension.

```toml
[analysis]
max_depth = 128

[output]
format = "json"
pretty = true
use_colors = true

[batch]
extensions = ["json"]
recursive = true
# threads = 4
```
*/

use crate::parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use crate::reports::ReportFormat;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Tree analysis settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Maximum nesting accepted when reading an AST document, at most 128
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: ReportFormat,

    /// Indented JSON
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Whether to use colors in text output
    #[serde(default = "default_true")]
    pub use_colors: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            pretty: true,
            use_colors: true,
        }
    }
}

/// Directory analysis settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSettings {
    /// File extensions picked up when walking a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into subdirectories
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Parallel processing threads
    pub threads: Option<usize>,
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            recursive: true,
            threads: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Complete analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub batch: BatchSettings,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML or YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read analyzer config from {}", path.display()))?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config from {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config from {}", path.display()))?
        };

        for warning in config.validate()? {
            tracing::warn!("{}: {}", path.display(), warning);
        }
        Ok(config)
    }

    /// Loads the given file, or falls back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(&path, content).with_context(|| {
            format!(
                "Failed to write analyzer config to {}",
                path.as_ref().display()
            )
        })?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize analyzer config to TOML")
    }

    /// Validate configuration; hard errors fail, soft problems come back as warnings
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        if self.analysis.max_depth == 0 {
            bail!("analysis.max_depth must be greater than zero");
        }
        if self.analysis.max_depth > MAX_DEPTH_LIMIT {
            bail!(
                "analysis.max_depth = {} exceeds the supported limit of {}",
                self.analysis.max_depth,
                MAX_DEPTH_LIMIT
            );
        }

        if self.batch.threads == Some(0) {
            bail!("batch.threads must be greater than zero");
        }
        if self.batch.extensions.is_empty() {
            warnings.push("batch.extensions is empty; directories will yield no files".to_string());
        }
        for extension in &self.batch.extensions {
            if extension.starts_with('.') {
                warnings.push(format!(
                    "batch.extensions entry '{}' should not start with a dot",
                    extension
                ));
            }
        }

        Ok(warnings)
    }

    /// Checks a file name against `batch.extensions`
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.batch
                    .extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
