/*!
# Batch Analysis

Analyzes every AST document under a directory. Files are collected with
`walkdir`, filtered by `batch.extensions`, and analyzed in parallel; each file
gets its own independent evaluation, so one failure never affects the others.
*/

use crate::analyzer::ComplexityAnalyzer;
use crate::config::AnalyzerConfig;
use crate::core::{AnalysisError, AnalysisReport, ErrorReport};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Analyzed(AnalysisReport),
    Failed(ErrorReport),
}

/// One analyzed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: FileOutcome,
}

impl FileReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.result, FileOutcome::Failed(_))
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.result {
            FileOutcome::Analyzed(report) => Some(report),
            FileOutcome::Failed(_) => None,
        }
    }
}

/// Totals over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_files: usize,
    pub analyzed: usize,
    pub failed: usize,
    /// Number of files per worst-case class
    pub by_worst_case: BTreeMap<String, usize>,
}

/// Results for a whole directory, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(mut files: Vec<FileReport>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut summary = BatchSummary {
            total_files: files.len(),
            ..BatchSummary::default()
        };
        for file in &files {
            match file.report() {
                Some(report) => {
                    summary.analyzed += 1;
                    *summary
                        .by_worst_case
                        .entry(report.worst_class().to_string())
                        .or_insert(0) += 1;
                }
                None => summary.failed += 1,
            }
        }

        Self { files, summary }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Reads and analyzes one AST JSON file
pub fn analyze_file(analyzer: &ComplexityAnalyzer, path: &Path) -> Result<AnalysisReport, AnalysisError> {
    let text = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    analyzer.analyze_source(&text)
}

/// Directory analyzer
#[derive(Debug, Clone, Default)]
pub struct BatchAnalyzer {
    analyzer: ComplexityAnalyzer,
    config: AnalyzerConfig,
}

impl BatchAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: ComplexityAnalyzer::with_config(&config),
            config,
        }
    }

    /// Files to analyze below `root`; a file path is returned as is
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let walker = if self.config.batch.recursive {
            WalkDir::new(root)
        } else {
            WalkDir::new(root).max_depth(1)
        };

        let mut files = Vec::new();
        for entry in walker {
            let entry =
                entry.with_context(|| format!("Failed to walk directory {}", root.display()))?;
            if entry.file_type().is_file() && self.config.accepts_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Analyzes a file or every matching file under a directory
    pub fn analyze_path(&self, root: &Path) -> Result<BatchReport> {
        let files = self.collect_files(root)?;
        if files.is_empty() {
            tracing::warn!("No files to analyze under {}", root.display());
        } else {
            tracing::info!("Analyzing {} file(s) under {}", files.len(), root.display());
        }
        self.analyze_files(files)
    }

    pub fn analyze_files(&self, files: Vec<PathBuf>) -> Result<BatchReport> {
        let run = || -> Vec<FileReport> {
            files
                .into_par_iter()
                .map(|path| self.analyze_one(path))
                .collect()
        };

        let reports = match self.config.batch.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to configure thread pool")?
                .install(run),
            None => run(),
        };

        let batch = BatchReport::new(reports);
        tracing::info!(
            "Batch analysis completed: {} analyzed, {} failed",
            batch.summary.analyzed,
            batch.summary.failed
        );
        Ok(batch)
    }

    fn analyze_one(&self, path: PathBuf) -> FileReport {
        let result = match analyze_file(&self.analyzer, &path) {
            Ok(report) => FileOutcome::Analyzed(report),
            Err(err) => {
                tracing::warn!("{}: {}", path.display(), err);
                FileOutcome::Failed(err.to_report())
            }
        };
        FileReport { path, result }
    }
}
