/*!
# Text Reporter

Console text reports for the complexity analyzer.

## Features:
- Colored console output (ANSI)
- Per-file lines and summary for directory analysis
- CI/CD friendly plain mode (no colors)

## Usage:

```rust
use complexity_analyzer::analyzer::ComplexityAnalyzer;
use complexity_analyzer::reports::text::TextReporter;

let report = ComplexityAnalyzer::new().analyze_source(r#"{"type": "program", "body": []}"#)?;
let text = TextReporter::plain().render_report(&report);
assert!(text.contains("O(1)"));
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::analyzer::CostClass;
use crate::batch::{BatchReport, FileOutcome};
use crate::core::{AnalysisReport, ErrorReport};

/// Text reporter for console output
#[derive(Debug, Clone)]
pub struct TextReporter {
    use_colors: bool,
}

/// ANSI color codes
struct Colors;

impl Colors {
    const RESET: &'static str = "\x1b[0m";
    const BOLD: &'static str = "\x1b[1m";
    const RED: &'static str = "\x1b[31m";
    const YELLOW: &'static str = "\x1b[33m";
    const GREEN: &'static str = "\x1b[32m";
    const CYAN: &'static str = "\x1b[36m";
    const GRAY: &'static str = "\x1b[90m";
}

impl TextReporter {
    /// Colors follow the terminal capabilities
    pub fn new() -> Self {
        Self {
            use_colors: Self::supports_colors(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Reporter without colors for CI/CD
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    fn supports_colors() -> bool {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if std::env::var_os("FORCE_COLOR").is_some() {
            return true;
        }

        !matches!(std::env::var("TERM").as_deref(), Ok("dumb") | Ok(""))
    }

    /// Report for one program
    pub fn render_report(&self, report: &AnalysisReport) -> String {
        let mut output = self.header("Complexity Analysis");

        output.push_str(&format!("  {}   {}\n", self.label("Worst case"), self.colorize(&report.big_o, Colors::RED)));
        output.push_str(&format!("  {}    {}\n", self.label("Best case"), self.colorize(&report.omega, Colors::GREEN)));
        let theta_color = if report.has_tight_bound() { Colors::CYAN } else { Colors::GRAY };
        output.push_str(&format!("  {} {}\n", self.label("Tight bound"), self.colorize(&report.theta, theta_color)));
        output.push('\n');

        let details = &report.details;
        if details.loops.is_empty() {
            output.push_str(&format!("{} none\n", self.label("Loops:")));
        } else {
            output.push_str(&format!("{}\n", self.label("Loops:")));
            for entry in &details.loops {
                output.push_str(&format!("  • {}\n", entry));
            }
        }

        let recursion = details.recursion.as_deref().unwrap_or("none");
        output.push_str(&format!("{} {}\n", self.label("Recursion:"), recursion));
        if !details.combination.is_empty() {
            output.push_str(&format!("{} {}\n", self.label("Combination:"), details.combination));
        }

        let early_exit = if details.early_exit_detected {
            self.colorize("yes", Colors::YELLOW)
        } else {
            "no".to_string()
        };
        output.push_str(&format!("{} {}\n", self.label("Early exit:"), early_exit));
        output
    }

    /// Failed analysis
    pub fn render_error(&self, error: &ErrorReport) -> String {
        let mut output = self.colorize(&format!("❌ {}\n", error.error), Colors::RED);
        if !error.details.is_empty() {
            output.push_str(&format!("   {}\n", self.colorize(&error.details, Colors::GRAY)));
        }
        output
    }

    /// One line per file followed by the totals
    pub fn render_batch(&self, batch: &BatchReport) -> String {
        let mut output = self.header("Complexity Analysis Report");

        for file in &batch.files {
            let path = file.path.display().to_string();
            match &file.result {
                FileOutcome::Analyzed(report) => output.push_str(&format!(
                    "  {}  {}  {}  {}\n",
                    self.colorize(&path, Colors::CYAN),
                    report.big_o,
                    report.omega,
                    report.theta
                )),
                FileOutcome::Failed(error) => output.push_str(&format!(
                    "  {}  {} {}\n",
                    self.colorize(&path, Colors::CYAN),
                    self.colorize(&error.error, Colors::RED),
                    self.colorize(&error.details, Colors::GRAY)
                )),
            }
        }
        if !batch.files.is_empty() {
            output.push('\n');
        }

        let summary = &batch.summary;
        output.push_str(&format!("{}\n", self.label("Summary:")));
        output.push_str(&format!("  Files analyzed: {}\n", summary.analyzed));
        let failed = summary.failed.to_string();
        let failed = if summary.failed > 0 {
            self.colorize(&failed, Colors::RED)
        } else {
            failed
        };
        output.push_str(&format!("  Failures: {}\n", failed));

        if !summary.by_worst_case.is_empty() {
            output.push_str("  By worst case:\n");
            let mut classes: Vec<(&String, &usize)> = summary.by_worst_case.iter().collect();
            // lattice order; unrecognized classes after every known one
            classes.sort_by_key(|(class, _)| {
                CostClass::from_name(class).map_or(usize::MAX, |known| known.rank())
            });
            for (class, count) in classes {
                output.push_str(&format!("    O({}): {}\n", class, count));
            }
        }
        output
    }

    fn header(&self, title: &str) -> String {
        let title = self.colorize(title, Colors::BOLD);
        let separator = self.colorize(&"=".repeat(50), Colors::GRAY);
        format!("{}\n{}\n\n", title, separator)
    }

    fn label(&self, text: &str) -> String {
        self.colorize(text, Colors::BOLD)
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, Colors::RESET)
        } else {
            text.to_string()
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}
