/*!
# Complexity Analyzer v1.0

Asymptotic time-complexity inference for a small pseudocode language.
Given the AST produced by the pseudocode parser, the analyzer reports the
best case (Ω), the worst case (O) and, when both coincide, the tight bound (Θ),
together with an explanation of how they were obtained.

## Core Features

- **Cost-class algebra** over `1, log n, n, n log n, n^2, n^3, 2^n`
- **Structural rules** for sequences, loops, branches and subroutines
- **Early-exit detection** for `return`/`break` inside loops
- **Recursion classification**: linear, divide-and-search, exponential
- **Parallel batch analysis** of directories of AST documents
- **CLI interface** with JSON and text reports

## Architecture

```text
Complexity Analyzer
├── Parser     - AST node types, lenient JSON reader
├── Core       - Error records, analysis report
├── Analyzer   - Cost algebra, recursion classifier, engine, trace
├── Config     - TOML/YAML configuration
├── Reports    - JSON and text rendering
├── Batch      - Directory walking, parallel analysis
└── CLI common - Logging, console output
```

## Usage

```rust
use complexity_analyzer::analyze_source;

let ast = r#"{
    "type": "program",
    "body": [{
        "type": "for",
        "var": "i",
        "start": {"type": "number", "value": "1"},
        "end": {"type": "var", "name": "n"},
        "body": {"type": "block", "body": []}
    }]
}"#;

let report = analyze_source(ast).unwrap();
assert_eq!(report.big_o, "O(n)");
assert_eq!(report.omega, "Ω(n)");
assert_eq!(report.theta, "Θ(n)");
assert_eq!(report.details.loops, vec!["Ciclo FOR → O(n)"]);
```
*/

pub mod analyzer;
pub mod batch;
pub mod cli_common;
pub mod config;
pub mod core;
pub mod parser;
pub mod reports;

// Re-export main types for convenience
pub use analyzer::{ComplexityAnalyzer, ComplexityResult, CostClass, RecursionShape};
pub use batch::{BatchAnalyzer, BatchReport, FileOutcome, FileReport};
pub use config::AnalyzerConfig;
pub use core::{AnalysisError, AnalysisReport, ComplexityDetails, ErrorReport};
pub use parser::{AstReader, Node};
pub use reports::{ReportFormat, ReportManager, TextReporter};

use std::path::Path;

/// Analyzes AST JSON text; failures come back as the caller-facing error record
pub fn analyze_source(text: &str) -> Result<AnalysisReport, ErrorReport> {
    ComplexityAnalyzer::new()
        .analyze_source(text)
        .map_err(|err| err.to_report())
}

/// Reads and analyzes a single AST JSON file
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<AnalysisReport, AnalysisError> {
    batch::analyze_file(&ComplexityAnalyzer::new(), path.as_ref())
}
