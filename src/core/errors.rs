/*!
# Error System for Complexity Analyzer

Failures surface to callers as a structured record `{error, details}`.
Heuristic imprecision is never an error; only input that cannot be read as an
AST, or an AST whose shape the reader cannot accept, ends up here.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Caller-facing message for input that is not a valid AST document
pub const SYNTAX_ERROR: &str = "Error de sintaxis en el pseudocódigo.";

/// Caller-facing message for failures inside the analysis itself
pub const ANALYSIS_ERROR: &str = "Error al analizar complejidad.";

/// Caller-facing message for input that could not be read at all
pub const INPUT_ERROR: &str = "Error al leer la entrada.";

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Syntax,
    Analysis,
    Input,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "SYNTAX"),
            ErrorKind::Analysis => write!(f, "ANALYSIS"),
            ErrorKind::Input => write!(f, "INPUT"),
        }
    }
}

/// Analysis failure
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0}")]
    Syntax(String),

    #[error("malformed AST at {path}: {reason}")]
    MalformedAst { path: String, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedAst {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Syntax(_) => ErrorKind::Syntax,
            AnalysisError::MalformedAst { .. } => ErrorKind::Analysis,
            AnalysisError::Io { .. } => ErrorKind::Input,
        }
    }

    /// Converts the error into the record handed to callers
    pub fn to_report(&self) -> ErrorReport {
        let error = match self.kind() {
            ErrorKind::Syntax => SYNTAX_ERROR,
            ErrorKind::Analysis => ANALYSIS_ERROR,
            ErrorKind::Input => INPUT_ERROR,
        };
        ErrorReport {
            error: error.to_string(),
            details: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        AnalysisError::Syntax(error.to_string())
    }
}

/// Structured error record returned instead of an analysis report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub details: String,
}

impl From<AnalysisError> for ErrorReport {
    fn from(error: AnalysisError) -> Self {
        error.to_report()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.error, self.details)
    }
}
