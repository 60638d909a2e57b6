/*!
# Core Module

Error handling and result records shared by the analyzer, reports and CLI.
*/

pub mod errors;
pub mod results;

pub use errors::{AnalysisError, ErrorKind, ErrorReport};
pub use results::{AnalysisReport, ComplexityDetails, NO_TIGHT_BOUND};
