/*!
# Complexity Analyzer Module

Cost-class algebra, per-node results, recursion classification and the
tree-walking engine that ties them together.
*/

pub mod cost;
pub mod engine;
pub mod recursion;
pub mod result;
pub mod trace;

pub use cost::{add, dominant, multiply, CostClass, LATTICE};
pub use engine::ComplexityAnalyzer;
pub use recursion::RecursionShape;
pub use result::ComplexityResult;
pub use trace::{Evaluation, Trace, TraceEvent, SEQUENTIAL_COMBINATION};
