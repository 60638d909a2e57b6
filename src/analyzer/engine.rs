/*!
# Analysis Engine

Walks the tree once, depth first, and folds a [`ComplexityResult`] per node
bottom-up. Every visitor returns its events along with its result, so the
analyzer itself holds no per-call state and can be shared between threads.
*/

use super::cost::{add, dominant, multiply, CostClass};
use super::recursion::{self, RecursionShape};
use super::result::ComplexityResult;
use super::trace::{Evaluation, Trace, TraceEvent};
use crate::config::AnalyzerConfig;
use crate::core::{AnalysisError, AnalysisReport};
use crate::parser::{AstReader, Index, LoopKind, Node};
use serde_json::Value;
use tracing::debug;

/// Complexity analyzer for parsed pseudocode
#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    reader: AstReader,
}

impl ComplexityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the `[analysis]` section of a configuration
    pub fn with_config(config: &AnalyzerConfig) -> Self {
        Self {
            reader: AstReader::new().with_max_depth(config.analysis.max_depth),
        }
    }

    /// Analyzes a whole program and formats its bounds
    pub fn analyze(&self, tree: &Node) -> AnalysisReport {
        let Evaluation { result, trace } = self.evaluate(tree);
        debug!(
            nodes = tree.node_count(),
            best = %result.best(),
            worst = %result.worst(),
            events = trace.events().len(),
            "analysis finished"
        );
        AnalysisReport::new(&result, trace.into_details())
    }

    /// Converts a decoded AST document and analyzes it
    pub fn analyze_value(&self, value: &Value) -> Result<AnalysisReport, AnalysisError> {
        let tree = self.reader.read_value(value)?;
        Ok(self.analyze(&tree))
    }

    /// Parses AST JSON text and analyzes it
    pub fn analyze_source(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let tree = self.reader.read_str(text)?;
        Ok(self.analyze(&tree))
    }

    /// Evaluates a single node together with everything below it
    pub fn evaluate(&self, node: &Node) -> Evaluation {
        match node {
            Node::Program { body } | Node::Block { body } => self.sequence(body),
            Node::For { body, .. } => self.repetition(LoopKind::For, body.as_deref()),
            Node::While { body, .. } => self.repetition(LoopKind::While, body.as_deref()),
            Node::Repeat { body, .. } => self.repetition(LoopKind::Repeat, body.as_deref()),
            Node::If {
                then_branch,
                else_branch,
                ..
            } => self.branch(then_branch.as_deref(), else_branch.as_deref()),
            Node::Return { .. } | Node::Break => Evaluation::leaf(ComplexityResult::terminal()),
            Node::SubroutineDecl { name, body, .. } => self.subroutine(name, body.as_deref()),
            Node::ArrayDecl { .. } => linear(),
            Node::BinOp { op, left, right } if is_concatenation(op, left, right) => linear(),
            Node::Var { access, .. } if access.iter().any(Index::is_range) => linear(),
            // an assignment costs what its right-hand side costs
            Node::Assignment {
                value: Some(value),
                ..
            } => self.evaluate(value),
            Node::Assignment { value: None, .. }
            | Node::Continue
            | Node::Call { .. }
            | Node::GraphClass { .. }
            | Node::GraphInstance { .. }
            | Node::Var { .. }
            | Node::BinOp { .. }
            | Node::UnaryOp { .. }
            | Node::Number(_)
            | Node::Str(_)
            | Node::Boolean(_)
            | Node::Null
            | Node::Name(_)
            | Node::Other { .. }
            | Node::Opaque => Evaluation::leaf(ComplexityResult::identity()),
        }
    }

    /// Statements run one after another: the costliest one dominates
    fn sequence(&self, statements: &[Node]) -> Evaluation {
        let mut trace = Trace::new();
        let mut best = CostClass::Constant;
        let mut worst = CostClass::Constant;
        let mut has_early_exit = false;

        for statement in statements {
            let result = trace.absorb(self.evaluate(statement));
            best = add(&best, result.best());
            worst = add(&worst, result.worst());
            has_early_exit |= result.has_early_exit();
        }

        trace.push(TraceEvent::Sequence);
        let result = ComplexityResult::bounded(best, worst).with_early_exit(has_early_exit);
        Evaluation::new(result, trace)
    }

    /// `n` iterations of the body; an exit inside the body allows a single one
    fn repetition(&self, kind: LoopKind, body: Option<&Node>) -> Evaluation {
        let mut trace = Trace::new();
        let body = match body {
            Some(body) => trace.absorb(self.evaluate(body)),
            None => ComplexityResult::identity(),
        };

        let worst = multiply(&CostClass::Linear, body.worst());
        let early_exit = body.has_early_exit();
        debug!(%kind, early_exit, worst = %worst, "loop");

        trace.push(TraceEvent::Loop { kind, early_exit });
        let result = if early_exit {
            trace.push(TraceEvent::EarlyExit);
            ComplexityResult::bounded(CostClass::Constant, worst).with_early_exit(true)
        } else {
            ComplexityResult::uniform(worst)
        };
        Evaluation::new(result, trace)
    }

    fn branch(&self, then_branch: Option<&Node>, else_branch: Option<&Node>) -> Evaluation {
        let mut trace = Trace::new();
        let then_result = match then_branch {
            Some(node) => trace.absorb(self.evaluate(node)),
            None => ComplexityResult::identity(),
        };

        let result = match else_branch {
            Some(node) => {
                let else_result = trace.absorb(self.evaluate(node));
                ComplexityResult::bounded(
                    dominant([then_result.best(), else_result.best()]),
                    dominant([then_result.worst(), else_result.worst()]),
                )
                .with_early_exit(then_result.has_early_exit() || else_result.has_early_exit())
            }
            // Without `else` the best case is the `then` branch alone; skipping
            // the branch is not counted as a cheaper path.
            None => then_result,
        };
        Evaluation::new(result, trace)
    }

    /// Evaluates the body, then replaces its result with the recurrence's class
    fn subroutine(&self, name: &str, body: Option<&Node>) -> Evaluation {
        let Some(body) = body else {
            return Evaluation::leaf(ComplexityResult::identity());
        };

        let mut trace = Trace::new();
        let body_result = trace.absorb(self.evaluate(body));
        let shape = recursion::classify(name, body);
        debug!(subroutine = name, recurrence = %shape, "classified subroutine");

        let result = match shape {
            RecursionShape::NotRecursive => return Evaluation::new(body_result, trace),
            RecursionShape::DivideSearch => ComplexityResult::uniform(CostClass::Logarithmic),
            RecursionShape::Exponential { .. } => ComplexityResult::uniform(CostClass::Exponential),
            RecursionShape::Linear { early_exit: true } => {
                ComplexityResult::bounded(CostClass::Constant, CostClass::Linear)
            }
            RecursionShape::Linear { early_exit: false } => {
                ComplexityResult::uniform(CostClass::Linear)
            }
        };

        trace.push(TraceEvent::Recursion(shape));
        if shape == (RecursionShape::Linear { early_exit: true }) {
            trace.push(TraceEvent::EarlyExit);
        }
        Evaluation::new(result, trace)
    }
}

fn linear() -> Evaluation {
    Evaluation::leaf(ComplexityResult::uniform(CostClass::Linear))
}

/// `+` with a string literal on either side
fn is_concatenation(op: &str, left: &Option<Box<Node>>, right: &Option<Box<Node>>) -> bool {
    op == "+"
        && [left, right]
            .iter()
            .any(|operand| operand.as_deref().map_or(false, Node::is_string_literal))
}
