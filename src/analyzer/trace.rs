/*!
# Explanation trace

Every visitor returns the events it observed together with its result; a
parent appends its children's events in traversal order before adding its own.
The final list folds into [`ComplexityDetails`].
*/

use super::recursion::RecursionShape;
use super::result::ComplexityResult;
use crate::core::ComplexityDetails;
use crate::parser::LoopKind;
use std::fmt;

/// Description recorded for sequence folding
pub const SEQUENTIAL_COMBINATION: &str = "Suma de complejidades secuenciales";

/// Something the analyzer observed while walking the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Loop { kind: LoopKind, early_exit: bool },
    Recursion(RecursionShape),
    Sequence,
    EarlyExit,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Loop {
                kind,
                early_exit: false,
            } => write!(f, "Ciclo {} → O(n)", kind),
            TraceEvent::Loop {
                kind,
                early_exit: true,
            } => write!(f, "Ciclo {} con salida temprana → Ω(1), O(n)", kind),
            TraceEvent::Recursion(shape) => write!(f, "{}", shape),
            TraceEvent::Sequence => write!(f, "{}", SEQUENTIAL_COMBINATION),
            TraceEvent::EarlyExit => write!(f, "salida temprana"),
        }
    }
}

/// Ordered list of trace events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, other: Trace) {
        self.events.extend(other.events);
    }

    /// Takes over a child's events and hands back its result
    pub fn absorb(&mut self, child: Evaluation) -> ComplexityResult {
        self.extend(child.trace);
        child.result
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_details(self) -> ComplexityDetails {
        let mut details = ComplexityDetails::default();
        for event in &self.events {
            match event {
                TraceEvent::Loop { .. } => details.loops.push(event.to_string()),
                // Later subroutines overwrite earlier ones
                TraceEvent::Recursion(shape) => details.recursion = Some(shape.to_string()),
                TraceEvent::Sequence => details.combination = SEQUENTIAL_COMBINATION.to_string(),
                TraceEvent::EarlyExit => details.early_exit_detected = true,
            }
        }
        details
    }
}

/// Result of visiting one node, with the events seen below it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub result: ComplexityResult,
    pub trace: Trace,
}

impl Evaluation {
    pub fn new(result: ComplexityResult, trace: Trace) -> Self {
        Self { result, trace }
    }

    /// Result without any events
    pub fn leaf(result: ComplexityResult) -> Self {
        Self::new(result, Trace::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_event_text() {
        let plain = TraceEvent::Loop {
            kind: LoopKind::For,
            early_exit: false,
        };
        let early = TraceEvent::Loop {
            kind: LoopKind::While,
            early_exit: true,
        };
        assert_eq!(plain.to_string(), "Ciclo FOR → O(n)");
        assert_eq!(early.to_string(), "Ciclo WHILE con salida temprana → Ω(1), O(n)");
    }

    #[test]
    fn test_empty_trace_details() {
        let details = Trace::new().into_details();
        assert!(details.loops.is_empty());
        assert_eq!(details.recursion, None);
        assert_eq!(details.combination, "");
        assert!(!details.early_exit_detected);
    }

    #[test]
    fn test_details_fold() {
        let mut trace = Trace::new();
        trace.push(TraceEvent::Loop {
            kind: LoopKind::Repeat,
            early_exit: false,
        });
        trace.push(TraceEvent::Recursion(RecursionShape::Linear { early_exit: false }));
        trace.push(TraceEvent::Recursion(RecursionShape::DivideSearch));
        trace.push(TraceEvent::Sequence);
        trace.push(TraceEvent::EarlyExit);

        let details = trace.into_details();
        assert_eq!(details.loops, vec!["Ciclo REPEAT → O(n)".to_string()]);
        assert_eq!(details.recursion.as_deref(), Some("T(n) = T(n/2) + cost"));
        assert_eq!(details.combination, SEQUENTIAL_COMBINATION);
        assert!(details.early_exit_detected);
    }
}
