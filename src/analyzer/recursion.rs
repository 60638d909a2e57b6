/*!
# Recursion classification

Decides which recurrence a subroutine follows by looking at its
self-calls only (calls whose target is the subroutine's own name):

| Shape | Recurrence | Class |
|---|---|---|
| exponential | `T(n) = kT(n-1) + cost` | `2^n` |
| divide-search | `T(n) = T(n/2) + cost` | `log n` |
| linear | `T(n) = T(n-1) + cost` | `n` |

Rows are tried top to bottom. Two or more self-calls that can run in the
same invocation are exponential even when they halve their argument.

Halving is recognized structurally: an argument of a self-call must reach a
`/ 2` or `div 2` operation, either directly or through a variable assigned in
the subroutine body. Mutual recursion between different subroutines is not
tracked.
*/

use crate::parser::Node;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Recurrence shape of a subroutine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionShape {
    NotRecursive,
    /// `calls` calls that can all run in one invocation; `2^n` for any count
    Exponential { calls: usize },
    /// One halving call per invocation
    DivideSearch,
    /// One call per invocation; `early_exit` when a guard can return without recursing
    Linear { early_exit: bool },
}

impl fmt::Display for RecursionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecursionShape::NotRecursive => write!(f, "sin recursión"),
            RecursionShape::DivideSearch => write!(f, "T(n) = T(n/2) + cost"),
            RecursionShape::Exponential { calls } => {
                write!(f, "T(n) = {}T(n-1) + cost (exponencial)", calls)
            }
            RecursionShape::Linear { .. } => write!(f, "T(n) = T(n-1) + cost"),
        }
    }
}

/// Classifies the subroutine `name` with the given body
pub fn classify(name: &str, body: &Node) -> RecursionShape {
    let calls = self_calls(name, body);
    if calls.is_empty() {
        return RecursionShape::NotRecursive;
    }

    let exclusive = has_exclusive_calls(name, body);
    if calls.len() >= 2 && !exclusive {
        return RecursionShape::Exponential { calls: calls.len() };
    }

    let bindings = Bindings::collect(body);
    if calls
        .iter()
        .any(|args| args.iter().any(|arg| bindings.halves(arg)))
    {
        return RecursionShape::DivideSearch;
    }

    RecursionShape::Linear {
        early_exit: has_early_return(name, body),
    }
}

/// Argument lists of every call to `name` inside `body`
pub fn self_calls<'a>(name: &str, body: &'a Node) -> Vec<&'a [Node]> {
    let mut calls = Vec::new();
    body.walk(&mut |node| {
        if let Node::Call { name: callee, args } = node {
            if callee == name {
                calls.push(args.as_slice());
            }
        }
    });
    calls
}

/// Some `if` has a self-call in both its `then` and its `else` arm
pub fn has_exclusive_calls(name: &str, body: &Node) -> bool {
    body.contains(&|node: &Node| match node {
        Node::If {
            then_branch: Some(then_branch),
            else_branch: Some(else_branch),
            ..
        } => !self_calls(name, then_branch).is_empty() && !self_calls(name, else_branch).is_empty(),
        _ => false,
    })
}

/// Looks at the top-level statements for an `if` without `else` that returns.
/// Followed later by a self-call it is the base case; otherwise it is an
/// early exit that can skip the recursion entirely.
pub fn has_early_return(name: &str, body: &Node) -> bool {
    let statements = body.statements();
    statements.iter().enumerate().any(|(i, statement)| {
        is_guarded_return(statement) && !statements[i + 1..].iter().any(|later| later.calls(name))
    })
}

fn is_guarded_return(statement: &Node) -> bool {
    match statement {
        Node::If {
            then_branch: Some(then_branch),
            else_branch: None,
            ..
        } => then_branch.contains(&|node: &Node| matches!(node, Node::Return { .. })),
        _ => false,
    }
}

/// Right operand of a halving division
fn is_two(node: &Node) -> bool {
    node.as_number() == Some(2.0)
}

/// Values assigned to plain variables anywhere in a subroutine body
struct Bindings<'a> {
    values: HashMap<&'a str, Vec<&'a Node>>,
}

impl<'a> Bindings<'a> {
    fn collect(body: &'a Node) -> Self {
        let mut values: HashMap<&'a str, Vec<&'a Node>> = HashMap::new();
        body.walk(&mut |node| {
            if let Node::Assignment {
                target: Some(target),
                value: Some(value),
            } = node
            {
                if let Some(name) = target.plain_variable() {
                    values.entry(name).or_default().push(value);
                }
            }
        });
        Self { values }
    }

    fn halves(&self, expr: &'a Node) -> bool {
        self.halves_guarded(expr, &mut HashSet::new())
    }

    fn halves_guarded(&self, expr: &'a Node, visiting: &mut HashSet<&'a str>) -> bool {
        if let Node::BinOp {
            op,
            right: Some(right),
            ..
        } = expr
        {
            if (op == "/" || op == "div") && is_two(right) {
                return true;
            }
        }

        if let Some(name) = expr.plain_variable() {
            // visiting guards against `x := x div 3`-style self references
            if visiting.insert(name) {
                let bound = self.values.get(name).map(Vec::as_slice).unwrap_or_default();
                if bound.iter().any(|value| self.halves_guarded(value, visiting)) {
                    return true;
                }
            }
        }

        expr.children()
            .into_iter()
            .any(|child| self.halves_guarded(child, visiting))
    }
}
