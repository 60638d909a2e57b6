/*!
# Abstract Syntax Tree (AST) for pseudocode

Defines the node types handed over by the pseudocode parser. The tree is
read-only for the analyzer: it is built once by [`AstReader`](super::AstReader)
and never mutated afterwards.
*/

use std::fmt;

/// Loop construct kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    For,
    While,
    Repeat,
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopKind::For => write!(f, "FOR"),
            LoopKind::While => write!(f, "WHILE"),
            LoopKind::Repeat => write!(f, "REPEAT"),
        }
    }
}

/// Index applied to a variable: `A[i]` or `A[i..j]`
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    Single(Box<Node>),
    Range {
        start: Option<Box<Node>>,
        end: Option<Box<Node>>,
    },
}

impl Index {
    pub fn is_range(&self) -> bool {
        matches!(self, Index::Range { .. })
    }
}

/// AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Containers
    Program {
        body: Vec<Node>,
    },
    Block {
        body: Vec<Node>,
    },

    // Loops
    For {
        var: String,
        start: Option<Box<Node>>,
        end: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
    While {
        condition: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
    Repeat {
        body: Option<Box<Node>>,
        condition: Option<Box<Node>>,
    },

    // Statements
    If {
        condition: Option<Box<Node>>,
        then_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
    },
    Assignment {
        target: Option<Box<Node>>,
        value: Option<Box<Node>>,
    },
    Return {
        value: Option<Box<Node>>,
    },
    Break,
    Continue,
    Call {
        name: String,
        args: Vec<Node>,
    },

    // Declarations
    SubroutineDecl {
        name: String,
        params: Vec<Node>,
        body: Option<Box<Node>>,
    },
    ArrayDecl {
        name: String,
        size: Option<Box<Node>>,
    },
    GraphClass {
        name: String,
        attrs: Vec<String>,
    },
    GraphInstance {
        name: String,
    },

    // Expressions
    Var {
        name: String,
        field: Option<String>,
        access: Vec<Index>,
    },
    BinOp {
        op: String,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    UnaryOp {
        op: String,
        operand: Option<Box<Node>>,
    },

    // Literals
    Number(String),
    Str(String),
    Boolean(bool),
    Null,
    Name(String),

    /// A tagged node of a kind the analyzer has no rule for. Children are kept
    /// so that call-site discovery still sees calls nested inside it.
    Other {
        kind: String,
        children: Vec<Node>,
    },

    /// A non-object value found where a node was expected
    Opaque,
}

impl Node {
    /// Kind tag as it appears in the parser's output
    pub fn kind(&self) -> &str {
        match self {
            Node::Program { .. } => "program",
            Node::Block { .. } => "block",
            Node::For { .. } => "for",
            Node::While { .. } => "while",
            Node::Repeat { .. } => "repeat",
            Node::If { .. } => "if",
            Node::Assignment { .. } => "assignment",
            Node::Return { .. } => "return",
            Node::Break => "break",
            Node::Continue => "continue",
            Node::Call { .. } => "call",
            Node::SubroutineDecl { .. } => "subroutine_decl",
            Node::ArrayDecl { .. } => "array_decl",
            Node::GraphClass { .. } => "graph_class",
            Node::GraphInstance { .. } => "graph_instance",
            Node::Var { .. } => "var",
            Node::BinOp { .. } => "binop",
            Node::UnaryOp { .. } => "unop",
            Node::Number(_) => "number",
            Node::Str(_) => "string",
            Node::Boolean(_) => "boolean",
            Node::Null => "null",
            Node::Name(_) => "name",
            Node::Other { kind, .. } => kind.as_str(),
            Node::Opaque => "opaque",
        }
    }

    /// Statements of a container node; any other node is a one-statement list
    pub fn statements(&self) -> &[Node] {
        match self {
            Node::Program { body } | Node::Block { body } => body,
            other => std::slice::from_ref(other),
        }
    }

    /// Direct child nodes in source order
    pub fn children(&self) -> Vec<&Node> {
        fn opt<'a>(out: &mut Vec<&'a Node>, node: &'a Option<Box<Node>>) {
            if let Some(node) = node {
                out.push(node);
            }
        }

        let mut out = Vec::new();
        match self {
            Node::Program { body } | Node::Block { body } => out.extend(body.iter()),
            Node::For {
                start, end, body, ..
            } => {
                opt(&mut out, start);
                opt(&mut out, end);
                opt(&mut out, body);
            }
            Node::While { condition, body } => {
                opt(&mut out, condition);
                opt(&mut out, body);
            }
            Node::Repeat { body, condition } => {
                opt(&mut out, body);
                opt(&mut out, condition);
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                opt(&mut out, condition);
                opt(&mut out, then_branch);
                opt(&mut out, else_branch);
            }
            Node::Assignment { target, value } => {
                opt(&mut out, target);
                opt(&mut out, value);
            }
            Node::Return { value } => opt(&mut out, value),
            Node::Call { args, .. } => out.extend(args.iter()),
            Node::SubroutineDecl { params, body, .. } => {
                out.extend(params.iter());
                opt(&mut out, body);
            }
            Node::ArrayDecl { size, .. } => opt(&mut out, size),
            Node::Var { access, .. } => {
                for index in access {
                    match index {
                        Index::Single(node) => out.push(node),
                        Index::Range { start, end } => {
                            opt(&mut out, start);
                            opt(&mut out, end);
                        }
                    }
                }
            }
            Node::BinOp { left, right, .. } => {
                opt(&mut out, left);
                opt(&mut out, right);
            }
            Node::UnaryOp { operand, .. } => opt(&mut out, operand),
            Node::Other { children, .. } => out.extend(children.iter()),
            Node::Break
            | Node::Continue
            | Node::GraphClass { .. }
            | Node::GraphInstance { .. }
            | Node::Number(_)
            | Node::Str(_)
            | Node::Boolean(_)
            | Node::Null
            | Node::Name(_)
            | Node::Opaque => {}
        }
        out
    }

    /// Pre-order traversal over this node and all of its descendants
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Checks whether this subtree contains a node matching the predicate
    pub fn contains(&self, predicate: &impl Fn(&Node) -> bool) -> bool {
        predicate(self) || self.children().into_iter().any(|c| c.contains(predicate))
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Checks for a call to `name` anywhere in this subtree
    pub fn calls(&self, name: &str) -> bool {
        self.contains(&|node: &Node| matches!(node, Node::Call { name: callee, .. } if callee == name))
    }

    /// Numeric literal value, if this is a number node
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Number(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Name of a plain variable reference (`x`, not `x[i]` or `x.f`)
    pub fn plain_variable(&self) -> Option<&str> {
        match self {
            Node::Var {
                name,
                field: None,
                access,
            } if access.is_empty() => Some(name),
            Node::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_string_literal(&self) -> bool {
        matches!(self, Node::Str(_))
    }
}
