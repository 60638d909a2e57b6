/*!
# AST Reader

Converts the JSON document emitted by the pseudocode parser into [`Node`]s.

The reader is lenient: missing optional fields become `None`, unknown kinds
become [`Node::Other`] and non-object values become [`Node::Opaque`]. It only
rejects shapes it cannot interpret at all (a non-string `type` tag, a `body`
that is a scalar, nesting beyond the configured limit).
*/

use super::ast::{Index, Node};
use crate::core::AnalysisError;
use serde_json::{Map, Value};

/// Deepest nesting accepted, in JSON containers. Equal to the nesting limit
/// `serde_json` applies when parsing text, and shallow enough for the
/// recursive reader and evaluator to fit in a 2 MiB thread stack.
pub const MAX_DEPTH_LIMIT: usize = 128;

/// Default nesting limit for AST documents
pub const DEFAULT_MAX_DEPTH: usize = MAX_DEPTH_LIMIT;

type Object = Map<String, Value>;
type ReadResult<T> = Result<T, AnalysisError>;

/// Reader for parser-produced AST documents
#[derive(Debug, Clone)]
pub struct AstReader {
    max_depth: usize,
}

impl AstReader {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Lowers the nesting limit; values above [`MAX_DEPTH_LIMIT`] are clamped
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Parses JSON text and converts it into a tree
    pub fn read_str(&self, text: &str) -> ReadResult<Node> {
        let value: Value = serde_json::from_str(text.trim_start_matches('\u{FEFF}'))
            .map_err(|err| {
                // well-formed but too deeply nested for the JSON parser
                if err.to_string().starts_with("recursion limit exceeded") {
                    AnalysisError::malformed(
                        "/",
                        format!("nesting deeper than {} levels", MAX_DEPTH_LIMIT),
                    )
                } else {
                    AnalysisError::from(err)
                }
            })?;
        self.read_value(&value)
    }

    /// Converts an already decoded JSON value into a tree
    pub fn read_value(&self, value: &Value) -> ReadResult<Node> {
        self.node(value, "", 0)
    }

    fn node(&self, value: &Value, path: &str, depth: usize) -> ReadResult<Node> {
        if depth > self.max_depth {
            return Err(AnalysisError::malformed(
                path_or_root(path),
                format!("nesting deeper than {} levels", self.max_depth),
            ));
        }

        match value {
            Value::Object(object) => self.object(object, path, depth),
            Value::Array(items) => Ok(Node::Other {
                kind: "list".to_string(),
                children: self.list(items, path, depth)?,
            }),
            _ => Ok(Node::Opaque),
        }
    }

    fn object(&self, object: &Object, path: &str, depth: usize) -> ReadResult<Node> {
        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            None | Some(Value::Null) => return self.other("", object, path, depth),
            Some(_) => {
                return Err(AnalysisError::malformed(
                    path_or_root(path),
                    "`type` must be a string",
                ))
            }
        };

        let node = match kind {
            "program" => Node::Program {
                body: self.body_list(object, path, depth)?,
            },
            "block" => Node::Block {
                body: self.body_list(object, path, depth)?,
            },
            "for" => Node::For {
                var: name_of(object.get("var")),
                start: self.field(object, "start", path, depth)?,
                end: self.field(object, "end", path, depth)?,
                body: self.field(object, "body", path, depth)?,
            },
            "while" => Node::While {
                condition: self.field(object, "condition", path, depth)?,
                body: self.field(object, "body", path, depth)?,
            },
            "repeat" => Node::Repeat {
                body: self.field(object, "body", path, depth)?,
                condition: self.field(object, "condition", path, depth)?,
            },
            "if" => Node::If {
                condition: self.field(object, "condition", path, depth)?,
                then_branch: self.field(object, "then", path, depth)?,
                else_branch: self.field(object, "else", path, depth)?,
            },
            "assignment" => Node::Assignment {
                target: match object.get("var").or_else(|| object.get("target")) {
                    Some(Value::String(name)) => Some(Box::new(Node::Var {
                        name: name.clone(),
                        field: None,
                        access: Vec::new(),
                    })),
                    _ => self.first_field(object, &["var", "target"], path, depth)?,
                },
                value: self.first_field(object, &["expr", "value"], path, depth)?,
            },
            "return" => Node::Return {
                value: self.field(object, "value", path, depth)?,
            },
            "break" => Node::Break,
            "continue" => Node::Continue,
            "call" => Node::Call {
                name: name_of(object.get("name")),
                args: self.field_list(object, "args", path, depth)?,
            },
            "subroutine_decl" | "subroutine" => Node::SubroutineDecl {
                name: name_of(object.get("name")),
                params: self.field_list(object, "params", path, depth)?,
                body: self.field(object, "body", path, depth)?,
            },
            "array_decl" => Node::ArrayDecl {
                name: name_of(object.get("name")),
                size: self.field(object, "size", path, depth)?,
            },
            "graph_class" => Node::GraphClass {
                name: name_of(object.get("name")),
                attrs: match object.get("attrs") {
                    Some(Value::Array(attrs)) => attrs.iter().map(|a| name_of(Some(a))).collect(),
                    _ => Vec::new(),
                },
            },
            "graph_instance" => Node::GraphInstance {
                name: name_of(object.get("name")),
            },
            "var" => Node::Var {
                name: name_of(object.get("name")),
                field: object.get("field").filter(|v| !v.is_null()).map(|v| name_of(Some(v))),
                access: self.access_list(object.get("access"), path, depth)?,
            },
            "array_access" if object.contains_key("array") => Node::Var {
                name: name_of(object.get("array")),
                field: None,
                access: match object.get("index") {
                    Some(index) if !index.is_null() => {
                        vec![self.index(index, &join(path, "index"), depth + 1)?]
                    }
                    _ => Vec::new(),
                },
            },
            "field_access" => Node::Var {
                name: name_of(object.get("object")),
                field: Some(name_of(object.get("field"))),
                access: Vec::new(),
            },
            "binop" | "comparison" => Node::BinOp {
                op: op_of(object.get("op")),
                left: self.field(object, "left", path, depth)?,
                right: self.field(object, "right", path, depth)?,
            },
            "and" | "or" => Node::BinOp {
                op: kind.to_string(),
                left: self.field(object, "left", path, depth)?,
                right: self.field(object, "right", path, depth)?,
            },
            "not" => Node::UnaryOp {
                op: "not".to_string(),
                operand: self.field(object, "expr", path, depth)?,
            },
            "unop" | "unary" => Node::UnaryOp {
                op: op_of(object.get("op")),
                operand: self.first_field(object, &["operand", "expr"], path, depth)?,
            },
            "number" => Node::Number(scalar_text(object.get("value"))),
            "string" => Node::Str(scalar_text(object.get("value"))),
            "boolean" => Node::Boolean(is_truthy(object.get("value"))),
            "null" => Node::Null,
            "name" => Node::Name(scalar_text(object.get("value"))),
            other => return self.other(other, object, path, depth),
        };
        Ok(node)
    }

    /// Unknown kinds keep every nested node so that later searches can see them
    fn other(&self, kind: &str, object: &Object, path: &str, depth: usize) -> ReadResult<Node> {
        let mut children = Vec::new();
        for (key, value) in object {
            if key == "type" || !(value.is_object() || value.is_array()) {
                continue;
            }
            children.push(self.node(value, &join(path, key), depth + 1)?);
        }
        Ok(Node::Other {
            kind: kind.to_string(),
            children,
        })
    }

    fn field(
        &self,
        object: &Object,
        key: &str,
        path: &str,
        depth: usize,
    ) -> ReadResult<Option<Box<Node>>> {
        match object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(Box::new(self.node(value, &join(path, key), depth + 1)?))),
        }
    }

    fn first_field(
        &self,
        object: &Object,
        keys: &[&str],
        path: &str,
        depth: usize,
    ) -> ReadResult<Option<Box<Node>>> {
        for key in keys {
            if let Some(node) = self.field(object, key, path, depth)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }

    /// `body` of a container: a list, a single node, or absent
    fn body_list(&self, object: &Object, path: &str, depth: usize) -> ReadResult<Vec<Node>> {
        let body_path = join(path, "body");
        match object.get("body") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => self.list(items, &body_path, depth + 1),
            Some(value @ Value::Object(_)) => Ok(vec![self.node(value, &body_path, depth + 1)?]),
            Some(_) => Err(AnalysisError::malformed(
                body_path,
                "`body` must be a list of statements",
            )),
        }
    }

    fn field_list(
        &self,
        object: &Object,
        key: &str,
        path: &str,
        depth: usize,
    ) -> ReadResult<Vec<Node>> {
        let list_path = join(path, key);
        match object.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => self.list(items, &list_path, depth + 1),
            Some(value) => Ok(vec![self.node(value, &list_path, depth + 1)?]),
        }
    }

    fn list(&self, items: &[Value], path: &str, depth: usize) -> ReadResult<Vec<Node>> {
        items
            .iter()
            .enumerate()
            // Statement wrappers that produced nothing show up as nulls
            .filter(|(_, item)| !item.is_null())
            .map(|(i, item)| self.node(item, &join(path, &i.to_string()), depth + 1))
            .collect()
    }

    fn access_list(
        &self,
        access: Option<&Value>,
        path: &str,
        depth: usize,
    ) -> ReadResult<Vec<Index>> {
        let access_path = join(path, "access");
        match access {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.is_null())
                .map(|(i, item)| self.index(item, &join(&access_path, &i.to_string()), depth + 2))
                .collect(),
            Some(value) if !value.is_null() => Ok(vec![self.index(value, &access_path, depth + 1)?]),
            _ => Ok(Vec::new()),
        }
    }

    /// Accepts `array_access` wrappers, bare `index`/`range` nodes and plain expressions
    fn index(&self, value: &Value, path: &str, depth: usize) -> ReadResult<Index> {
        let Some(object) = value.as_object() else {
            return Ok(Index::Single(Box::new(self.node(value, path, depth)?)));
        };

        match object.get("type").and_then(Value::as_str) {
            Some("array_access") => match object.get("index") {
                Some(inner) if !inner.is_null() => self.index(inner, &join(path, "index"), depth + 1),
                _ => Ok(Index::Single(Box::new(Node::Opaque))),
            },
            Some("range") => Ok(Index::Range {
                start: self.field(object, "start", path, depth)?,
                end: self.field(object, "end", path, depth)?,
            }),
            Some("index") => Ok(Index::Single(Box::new(
                self.field(object, "value", path, depth)?
                    .map(|node| *node)
                    .unwrap_or(Node::Opaque),
            ))),
            _ => Ok(Index::Single(Box::new(self.node(value, path, depth)?))),
        }
    }
}

impl Default for AstReader {
    fn default() -> Self {
        Self::new()
    }
}

fn join(path: &str, key: &str) -> String {
    format!("{}/{}", path, key)
}

fn path_or_root(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Identifier carried either as a bare string or as a `{value}`/`{name}` node
fn name_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Object(object)) => object
            .get("value")
            .or_else(|| object.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        Some(Value::Number(number)) => number.to_string(),
        _ => "unknown".to_string(),
    }
}

fn op_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(op)) => op.trim().to_string(),
        Some(other) => name_of(Some(other)),
        None => String::new(),
    }
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => matches!(text.as_str(), "T" | "true" | "True" | "TRUE"),
        _ => false,
    }
}
