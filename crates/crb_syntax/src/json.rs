//! Load a syntax tree from the parser's JSON output.
//!
//! The parser emits an ESTree-shaped object tree: every node carries a `"type"` tag and kind-specific attributes
//! (`{"type": "Identifier", "name": "x"}`). This module turns that tree into [`Node`] values.
//!
//! ## Notes
//! - Unknown `"type"` tags are not a load error: they become [`Node::Unsupported`] so the emitter reports them.
//! - Missing or ill-typed attributes are reported here, with a JSON-pointer-like path to the offending node.
//! - `null` and other falsy entries (`false`, `0`, `""`) in `body` arrays are kept as empty slots.
//! - Numeric literals print the way the parser's runtime prints them: integral values have no fraction.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::ast::*;

/// Errors that occur while reading parser output
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node at {path} has no \"type\" tag")]
    MissingKind { path: String },

    #[error("malformed {kind} at {path}: {message}")]
    MalformedNode {
        kind: NodeKind,
        path: String,
        message: String,
    },
}

/// `{"name": ...}` wrapper the parser uses for identifiers and type references.
#[derive(Deserialize)]
struct NameRef {
    name: String,
}

#[derive(Deserialize)]
struct RawImportSource {
    std: bool,
    value: String,
}

#[derive(Deserialize)]
struct RawParam {
    name: NameRef,
    typing: NameRef,
}

/// Parse JSON text into a syntax tree.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn from_str(text: &str) -> Result<Node, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Convert an already-decoded JSON value into a syntax tree.
pub fn from_value(value: &Value) -> Result<Node, LoadError> {
    node(value, "")
}

fn node(value: &Value, path: &str) -> Result<Node, LoadError> {
    let Some(tag) = value.get("type").and_then(Value::as_str) else {
        return Err(LoadError::MissingKind {
            path: display_path(path),
        });
    };
    let Some(kind) = NodeKind::from_tag(tag) else {
        tracing::debug!(kind = tag, path = %display_path(path), "unsupported node kind in parser output");
        return Ok(Node::unsupported(tag));
    };

    let cx = Cx { kind, value, path };
    Ok(match kind {
        NodeKind::Program => Node::Program(Program { body: cx.body()? }),
        NodeKind::ImportDeclaration => {
            let source: RawImportSource = cx.field("source")?;
            Node::import(source.std, source.value)
        }
        NodeKind::FunctionDeclaration => {
            let name: NameRef = cx.field("id")?;
            let return_type: NameRef = cx.field("returnType")?;
            let params: Vec<RawParam> = cx.field("params")?;
            let body_path = format!("{}/body", path);
            let body = match node(cx.get("body")?, &body_path)? {
                Node::BlockStatement(block) => block,
                other => {
                    return Err(LoadError::MalformedNode {
                        kind,
                        path: display_path(path),
                        message: format!("body must be a BlockStatement, found {}", other.kind_name()),
                    });
                }
            };
            Node::FunctionDeclaration(FunctionDeclaration {
                name: name.name,
                return_type: TypeRef(return_type.name),
                params: params
                    .into_iter()
                    .map(|p| Param::new(p.name.name, p.typing.name))
                    .collect(),
                body,
            })
        }
        NodeKind::BlockStatement => Node::BlockStatement(BlockStatement { body: cx.body()? }),
        NodeKind::ReturnStatement => Node::ret(cx.child("argument")?),
        NodeKind::ExpressionStatement => Node::expr_stmt(cx.child("expression")?),
        NodeKind::VariableDeclaration => {
            let mutable: bool = cx.field("mutable")?;
            let name: NameRef = cx.field("id")?;
            let typing: NameRef = cx.field("typing")?;
            Node::var(mutable, name.name, typing.name, cx.child("value")?)
        }
        NodeKind::CallExpression => {
            let callee: NameRef = cx.field("callee")?;
            let arguments = cx
                .array("arguments")?
                .iter()
                .enumerate()
                .map(|(i, arg)| node(arg, &format!("{}/arguments/{}", path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            Node::call(callee.name, arguments)
        }
        NodeKind::BinaryExpression => {
            let operator: String = cx.field("op")?;
            Node::binary(cx.child("left")?, operator, cx.child("right")?)
        }
        NodeKind::Literal => match cx.get("value")? {
            Value::String(text) => Node::literal(text.as_str()),
            Value::Number(number) => Node::literal(number_text(number)),
            Value::Bool(flag) => Node::literal(flag.to_string()),
            _ => return Err(cx.malformed("value must be a string, number or boolean")),
        },
        NodeKind::Identifier => {
            let name: String = cx.field("name")?;
            Node::ident(name)
        }
    })
}

/// Per-node loading context: the node's kind, its JSON object and where it sits in the document.
struct Cx<'a> {
    kind: NodeKind,
    value: &'a Value,
    path: &'a str,
}

impl<'a> Cx<'a> {
    fn malformed(&self, message: impl Into<String>) -> LoadError {
        LoadError::MalformedNode {
            kind: self.kind,
            path: display_path(self.path),
            message: message.into(),
        }
    }

    fn get(&self, name: &str) -> Result<&'a Value, LoadError> {
        self.value
            .get(name)
            .ok_or_else(|| self.malformed(format!("missing field `{}`", name)))
    }

    fn field<T: Deserialize<'a>>(&self, name: &str) -> Result<T, LoadError> {
        T::deserialize(self.get(name)?).map_err(|e| self.malformed(format!("field `{}`: {}", name, e)))
    }

    fn array(&self, name: &str) -> Result<&'a Vec<Value>, LoadError> {
        self.get(name)?
            .as_array()
            .ok_or_else(|| self.malformed(format!("field `{}` must be an array", name)))
    }

    fn child(&self, name: &str) -> Result<Node, LoadError> {
        node(self.get(name)?, &format!("{}/{}", self.path, name))
    }

    /// Statement list where falsy entries mark empty slots.
    fn body(&self) -> Result<Vec<Option<Node>>, LoadError> {
        self.array("body")?
            .iter()
            .enumerate()
            .map(|(i, stmt)| {
                if is_empty_slot(stmt) {
                    Ok(None)
                } else {
                    node(stmt, &format!("{}/body/{}", self.path, i)).map(Some)
                }
            })
            .collect()
    }
}

/// `null`, `false`, `0` and `""` all leave a hole in a statement list.
fn is_empty_slot(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Integral numbers print without a fraction (`1e5` is `100000`, not `100000.0`).
fn number_text(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(int) = number.as_u64() {
        int.to_string()
    } else {
        number.as_f64().map(|float| float.to_string()).unwrap_or_else(|| number.to_string())
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() { "/".to_string() } else { path.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_identifier() {
        let node = from_str(r#"{"type": "Identifier", "name": "x"}"#).unwrap();
        assert_eq!(node, Node::ident("x"));
    }

    #[test]
    fn test_load_program_keeps_empty_slots() {
        let src = r#"{
            "type": "Program",
            "body": [
                null,
                {"type": "ImportDeclaration", "source": {"std": true, "value": "stdio.h"}},
                null
            ]
        }"#;
        let node = from_str(src).unwrap();
        assert_eq!(node, Node::program(vec![None, Some(Node::import(true, "stdio.h")), None]));
    }

    #[test]
    fn test_load_function() {
        let src = r#"{
            "type": "FunctionDeclaration",
            "id": {"name": "add"},
            "returnType": {"name": "int"},
            "params": [
                {"name": {"name": "a"}, "typing": {"name": "int"}},
                {"name": {"name": "b"}, "typing": {"name": "ptr*int"}}
            ],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": {
                        "type": "BinaryExpression",
                        "op": "+",
                        "left": {"type": "Identifier", "name": "a"},
                        "right": {"type": "Literal", "value": "1"}
                    }
                }]
            }
        }"#;
        let node = from_str(src).unwrap();
        let expected = Node::function(
            "add",
            "int",
            vec![Param::new("a", "int"), Param::new("b", "ptr*int")],
            vec![Some(Node::ret(Node::binary(Node::ident("a"), "+", Node::literal("1"))))],
        );
        assert_eq!(node, expected);
    }

    #[test]
    fn test_load_variable_and_call() {
        let src = r#"{
            "type": "VariableDeclaration",
            "mutable": false,
            "id": {"name": "p"},
            "typing": {"name": "ptr*char"},
            "value": {
                "type": "CallExpression",
                "callee": {"name": "malloc"},
                "arguments": [{"type": "Literal", "value": 16}]
            }
        }"#;
        let node = from_str(src).unwrap();
        assert_eq!(
            node,
            Node::var(false, "p", "ptr*char", Node::call("malloc", vec![Node::literal("16")]))
        );
    }

    #[test]
    fn test_unknown_kind_is_unsupported_node() {
        let node = from_str(r#"{"type": "WhileStatement", "test": null}"#).unwrap();
        assert_eq!(node, Node::unsupported("WhileStatement"));
    }

    #[test]
    fn test_missing_type_tag() {
        let err = from_str(r#"{"type": "Program", "body": [{"name": "x"}]}"#).unwrap_err();
        match err {
            LoadError::MissingKind { path } => assert_eq!(path, "/body/0"),
            other => panic!("Expected MissingKind, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_reports_path() {
        let src = r#"{
            "type": "Program",
            "body": [{"type": "ReturnStatement"}]
        }"#;
        let err = from_str(src).unwrap_err();
        match err {
            LoadError::MalformedNode { kind, path, message } => {
                assert_eq!(kind, NodeKind::ReturnStatement);
                assert_eq!(path, "/body/0");
                assert!(message.contains("argument"), "unexpected message: {}", message);
            }
            other => panic!("Expected MalformedNode, got {:?}", other),
        }
    }

    #[test]
    fn test_function_body_must_be_block() {
        let src = r#"{
            "type": "FunctionDeclaration",
            "id": {"name": "f"},
            "returnType": {"name": "int"},
            "params": [],
            "body": {"type": "Literal", "value": "0"}
        }"#;
        let err = from_str(src).unwrap_err();
        assert!(err.to_string().contains("BlockStatement"), "unexpected error: {}", err);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(from_str("{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_numeric_literals_print_like_the_parser() {
        let literal = |src: &str| from_str(&format!(r#"{{"type": "Literal", "value": {}}}"#, src)).unwrap();
        assert_eq!(literal("1e5"), Node::literal("100000"));
        assert_eq!(literal("42"), Node::literal("42"));
        assert_eq!(literal("-7"), Node::literal("-7"));
        assert_eq!(literal("2.5"), Node::literal("2.5"));
        assert_eq!(literal("true"), Node::literal("true"));
    }

    #[test]
    fn test_falsy_body_entries_are_empty_slots() {
        let src = r#"{
            "type": "BlockStatement",
            "body": [false, 0, "", null, {"type": "Identifier", "name": "x"}]
        }"#;
        let node = from_str(src).unwrap();
        assert_eq!(node, Node::block(vec![None, None, None, None, Some(Node::ident("x"))]));
    }

    #[test]
    fn test_truthy_scalar_in_body_is_missing_kind() {
        let src = r#"{"type": "Program", "body": [true]}"#;
        let err = from_str(src).unwrap_err();
        assert!(matches!(err, LoadError::MissingKind { ref path } if path == "/body/0"), "got: {:?}", err);
    }
}
