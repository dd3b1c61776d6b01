//! Expression emission for calls and binary operations.
//!
//! Literals and identifiers print their stored text verbatim and are handled directly in the dispatch.

use crb_syntax::ast::{BinaryExpression, CallExpression};

use super::types::translate_type;
use super::{EmitError, Emitter};

impl Emitter {
    /// `<callee>(<args>)`.
    ///
    /// The callee goes through type translation so a call can double as a pointer cast: `ptr*char(p)` prints
    /// `char*(p)`. Plain callee names are unaffected.
    pub(super) fn emit_call(&self, call: &CallExpression) -> Result<String, EmitError> {
        let args = call
            .arguments
            .iter()
            .map(|arg| self.emit(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}({})", translate_type(&call.callee), args.join(", ")))
    }

    /// `<left> <op> <right>`; the operator is printed as given and no parentheses are added.
    pub(super) fn emit_binary(&self, binary: &BinaryExpression) -> Result<String, EmitError> {
        let left = self.emit(&binary.left)?;
        let right = self.emit(&binary.right)?;
        Ok(format!("{} {} {}", left, binary.operator, right))
    }
}

#[cfg(test)]
mod tests {
    use crb_syntax::ast::Node;

    use crate::backend::emit;

    fn lit(text: &str) -> Node {
        Node::literal(text)
    }

    fn ident(name: &str) -> Node {
        Node::ident(name)
    }

    #[test]
    fn test_call_without_arguments() {
        assert_eq!(emit(&Node::call("rand", vec![])).unwrap(), "rand()");
    }

    #[test]
    fn test_call_arguments_joined() {
        let call = Node::call("printf", vec![lit("\"%d\\n\""), ident("x")]);
        assert_eq!(emit(&call).unwrap(), "printf(\"%d\\n\", x)");
    }

    #[test]
    fn test_call_doubles_as_pointer_cast() {
        let call = Node::call("ptr*char", vec![ident("buffer")]);
        assert_eq!(emit(&call).unwrap(), "char*(buffer)");
    }

    #[test]
    fn test_nested_calls() {
        let call = Node::call("abs", vec![Node::call("sub", vec![ident("a"), ident("b")])]);
        assert_eq!(emit(&call).unwrap(), "abs(sub(a, b))");
    }

    #[test]
    fn test_binary_expression() {
        let expr = Node::binary(ident("a"), "*", lit("2"));
        assert_eq!(emit(&expr).unwrap(), "a * 2");
    }

    #[test]
    fn test_binary_operator_is_verbatim() {
        let expr = Node::binary(ident("a"), "<=>", ident("b"));
        assert_eq!(emit(&expr).unwrap(), "a <=> b");
    }

    #[test]
    fn test_nested_binary_has_no_parentheses() {
        let expr = Node::binary(Node::binary(ident("a"), "+", ident("b")), "*", ident("c"));
        assert_eq!(emit(&expr).unwrap(), "a + b * c");
    }

    #[test]
    fn test_binary_with_call_operand() {
        let expr = Node::binary(Node::call("len", vec![ident("s")]), "-", lit("1"));
        assert_eq!(emit(&expr).unwrap(), "len(s) - 1");
    }
}
