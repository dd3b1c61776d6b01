//! Statement emission: blocks, returns and expression statements.
//!
//! The block rule owns terminator placement: it appends `;` after every statement it contains. Expression statements
//! also terminate themselves, so under [`TerminatorPolicy::Preserve`] they come out as `f(x);;` inside a block.

use crb_syntax::ast::{BlockStatement, ExpressionStatement, Node, ReturnStatement};

use super::{EmitError, Emitter};
use crate::backend::config::TerminatorPolicy;

impl Emitter {
    /// Emit non-empty statements, each terminated, one per line at one indentation stop.
    ///
    /// The first line is not indented; the enclosing function supplies that.
    pub(super) fn emit_block(&self, block: &BlockStatement) -> Result<String, EmitError> {
        let separator = format!("\n{}", self.config.indent);
        let statements = block
            .body
            .iter()
            .flatten()
            .map(|stmt| self.emit_terminated(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(statements.join(&separator))
    }

    fn emit_terminated(&self, stmt: &Node) -> Result<String, EmitError> {
        let mut text = self.emit(stmt)?;
        let self_terminated = matches!(stmt, Node::ExpressionStatement(_));
        if !(self_terminated && self.config.terminators == TerminatorPolicy::Collapse) {
            text.push(';');
        }
        Ok(text)
    }

    pub(super) fn emit_return(&self, stmt: &ReturnStatement) -> Result<String, EmitError> {
        Ok(format!("return {}", self.emit(&stmt.argument)?))
    }

    pub(super) fn emit_expression_stmt(&self, stmt: &ExpressionStatement) -> Result<String, EmitError> {
        Ok(format!("{};", self.emit(&stmt.expression)?))
    }
}
