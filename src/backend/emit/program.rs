//! Program-level emission: top-level statements in source order, one per line.

use crb_syntax::ast::Program;

use super::{EmitError, Emitter};

impl Emitter {
    /// Emit every non-empty top-level statement, joined with newlines.
    ///
    /// Top-level statements get no terminator from this rule; an empty program emits empty text.
    pub(super) fn emit_program(&self, program: &Program) -> Result<String, EmitError> {
        let statements = program
            .body
            .iter()
            .flatten()
            .map(|stmt| self.emit(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(statements.join("\n"))
    }
}
