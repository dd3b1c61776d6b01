//! Declaration emission: imports, functions and variables.

use crb_syntax::ast::{FunctionDeclaration, ImportDeclaration, Param, VariableDeclaration};

use super::types::translate_type;
use super::{EmitError, Emitter};

impl Emitter {
    /// `#include <value>` for system headers, `#include value` otherwise.
    ///
    /// Non-system values are expected to carry their own quotes (`"util.h"`); nothing is validated.
    pub(super) fn emit_import(&self, decl: &ImportDeclaration) -> String {
        let source = &decl.source;
        if source.is_standard_library {
            format!("#include <{}>", source.value)
        } else {
            format!("#include {}", source.value)
        }
    }

    /// `<type> <name> (<params>) {` followed by the indented body and a closing brace.
    pub(super) fn emit_function(&self, decl: &FunctionDeclaration) -> Result<String, EmitError> {
        let return_type = translate_type(decl.return_type.as_str());
        let params = self.emit_params(&decl.params);
        let body = self.emit_block(&decl.body)?;

        Ok(format!(
            "{} {} ({}) {{\n{}{}\n}}",
            return_type, decl.name, params, self.config.indent, body
        ))
    }

    /// An empty parameter list is spelled `void`.
    fn emit_params(&self, params: &[Param]) -> String {
        if params.is_empty() {
            return "void".to_string();
        }
        params
            .iter()
            .map(|p| format!("{} {}", translate_type(p.typing.as_str()), p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `[const ]<type> <name> = <value>`; only immutable bindings get `const`.
    pub(super) fn emit_variable(&self, decl: &VariableDeclaration) -> Result<String, EmitError> {
        let qualifier = if decl.mutable { "" } else { "const " };
        let value = self.emit(&decl.value)?;
        Ok(format!(
            "{}{} {} = {}",
            qualifier,
            translate_type(decl.typing.as_str()),
            decl.name,
            value
        ))
    }
}
