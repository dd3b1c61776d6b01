//! Emit C source text from the crb AST.
//!
//! This module defines [`Emitter`] and wires together the focused submodules that implement one emission rule per
//! node kind. `mod.rs` only holds the dispatch.
//!
//! ## Notes
//! - Dispatch is an exhaustive `match` over [`Node`]; adding a node kind without a rule fails to compile.
//! - Rules take `&self` and return owned fragments, so emission is re-entrant and holds no mutable state.
//! - Statement terminators are owned by the block rule; see [`crate::backend::TerminatorPolicy`].
//!
//! ## See also
//! - [`program`]: program-level emission
//! - [`decls`]: import, function and variable declarations
//! - [`statements`]: block, return and expression statements
//! - [`expressions`]: calls, binary operations, literals, identifiers
//! - [`types`]: type-name translation

mod decls;
mod errors;
mod expressions;
mod program;
mod statements;
mod types;

pub use errors::EmitError;
pub use types::translate_type;

use crb_syntax::ast::Node;

use super::config::EmitConfig;

/// Emit C source text from a syntax tree.
///
/// The emitter only holds its configuration; a single instance can be shared across threads and reused for any
/// number of trees.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: EmitConfig,
}

impl Emitter {
    /// Create an emitter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Generate the complete output for a tree, usually rooted at a `Program`.
    ///
    /// ## Errors
    /// Returns [`EmitError::UnsupportedNodeKind`] if any node in the tree has no emission rule; no partial text is
    /// produced in that case.
    #[tracing::instrument(skip_all, fields(kind = root.kind_name()))]
    pub fn generate(&self, root: &Node) -> Result<String, EmitError> {
        let output = self.emit(root)?;
        tracing::debug!(output_len = output.len(), "emission finished");
        Ok(output)
    }

    /// Emit one node and, recursively, its children.
    pub fn emit(&self, node: &Node) -> Result<String, EmitError> {
        match node {
            Node::Program(program) => self.emit_program(program),
            Node::ImportDeclaration(decl) => Ok(self.emit_import(decl)),
            Node::FunctionDeclaration(decl) => self.emit_function(decl),
            Node::BlockStatement(block) => self.emit_block(block),
            Node::ReturnStatement(stmt) => self.emit_return(stmt),
            Node::ExpressionStatement(stmt) => self.emit_expression_stmt(stmt),
            Node::VariableDeclaration(decl) => self.emit_variable(decl),
            Node::CallExpression(call) => self.emit_call(call),
            Node::BinaryExpression(binary) => self.emit_binary(binary),
            Node::Literal(literal) => Ok(literal.value.clone()),
            Node::Identifier(ident) => Ok(ident.name.clone()),
            Node::Unsupported(node) => Err(EmitError::UnsupportedNodeKind {
                kind: node.kind.clone(),
            }),
        }
    }
}

/// Emit a tree with the default configuration.
pub fn emit(root: &Node) -> Result<String, EmitError> {
    Emitter::new().generate(root)
}
