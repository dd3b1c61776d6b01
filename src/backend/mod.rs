//! crb Compiler Backend
//!
//! This module turns a parsed AST into C source text.
//!
//! ## Module Organization
//!
//! - `emit/` - One emission rule per node kind
//!   - `mod.rs` - [`Emitter`] and kind dispatch
//!   - `program.rs` - Top-level statement list
//!   - `decls.rs` - Import, function and variable declarations
//!   - `statements.rs` - Blocks, returns, expression statements
//!   - `expressions.rs` - Calls and binary operations
//!   - `types.rs` - Source type name → C type name
//!   - `errors.rs` - [`EmitError`]
//! - `config.rs` - [`EmitConfig`] (indentation, terminator policy)

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod emit;

pub use config::{EmitConfig, TerminatorPolicy};
pub use emit::{EmitError, Emitter, emit, translate_type};
