#![forbid(unsafe_code)]
//! crb code generator
//!
//! Turns the AST of a small typed language into C source text. This crate provides the emitter (backend) and the
//! command-line entry point; the AST itself and loading of parser output live in `crb_syntax`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use crb::ast::{Node, Param};
//!
//! let program = Node::program(vec![
//!     Some(Node::import(true, "stdio.h")),
//!     Some(Node::function("square", "int", vec![Param::new("x", "int")], vec![
//!         Some(Node::ret(Node::binary(Node::ident("x"), "*", Node::ident("x")))),
//!     ])),
//! ]);
//! let c_code = crb::backend::emit(&program).unwrap();
//! assert_eq!(c_code, "#include <stdio.h>\nint square (int x) {\n\treturn x * x;\n}");
//! ```

pub mod backend;
pub mod cli;

pub use crb_syntax::ast;
pub use crb_syntax::json;

pub use backend::{EmitConfig, EmitError, Emitter, TerminatorPolicy};
