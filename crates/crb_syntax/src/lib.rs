//! Shared syntax layer for crb: the AST and loading of parser output.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does no type checking, scope resolution or code emission.
//! - The tree is built once and treated as immutable by every consumer.
//!
//! ## Examples
//! ```rust
//! use crb_syntax::{ast::Node, json};
//!
//! let node = json::from_str(r#"{"type": "Identifier", "name": "x"}"#).unwrap();
//! assert_eq!(node, Node::ident("x"));
//! ```

pub mod ast;
pub mod json;

pub use json::LoadError;
