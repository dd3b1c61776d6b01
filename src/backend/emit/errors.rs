//! Define error types for AST → C emission.
//!
//! These errors represent *emission* failures (as opposed to failures reading parser output). Emission either returns
//! the complete text or one of these errors, never a partial result.

use thiserror::Error;

/// Error during emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// The tree contains a node kind with no emission rule.
    #[error("unsupported node kind: {kind}")]
    UnsupportedNodeKind { kind: String },
}
