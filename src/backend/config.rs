//! Emission configuration for crb
//!
//! Defaults reproduce the historical output byte for byte.

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Text of one indentation stop inside function bodies
    pub indent: String,
    /// How statement terminators are placed inside blocks
    pub terminators: TerminatorPolicy,
}

/// Terminator placement for expression statements inside a block.
///
/// A block appends `;` after every statement, and an expression statement also terminates itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminatorPolicy {
    /// Keep both terminators (`f(x);;`), matching previously generated output.
    #[default]
    Preserve,
    /// Emit exactly one terminator per expression statement (`f(x);`).
    Collapse,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            terminators: TerminatorPolicy::Preserve,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation text
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indent with `width` spaces instead of a tab
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Set the terminator policy
    pub fn with_terminators(mut self, policy: TerminatorPolicy) -> Self {
        self.terminators = policy;
        self
    }
}
