//! CLI command implementations
//!
//! Commands return [`CliResult`]; exit statuses are decided by [`super::run`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crb_syntax::json;

use super::{CliError, CliResult};
use crate::backend::{EmitConfig, Emitter};

/// Maximum input file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while decoding the syntax tree.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file with size validation.
fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::new(format!("Error reading file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::new(format!(
            "File '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::new(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Load a syntax tree from `source` and generate C text for it.
///
/// `file_path` is only used to label error messages.
pub fn generate_source(file_path: &Path, source: &str, config: EmitConfig) -> CliResult<String> {
    let ast = json::from_str(source)
        .map_err(|e| CliError::new(format!("{}: error: {}", file_path.display(), e)))?;

    Emitter::with_config(config)
        .generate(&ast)
        .map_err(|e| CliError::new(format!("{}: code generation error: {}", file_path.display(), e)))
}

/// Generate C for the syntax tree in `file_path` and write it, newline-terminated, to `output` or stdout.
pub fn emit_file(file_path: &Path, output: Option<&Path>, config: EmitConfig) -> CliResult<()> {
    tracing::info!(file = %file_path.display(), "generating C source");
    let source = read_source(file_path)?;
    let code = generate_source(file_path, &source, config)?;

    match output {
        Some(out_path) => {
            fs::write(out_path, format!("{}\n", code))
                .map_err(|e| CliError::new(format!("Error writing '{}': {}", out_path.display(), e)))?;
            tracing::debug!(output = %out_path.display(), bytes = code.len() + 1, "wrote generated code");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", code)
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::new(format!("Error writing to stdout: {}", e)))?;
        }
    }

    Ok(())
}
