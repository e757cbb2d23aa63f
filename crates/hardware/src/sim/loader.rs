//! Program Loader.
//!
//! This module turns assembly source into a `Program`. It performs:
//! 1. **File reading:** Reads the source (or a JSON configuration) from disk.
//! 2. **Decoding:** Feeds each line through the decoder; the first error aborts the load.
//! 3. **Bounds tracking:** Inserts every instruction, narrowing the program's entry and exit.
//!
//! Loading always completes before execution starts, so the execution engine never
//! observes a partially built program.

use std::fs;
use std::path::Path;

use crate::common::{DecodeError, SimError};
use crate::config::Config;
use crate::isa::decode::decode_line;
use crate::sim::program::Program;

/// Decodes assembly source text into a program.
///
/// A later line with an already-used address replaces the earlier instruction.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered; no partial program is returned.
pub fn parse_program(source: &str) -> Result<Program, DecodeError> {
    let mut program = Program::new();

    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        let Some((addr, inst)) = decode_line(line, text)? else {
            continue;
        };
        if let Some(prev) = program.insert(addr, inst) {
            tracing::warn!(line, %addr, replaced = %prev, "duplicate address; keeping the later instruction");
        }
    }

    match program.bounds() {
        Some((entry, exit)) => tracing::debug!(
            instructions = program.len(),
            %entry,
            %exit,
            "program decoded"
        ),
        None => tracing::debug!("program is empty"),
    }

    Ok(program)
}

/// Reads and decodes an assembly source file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and [`SimError::Decode`] if
/// any line fails to decode.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let source = read_file(path)?;
    tracing::debug!(path = %path.display(), "loading program");
    Ok(parse_program(&source)?)
}

/// Reads a JSON configuration file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read and [`SimError::Config`] if it
/// is not a valid configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, SimError> {
    let text = read_file(path.as_ref())?;
    Ok(Config::from_json(&text)?)
}

fn read_file(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}
