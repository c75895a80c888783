//! Text program loader.
//!
//! Programs are plain text: one 16-bit hexadecimal instruction word per
//! line. Lines starting with `#` are comments, blank lines are skipped, and
//! an optional `0x` prefix is accepted. All failures are setup errors
//! reported to the caller; no partial program is ever returned.

use std::fs;
use std::path::Path;

use crate::common::SetupError;

/// Reads and parses a program file into instruction words.
///
/// # Errors
///
/// Returns [`SetupError::ProgramRead`] if the file cannot be read, and the
/// parse errors of [`parse_program`] otherwise.
pub fn load_program(path: &Path) -> Result<Vec<u16>, SetupError> {
    let text = fs::read_to_string(path).map_err(|source| SetupError::ProgramRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text)
}

/// Parses program text into instruction words.
///
/// # Errors
///
/// Returns [`SetupError::ProgramParse`] with the 1-based line number of the
/// first line that is not a 16-bit hex word, or [`SetupError::EmptyProgram`]
/// if no instruction words remain after stripping comments and blanks.
pub fn parse_program(text: &str) -> Result<Vec<u16>, SetupError> {
    let mut program = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        let word = word.strip_prefix("0x").unwrap_or(word);
        let parsed = u16::from_str_radix(word, 16).map_err(|source| SetupError::ProgramParse {
            line: idx + 1,
            source,
        })?;
        program.push(parsed);
    }
    if program.is_empty() {
        return Err(SetupError::EmptyProgram);
    }
    Ok(program)
}
