//! Program Image Loader.
//!
//! This module turns LS-8 program text into the bytes the CPU loads at address 0. It performs:
//! 1. **Comment stripping:** Everything from `#` to end of line is ignored.
//! 2. **Literal parsing:** Each remaining non-blank line is one base-2 byte (up to 8 significant bits).
//! 3. **Malformed lines:** Skipped with a warning, or rejected, per [`MalformedLinePolicy`].
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use crate::common::LoadError;
use crate::config::MalformedLinePolicy;

/// Character that starts a comment.
const COMMENT_MARKER: char = '#';

/// Parses one line into a byte.
///
/// Returns `Ok(None)` for blank and comment-only lines, and `Err(text)` with
/// the stripped line when it is not a binary literal that fits in a byte.
fn parse_line(line: &str) -> Result<Option<u8>, &str> {
    let text = line
        .split_once(COMMENT_MARKER)
        .map_or(line, |(code, _)| code)
        .trim();
    if text.is_empty() {
        return Ok(None);
    }
    if !text.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(text);
    }
    u8::from_str_radix(text, 2).map(Some).map_err(|_| text)
}

/// Parses a program image.
///
/// # Arguments
///
/// * `source` - Program text, one binary literal per line.
/// * `policy` - What to do with lines that are not valid literals.
///
/// # Errors
///
/// Returns [`LoadError::MalformedLine`] for the first bad line under
/// [`MalformedLinePolicy::Reject`]. Never fails under [`MalformedLinePolicy::Skip`].
///
/// # Examples
///
/// ```
/// use ls8_core::config::MalformedLinePolicy;
/// use ls8_core::sim::loader::parse_program;
///
/// let text = "10000010 # LDI\n00000000\n00001000\n\n# comment only\n00000001\n";
/// let bytes = parse_program(text, MalformedLinePolicy::Skip).unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str, policy: MalformedLinePolicy) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(byte)) => program.push(byte),
            Ok(None) => {}
            Err(text) => match policy {
                MalformedLinePolicy::Skip => {
                    tracing::warn!(line = idx + 1, text, "skipping malformed program line");
                }
                MalformedLinePolicy::Reject => {
                    return Err(LoadError::MalformedLine {
                        line: idx + 1,
                        text: text.to_string(),
                    });
                }
            },
        }
    }
    tracing::debug!(bytes = program.len(), "parsed program image");
    Ok(program)
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read as UTF-8 text, otherwise
/// whatever [`parse_program`] returns.
pub fn load_program_file(
    path: impl AsRef<Path>,
    policy: MalformedLinePolicy,
) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source, policy)
}
