//! Identifier derivation from file names.
//! Converts arbitrary file names into valid, non-reserved Go identifiers by
//! camel-casing across separators, filtering invalid characters and rejecting
//! reserved keywords.

use std::path::Path;

use crate::error::{Error, Result};

/// The 25 reserved keywords of the Go language.
/// A generated identifier matching one of these is rejected.
const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Selects the base string an identifier is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Derive from the file name with its extension stripped (default)
    StripExtension,
    /// Derive from the full file name including the extension
    FullFileName,
}

impl NamingStrategy {
    /// Returns the base string for `path` under this strategy.
    pub fn base_name(self, path: &Path) -> String {
        let base = match self {
            NamingStrategy::StripExtension => path.file_stem(),
            NamingStrategy::FullFileName => path.file_name(),
        };
        base.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

/// State of the camel-casing transform at the current character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    /// The next character starts a new word and is title-cased
    AtWordStart,
    /// Inside a word; characters pass through unchanged
    InWord,
}

/// Removes separator characters (`_ - space : , .`) and title-cases the first
/// letter of each following word, including the very first word.
fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut state = WordState::AtWordStart;
    for c in s.chars() {
        match c {
            '_' | '-' | ' ' | ':' | ',' | '.' => state = WordState::AtWordStart,
            _ => {
                match state {
                    WordState::AtWordStart => out.extend(c.to_uppercase()),
                    WordState::InWord => out.push(c),
                }
                state = WordState::InWord;
            }
        }
    }
    out
}

/// Filters out characters that are invalid in Go identifiers.
///
/// Unicode letters, Unicode digits and underscore are kept; everything else
/// is dropped. Digits are additionally dropped while nothing has been emitted
/// yet, since an identifier cannot begin with a digit. This is a helper, not
/// infallible validation.
fn filter_invalid_chars(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        if !(c.is_alphabetic() || c == '_' || c.is_numeric()) {
            continue;
        }
        if out.is_empty() && c.is_numeric() {
            // identifier cannot begin with a digit
            continue;
        }
        out.push(c);
    }
    out
}

/// Returns true if `name` exactly matches a Go reserved keyword.
pub fn is_reserved_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Derives a Go identifier from a raw name.
///
/// # Arguments
/// * `raw` - The base string, typically a file name or file stem
/// * `prefix` - Prepended verbatim after sanitization; not itself sanitized
///
/// # Returns
/// * `Result<String>` - The derived identifier
///
/// # Errors
/// * `Error::ReservedIdentifier` if the final name is a Go keyword
///
/// # Note
/// No uniqueness check is performed across calls; two distinct raw names may
/// yield the same identifier.
pub fn make_identifier(raw: &str, prefix: &str) -> Result<String> {
    let name = to_camel_case(raw);
    let mut name = filter_invalid_chars(&name);

    if !prefix.is_empty() {
        name = format!("{}{}", prefix, name);
    }
    if is_reserved_keyword(&name) {
        return Err(Error::ReservedIdentifier { name });
    }

    Ok(name)
}

/// Derives a Go identifier for a file path under the given naming strategy.
pub fn identifier_for(path: &Path, prefix: &str, naming: NamingStrategy) -> Result<String> {
    make_identifier(&naming.base_name(path), prefix)
}
