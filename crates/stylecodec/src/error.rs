//! Error types for rule-text parsing.
//!
//! Only structurally broken style-sheet text is an error. Unknown properties
//! and values the grammar cannot decompose are routed to the raw-text path
//! and never surface here.

use thiserror::Error;

/// Errors that can occur while parsing style-sheet text.
///
/// # Examples
///
/// ```rust
/// use stylecodec::parser::parse_stylesheet;
/// use stylecodec::CodecError;
///
/// // Missing closing brace
/// let result = parse_stylesheet(".y { color: red");
/// assert!(matches!(result, Err(CodecError::MalformedStylesheet { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A selector header could not be matched or a block was not terminated.
    ///
    /// `at` is the byte offset into the caller's text where matching
    /// stopped; `remainder` is the unmatched text from that point on.
    #[error("malformed stylesheet at byte {at}: {}", snippet(.remainder))]
    MalformedStylesheet { at: usize, remainder: String },
}

fn snippet(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(MAX_CHARS).collect();
    out.push_str("...");
    out
}
