//! Rule-text parsing.
//!
//! This module turns style-sheet text into a [`StyleModel`]:
//!
//! - [`parse_stylesheet`]: main entry point, using [`DEFAULT_MARKER`]
//! - [`parse_stylesheet_with_marker`]: same, with a custom internal marker
//! - [`parse_declarations`]: `name: value;` runs, inside a block or free-standing
//!
//! ## Submodules
//!
//! - [`comments`]: block comment removal
//! - [`selectors`]: selector structure and bucket classification
//! - [`tokens`]: lexers shared with the value grammar
//!
//! ## Example
//!
//! ```rust
//! use stylecodec::parser::parse_stylesheet;
//!
//! let model = parse_stylesheet("h1, .title { color: red; }").unwrap();
//! assert_eq!(model.selectors().collect::<Vec<_>>(), ["h1", ".title"]);
//! assert_eq!(model.property(".title", "color").unwrap().value, "red");
//! ```

pub mod comments;
pub mod selectors;
pub mod tokens;

use log::{debug, trace};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, multispace0},
    combinator::{map, peek, recognize, verify},
    multi::{many0, many1},
    sequence::{delimited, preceded, terminated, tuple},
};

use crate::error::CodecError;
use crate::model::StyleModel;
use crate::parser::comments::strip_comments;
use crate::parser::tokens::parse_ident;

/// Marker identifying rules the editor injects for its own affordances.
pub const DEFAULT_MARKER: &str = ".cssedit-";

/// A `name: value` pair with the value trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parses style-sheet text, skipping rules whose selector contains
/// [`DEFAULT_MARKER`].
pub fn parse_stylesheet(source: &str) -> Result<StyleModel, CodecError> {
    parse_stylesheet_with_marker(source, DEFAULT_MARKER)
}

/// Parses style-sheet text, skipping rules whose selector contains `marker`.
///
/// Parsing is all-or-nothing: on error no model is returned, and the error
/// carries the byte offset in `source` where matching stopped.
pub fn parse_stylesheet_with_marker(source: &str, marker: &str) -> Result<StyleModel, CodecError> {
    let text = strip_comments(source);
    let malformed = |rest: &str| {
        let at = text.len() - rest.len();
        CodecError::MalformedStylesheet {
            at,
            remainder: source.get(at..).unwrap_or(rest).to_string(),
        }
    };

    let mut model = StyleModel::new();
    let mut input = text.trim_start();
    let mut rules = 0usize;
    let mut skipped = 0usize;

    while !input.is_empty() {
        let (rest, header) = rule_header(input).map_err(|_| malformed(input))?;

        if !marker.is_empty() && header.contains(marker) {
            let (rest, _) = skip_block(rest).map_err(|_| malformed(rest))?;
            trace!("skipped internal rule {:?}", header.trim());
            skipped += 1;
            input = rest.trim_start();
            continue;
        }

        let selectors = split_selector_list(header).ok_or_else(|| malformed(input))?;
        let (rest, declarations) = parse_declarations(rest).map_err(|_| malformed(rest))?;
        let (rest, _) = block_end(rest).map_err(|_| malformed(rest))?;

        for selector in selectors {
            model.merge_declarations(selector, &declarations);
        }
        rules += 1;
        input = rest.trim_start();
    }

    debug!(
        "parsed {rules} rules into {} selectors ({skipped} internal rules skipped)",
        model.len()
    );
    Ok(model)
}

/// Parses consecutive declarations and returns the text where matching
/// stopped.
///
/// ```rust
/// use stylecodec::parser::{parse_declarations, Declaration};
///
/// let (rest, decls) = parse_declarations("color: red; width: 1px; oops").unwrap();
/// assert_eq!(decls, vec![Declaration::new("color", "red"), Declaration::new("width", "1px")]);
/// assert_eq!(rest, " oops");
/// ```
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_declaration)(input)
}

/// Parses one `name: value` declaration ended by `;` or followed by `}`.
pub fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = verify(declaration_value, |v: &str| !v.trim().is_empty())(input)?;
    let (input, _) = alt((map(char(';'), |_| ()), map(peek(char('}')), |_| ())))(input)?;
    Ok((input, Declaration::new(name, value.trim())))
}

/// Matches `selector list {` and returns the selector text.
fn rule_header(input: &str) -> IResult<&str, &str> {
    terminated(take_till1(|c: char| c == '{' || c == '}'), char('{'))(input)
}

fn skip_block(input: &str) -> IResult<&str, &str> {
    terminated(take_till(|c: char| c == '}'), char('}'))(input)
}

fn block_end(input: &str) -> IResult<&str, char> {
    preceded(multispace0, char('}'))(input)
}

fn split_selector_list(header: &str) -> Option<Vec<&str>> {
    header
        .split(',')
        .map(str::trim)
        .map(|s| (!s.is_empty()).then_some(s))
        .collect()
}

/// Value text up to `;` or `}`. Quoted strings and parenthesized groups,
/// such as `url("data:...;base64,...")`, are consumed whole.
fn declaration_value(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        quoted_raw,
        parenthesized,
        take_till1(|c: char| matches!(c, ';' | '}' | '"' | '\'' | '(')),
    ))))(input)
}

fn quoted_raw(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(char('"'), take_till(|c: char| c == '"'), char('"'))),
        recognize(delimited(char('\''), take_till(|c: char| c == '\''), char('\''))),
    ))(input)
}

fn parenthesized(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('('),
        many0(alt((
            quoted_raw,
            parenthesized,
            take_till1(|c: char| matches!(c, ')' | '(' | '"' | '\'')),
        ))),
        char(')'),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_value_keeps_data_url_whole() {
        let (rest, decl) =
            parse_declaration("background-image: url(\"data:image/png;base64,AA==\"); x").unwrap();
        assert_eq!(decl.value, "url(\"data:image/png;base64,AA==\")");
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_declaration_before_closing_brace() {
        let (rest, decl) = parse_declaration("color: red }").unwrap();
        assert_eq!(decl, Declaration::new("color", "red"));
        assert_eq!(rest, "}");
    }

    #[test]
    fn test_empty_value_is_rejected() {
        assert!(parse_declaration("color: ;").is_err());
        assert!(parse_declaration("color:}").is_err());
    }

    #[test]
    fn test_nested_parentheses() {
        let (_, decl) = parse_declaration("width: calc((100% - 2em) / 3);").unwrap();
        assert_eq!(decl.value, "calc((100% - 2em) / 3)");
    }

    #[test]
    fn test_split_selector_list() {
        assert_eq!(split_selector_list(" a , .b "), Some(vec!["a", ".b"]));
        assert_eq!(split_selector_list("a,,b"), None);
        assert_eq!(split_selector_list("a,"), None);
    }

    #[test]
    fn test_error_offset_points_into_source() {
        let source = "/* note */ .a { color: red; } }";
        let err = parse_stylesheet(source).unwrap_err();
        let CodecError::MalformedStylesheet { at, remainder } = err;
        assert_eq!(at, source.len() - 1);
        assert_eq!(remainder, "}");
    }
}
