//! Selector structure and bucket classification.
//!
//! Selectors are stored as the text the author wrote. The structure parsed
//! here is only used to decide which serialization bucket a selector falls
//! into.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::char,
    combinator::{all_consuming, map, opt, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use crate::model::SelectorKind;
use crate::parser::tokens::parse_ident;

/// One simple selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    /// `:name` or `:name(args)`, kept with its arguments.
    PseudoClass(String),
    PseudoElement(String),
    Attribute(String, String),
}

/// Simple selectors written without whitespace, e.g. `a.primary:hover`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    pub fn class_count(&self) -> usize {
        self.selectors
            .iter()
            .filter(|s| matches!(s, Selector::Class(_)))
            .count()
    }

    /// True when the compound starts with its only class, as in `.a:hover`.
    pub fn is_single_class(&self) -> bool {
        matches!(self.selectors.first(), Some(Selector::Class(_))) && self.class_count() == 1
    }
}

/// Decides the serialization bucket of a selector.
///
/// `#...` is an id selector. A selector consisting of one compound that
/// starts with its only class (`.a`, `.a:hover`, `.a[href]`) is a class
/// selector. Everything else, including text that does not parse, is other.
///
/// ```rust
/// use stylecodec::parser::selectors::classify_selector;
/// use stylecodec::SelectorKind;
///
/// assert_eq!(classify_selector("#main"), SelectorKind::Id);
/// assert_eq!(classify_selector(".a:hover"), SelectorKind::Class);
/// assert_eq!(classify_selector(".a .b"), SelectorKind::Other);
/// assert_eq!(classify_selector("div.a"), SelectorKind::Other);
/// ```
pub fn classify_selector(selector: &str) -> SelectorKind {
    let selector = selector.trim();
    if selector.starts_with('#') {
        return SelectorKind::Id;
    }

    // Whitespace or a combinator leaves input behind, so only a lone
    // compound parses to the end.
    match all_consuming(parse_compound_selector)(selector) {
        Ok((_, compound)) if compound.is_single_class() => SelectorKind::Class,
        _ => SelectorKind::Other,
    }
}

/// Parses a simple selector.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Selector::Class(s.to_string())
        }),
        map(preceded(tag("::"), parse_ident), |s| {
            Selector::PseudoElement(s.to_string())
        }),
        map(
            preceded(
                char(':'),
                recognize(pair(
                    parse_ident,
                    opt(delimited(char('('), take_until(")"), char(')'))),
                )),
            ),
            |s: &str| Selector::PseudoClass(s.to_string()),
        ),
        map(char('*'), |_| Selector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| Selector::Type(s.to_string())),
    ))(input)
}

/// Parses a compound selector (e.g. `a.primary#submit`).
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    // No whitespace between simple selectors: `a:hover` is one compound.
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, CompoundSelector::new(selectors)))
}

fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    match content.split_once('=') {
        Some((name, value)) => Ok((
            input,
            Selector::Attribute(name.trim().to_string(), value.trim().to_string()),
        )),
        None => Ok((
            input,
            Selector::Attribute(content.trim().to_string(), String::new()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_with_pseudo_class_arguments() {
        let (rest, compound) = parse_compound_selector("li.item:nth-child(2n) x").unwrap();
        assert_eq!(rest, " x");
        assert_eq!(
            compound.selectors,
            vec![
                Selector::Type("li".into()),
                Selector::Class("item".into()),
                Selector::PseudoClass("nth-child(2n)".into()),
            ]
        );
    }

    #[test]
    fn test_compound_stops_at_whitespace_and_combinators() {
        assert_eq!(parse_compound_selector(".a .b").unwrap().0, " .b");
        assert_eq!(parse_compound_selector("nav>a").unwrap().0, ">a");
        assert_eq!(parse_compound_selector(".a~.b").unwrap().0, "~.b");
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify_selector("#a .b"), SelectorKind::Id);
        assert_eq!(classify_selector(".btn"), SelectorKind::Class);
        assert_eq!(classify_selector(".btn::after"), SelectorKind::Class);
        assert_eq!(classify_selector(".a.b"), SelectorKind::Other);
        assert_eq!(classify_selector(".a > .b"), SelectorKind::Other);
        assert_eq!(classify_selector(".a+.b"), SelectorKind::Other);
        assert_eq!(classify_selector(".a[href]"), SelectorKind::Class);
        assert_eq!(classify_selector("div"), SelectorKind::Other);
        assert_eq!(classify_selector("*"), SelectorKind::Other);
    }

    #[test]
    fn test_unparseable_falls_back() {
        assert_eq!(classify_selector(".a:"), SelectorKind::Other);
        assert_eq!(classify_selector("@page"), SelectorKind::Other);
    }
}
