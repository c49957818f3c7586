//! Low-level lexers shared by the rule-text parser and the value grammar.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_till, take_till1, take_while1},
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize, verify},
    sequence::{delimited, pair, preceded, tuple},
};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a signed decimal number: `10`, `-2.5`, `+.5`, `3.`.
///
/// Digit runs too large for an `f64` are rejected rather than read as
/// infinity.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    verify(
        map_res(
            recognize(pair(
                opt(one_of("+-")),
                alt((
                    recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                    recognize(pair(char('.'), digit1)),
                )),
            )),
            |s: &str| s.parse::<f64>(),
        ),
        |n: &f64| n.is_finite(),
    )(input)
}

/// Parses `name(` with optional whitespace before the parenthesis.
///
/// The name is matched as a whole word, so `rgb` does not match `rgba(`.
pub fn function_open<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, ()> {
    move |input: &'a str| {
        let (input, _) = nom::bytes::complete::tag(name)(input)?;
        let (input, _) = tuple((multispace0, char('(')))(input)?;
        Ok((input, ()))
    }
}

/// Parses a double- or single-quoted string, returning the unquoted contents.
pub fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    ))(input)
}

/// Parses a comma separator with surrounding whitespace.
pub fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// Splits off the next whitespace-delimited token after leading whitespace.
pub fn next_token(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(char::is_whitespace))(input)
}

/// True when `rest` starts a new token: it is empty or begins with whitespace.
pub fn at_boundary(rest: &str) -> bool {
    rest.chars().next().is_none_or(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_forms() {
        assert_eq!(parse_number("10px"), Ok(("px", 10.0)));
        assert_eq!(parse_number("-2.5em"), Ok(("em", -2.5)));
        assert_eq!(parse_number("+.5"), Ok(("", 0.5)));
        assert_eq!(parse_number("3."), Ok(("", 3.0)));
        assert!(parse_number("px").is_err());
        assert!(parse_number(".").is_err());
    }

    #[test]
    fn test_number_overflow_is_rejected() {
        let huge = format!("1{}px", "0".repeat(400));
        assert!(parse_number(&huge).is_err());
    }

    #[test]
    fn test_function_open_is_whole_word() {
        assert!(function_open("rgb")("rgb (1,2,3)").is_ok());
        assert!(function_open("rgb")("rgba(1,2,3,1)").is_err());
    }

    #[test]
    fn test_quoted() {
        assert_eq!(parse_quoted("\"a b\" rest"), Ok((" rest", "a b")));
        assert_eq!(parse_quoted("'x'"), Ok(("", "x")));
        assert!(parse_quoted("\"open").is_err());
    }

    #[test]
    fn test_next_token_and_boundary() {
        assert_eq!(next_token("  solid red"), Ok((" red", "solid")));
        assert!(next_token("   ").is_err());
        assert!(at_boundary(""));
        assert!(at_boundary(" x"));
        assert!(!at_boundary("x"));
    }
}
