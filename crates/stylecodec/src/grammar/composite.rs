//! Composite kinds and their variant matchers.
//!
//! Each kind lists its variants in match order. Order is significant: the
//! first variant whose matcher succeeds, and whose match ends on a token
//! boundary, wins. `var(...)` is shared by all kinds and is always tried
//! before a kind's own variants.
//!
//! | kind       | variants (in order)                                               |
//! |------------|-------------------------------------------------------------------|
//! | `length`   | `var`, `length_val`, `calc`                                       |
//! | `colordir` | `var`, `color24`, `color12`, `color_rgba`, `color_rgb`, `color_name` |
//! | `image`    | `var`, `file`, `url`                                              |

use log::trace;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till1, take_while_m_n},
    character::complete::{alpha1, char, multispace0},
    combinator::verify,
    sequence::{delimited, preceded, terminated},
};

use crate::codec::{CompositeValue, SubValue};
use crate::grammar::{CompositeKind, EncodeTemplate, SlotDef, Variant, VariantDef};
use crate::parser::tokens::{at_boundary, comma, function_open, parse_number, parse_quoted};
use crate::types::RgbaColor;

/// Length units accepted by `length_val`.
pub const LENGTH_UNITS: &[&str] = &[
    "px", "%", "rem", "em", "pt", "mm", "q", "vw", "vh", "vmin", "vmax", "ex", "ch", "cm", "in",
    "pc",
];

/// Behavior shared by the composite kinds.
///
/// Implementors supply their variant list; matching, the shared `var(...)`
/// alternative, and template-driven encoding come from the provided methods.
pub trait CompositeGrammar: Sync {
    fn kind(&self) -> CompositeKind;

    /// The kind's own variants in match order, excluding `var`.
    fn variants(&self) -> &'static [VariantDef];

    /// Chooses the tag recorded for a match. Kinds whose variants denote the
    /// same value in different spellings override this to record one tag.
    fn record_tag(&self, matched: Variant, _values: &[SubValue]) -> Variant {
        matched
    }

    /// Looks up a variant definition by tag, including the shared `var`.
    fn variant_def(&self, tag: Variant) -> Option<&'static VariantDef> {
        if tag == Variant::Var {
            return Some(&VAR);
        }
        self.variants().iter().find(|def| def.tag == tag)
    }

    /// Matches the start of `input` (leading whitespace ignored) and returns
    /// the remaining text with the decoded composite.
    fn decode<'a>(&self, input: &'a str) -> Option<(&'a str, CompositeValue)> {
        let input = input.trim_start();
        for def in std::iter::once(&VAR).chain(self.variants()) {
            let Ok((rest, values)) = (def.matcher)(input) else {
                continue;
            };
            if !at_boundary(rest) {
                continue;
            }
            let variant = self.record_tag(def.tag, &values);
            trace!(
                "{} matched {} as {} ({} bytes)",
                self.kind(),
                def.tag,
                variant,
                input.len() - rest.len()
            );
            return Some((rest, CompositeValue::new(self.kind(), variant, values)));
        }
        None
    }

    /// Renders a composite through its variant's template.
    fn encode(&self, value: &CompositeValue) -> String {
        match self.variant_def(value.variant) {
            Some(def) => def.template.render(def.sub_slots, &value.values),
            None => EncodeTemplate::Concat.render(&[], &value.values),
        }
    }
}

// ============================================================================
// SHARED
// ============================================================================

static VAR: VariantDef = VariantDef {
    tag: Variant::Var,
    matcher: match_var,
    sub_slots: &[SlotDef::text("variable")],
    template: EncodeTemplate::Wrap("var(", ")"),
};

fn match_var(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (input, name) = terminated(
        preceded(function_open("var"), take_till1(|c: char| c == ')')),
        char(')'),
    )(input)?;
    Ok((input, vec![SubValue::Text(name.trim().to_string())]))
}

// ============================================================================
// LENGTH
// ============================================================================

pub struct Length;

pub static LENGTH: Length = Length;

static LENGTH_VARIANTS: [VariantDef; 2] = [
    VariantDef {
        tag: Variant::LengthVal,
        matcher: match_length_val,
        sub_slots: &[SlotDef::number("value"), SlotDef::select("unit", LENGTH_UNITS)],
        template: EncodeTemplate::Concat,
    },
    VariantDef {
        tag: Variant::Calc,
        matcher: match_calc,
        sub_slots: &[SlotDef::text("expression")],
        template: EncodeTemplate::Wrap("calc(", ")"),
    },
];

impl CompositeGrammar for Length {
    fn kind(&self) -> CompositeKind {
        CompositeKind::Length
    }

    fn variants(&self) -> &'static [VariantDef] {
        &LENGTH_VARIANTS
    }
}

fn match_length_val(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (rest, value) = parse_number(input)?;
    let unit = LENGTH_UNITS
        .iter()
        .filter(|unit| rest.starts_with(**unit))
        .max_by_key(|unit| unit.len())
        .ok_or_else(|| nom::Err::Error(nom::error::Error::new(rest, nom::error::ErrorKind::Tag)))?;
    Ok((
        &rest[unit.len()..],
        vec![SubValue::Number(value), SubValue::Text(unit.to_string())],
    ))
}

fn match_calc(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (input, expr) = terminated(
        preceded(function_open("calc"), take_till1(|c: char| c == ')')),
        char(')'),
    )(input)?;
    Ok((input, vec![SubValue::Text(expr.trim().to_string())]))
}

// ============================================================================
// COLORDIR
// ============================================================================

pub struct ColorDir;

pub static COLOR_DIR: ColorDir = ColorDir;

const RGBA_SLOTS: &[SlotDef] = &[
    SlotDef::number("red"),
    SlotDef::number("green"),
    SlotDef::number("blue"),
    SlotDef::number("alpha"),
];

static COLOR_VARIANTS: [VariantDef; 5] = [
    VariantDef {
        tag: Variant::Color24,
        matcher: match_color24,
        sub_slots: RGBA_SLOTS,
        template: EncodeTemplate::Color,
    },
    VariantDef {
        tag: Variant::Color12,
        matcher: match_color12,
        sub_slots: RGBA_SLOTS,
        template: EncodeTemplate::Color,
    },
    VariantDef {
        tag: Variant::ColorRgba,
        matcher: match_rgba,
        sub_slots: RGBA_SLOTS,
        template: EncodeTemplate::Color,
    },
    VariantDef {
        tag: Variant::ColorRgb,
        matcher: match_rgb,
        sub_slots: RGBA_SLOTS,
        template: EncodeTemplate::Color,
    },
    VariantDef {
        tag: Variant::ColorName,
        matcher: match_color_name,
        sub_slots: &[
            SlotDef::text("name"),
            // Sort helper for the name picker; carries the color's hex value.
            SlotDef::text("sort by").avoid_in_output(),
        ],
        template: EncodeTemplate::Concat,
    },
];

impl CompositeGrammar for ColorDir {
    fn kind(&self) -> CompositeKind {
        CompositeKind::ColorDir
    }

    fn variants(&self) -> &'static [VariantDef] {
        &COLOR_VARIANTS
    }

    /// Numeric colors record the tag of the form the encoder produces.
    fn record_tag(&self, matched: Variant, values: &[SubValue]) -> Variant {
        match matched {
            Variant::Color24 | Variant::Color12 | Variant::ColorRgba | Variant::ColorRgb => {
                let alpha = values.get(3).and_then(SubValue::as_number).unwrap_or(1.0);
                if alpha == 1.0 {
                    Variant::Color24
                } else {
                    Variant::ColorRgba
                }
            }
            other => other,
        }
    }
}

fn rgba_values(color: RgbaColor) -> Vec<SubValue> {
    vec![
        SubValue::Number(f64::from(color.r)),
        SubValue::Number(f64::from(color.g)),
        SubValue::Number(f64::from(color.b)),
        SubValue::Number(color.a),
    ]
}

fn hex_color(input: &str, digits: usize) -> IResult<&str, Vec<SubValue>> {
    let (rest, hex) = preceded(
        char('#'),
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
    )(input)?;
    let color = RgbaColor::from_hex(hex).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::HexDigit))
    })?;
    Ok((rest, rgba_values(color)))
}

fn match_color24(input: &str) -> IResult<&str, Vec<SubValue>> {
    hex_color(input, 6)
}

fn match_color12(input: &str) -> IResult<&str, Vec<SubValue>> {
    hex_color(input, 3)
}

fn component(input: &str) -> IResult<&str, f64> {
    verify(parse_number, |n: &f64| *n >= 0.0)(input)
}

fn match_rgba(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (input, _) = function_open("rgba")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, r) = component(input)?;
    let (input, g) = preceded(comma, component)(input)?;
    let (input, b) = preceded(comma, component)(input)?;
    let (input, a) = preceded(comma, component)(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, rgba_values(RgbaColor::from_components(r, g, b, a))))
}

fn match_rgb(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (input, _) = function_open("rgb")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, r) = component(input)?;
    let (input, g) = preceded(comma, component)(input)?;
    let (input, b) = preceded(comma, component)(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, rgba_values(RgbaColor::from_components(r, g, b, 1.0))))
}

fn match_color_name(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (rest, name) = alpha1(input)?;
    let color = RgbaColor::named(name).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag))
    })?;
    Ok((
        rest,
        vec![SubValue::Text(name.to_string()), SubValue::Text(color.to_hex())],
    ))
}

// ============================================================================
// IMAGE
// ============================================================================

pub struct Image;

pub static IMAGE: Image = Image;

static IMAGE_VARIANTS: [VariantDef; 2] = [
    VariantDef {
        tag: Variant::File,
        matcher: match_file,
        sub_slots: &[SlotDef::file_path("data")],
        template: EncodeTemplate::Url,
    },
    VariantDef {
        tag: Variant::Url,
        matcher: match_url,
        sub_slots: &[SlotDef::url("url")],
        template: EncodeTemplate::Url,
    },
];

impl CompositeGrammar for Image {
    fn kind(&self) -> CompositeKind {
        CompositeKind::Image
    }

    fn variants(&self) -> &'static [VariantDef] {
        &IMAGE_VARIANTS
    }
}

fn url_target(input: &str) -> IResult<&str, &str> {
    let (input, _) = alt((tag("url"), tag("URL")))(input)?;
    let (input, _) = multispace0(input)?;
    delimited(
        terminated(char('('), multispace0),
        verify(parse_quoted, |s: &str| !s.is_empty()),
        preceded(multispace0, char(')')),
    )(input)
}

fn match_file(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (rest, target) = verify(url_target, |s: &str| s.starts_with("data:"))(input)?;
    Ok((rest, vec![SubValue::Text(target.to_string())]))
}

fn match_url(input: &str) -> IResult<&str, Vec<SubValue>> {
    let (rest, target) = url_target(input)?;
    Ok((rest, vec![SubValue::Text(target.to_string())]))
}
