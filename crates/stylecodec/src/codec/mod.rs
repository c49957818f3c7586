//! Decoding property values into slots and encoding them back to text.
//!
//! One interpreter walks the slot list of a property from the grammar table.
//! Values the grammar cannot decompose, and values of properties the table
//! does not know, come back as [`DecodedValue::Unparsed`] and encode to the
//! exact text they were decoded from.

pub mod value;

pub use value::{CompositeValue, DecodedValue, SlotValue, SubValue};

use log::debug;
use nom::combinator::all_consuming;

use crate::grammar::{SlotDef, SlotKind, slots_for};
use crate::parser::tokens::{at_boundary, next_token, parse_number};

/// Decodes the raw value text of `property` into slot outcomes.
///
/// # Examples
///
/// ```rust
/// use stylecodec::{decode_value, DecodedValue, SlotValue};
///
/// let decoded = decode_value("border-style", "dashed");
/// assert_eq!(
///     decoded,
///     DecodedValue::Slots(vec![SlotValue::Choice("dashed".into())])
/// );
///
/// // Unknown properties are kept verbatim
/// assert_eq!(
///     decode_value("grid-area", "1 / 2"),
///     DecodedValue::Unparsed("1 / 2".into())
/// );
/// ```
pub fn decode_value(property: &str, raw: &str) -> DecodedValue {
    let Some(slots) = slots_for(property) else {
        return DecodedValue::Unparsed(raw.to_string());
    };

    match decode_slots(slots, raw) {
        Some(values) => DecodedValue::Slots(values),
        None => {
            debug!("{property}: value {raw:?} does not fit the grammar, keeping it verbatim");
            DecodedValue::Unparsed(raw.to_string())
        }
    }
}

fn decode_slots(slots: &[SlotDef], raw: &str) -> Option<Vec<SlotValue>> {
    let mut rest = raw;
    let mut values = Vec::with_capacity(slots.len());

    for slot in slots {
        rest = rest.trim_start();
        if rest.is_empty() {
            values.push(match slot.kind {
                SlotKind::Checkbox(_) => SlotValue::Checkbox(false),
                _ => SlotValue::Absent,
            });
            continue;
        }
        let (next, value) = decode_slot(slot, rest)?;
        values.push(value);
        rest = next;
    }

    rest.trim().is_empty().then_some(values)
}

/// Decodes one slot at the start of `input`, which has no leading whitespace.
fn decode_slot<'a>(slot: &SlotDef, input: &'a str) -> Option<(&'a str, SlotValue)> {
    match slot.kind {
        SlotKind::Select(literals) => {
            let literal = literals
                .iter()
                .filter(|lit| input.strip_prefix(**lit).is_some_and(at_boundary))
                .max_by_key(|lit| lit.len())?;
            Some((&input[literal.len()..], SlotValue::Choice(literal.to_string())))
        }
        SlotKind::Checkbox(literal) => match next_token(input) {
            Ok((rest, token)) if token == literal => Some((rest, SlotValue::Checkbox(true))),
            _ => Some((input, SlotValue::Checkbox(false))),
        },
        SlotKind::Number => {
            let (rest, token) = next_token(input).ok()?;
            let (_, n) = all_consuming(parse_number)(token).ok()?;
            Some((rest, SlotValue::Number(n)))
        }
        SlotKind::Text | SlotKind::Url | SlotKind::FilePath => {
            let (rest, token) = next_token(input).ok()?;
            Some((rest, SlotValue::Text(token.to_string())))
        }
        SlotKind::Composite(kind) => {
            let (rest, composite) = kind.grammar().decode(input)?;
            Some((rest, SlotValue::Composite(composite)))
        }
    }
}

/// Encodes slot outcomes back to canonical value text for `property`.
///
/// `Unparsed` text is returned verbatim. Otherwise each slot renders its
/// part; absent slots, unchecked checkboxes and slots flagged
/// [`AVOID_IN_OUTPUT`](crate::grammar::SlotFlags::AVOID_IN_OUTPUT) render
/// nothing, and the remaining parts are joined with single spaces.
pub fn encode_value(property: &str, value: &DecodedValue) -> String {
    let values = match value {
        DecodedValue::Unparsed(text) => return text.clone(),
        DecodedValue::Slots(values) => values,
    };
    let slots = slots_for(property).unwrap_or(&[]);

    values
        .iter()
        .enumerate()
        .filter(|(i, _)| !slots.get(*i).is_some_and(SlotDef::is_avoided))
        .map(|(i, v)| encode_slot(slots.get(i), v))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn encode_slot(slot: Option<&SlotDef>, value: &SlotValue) -> String {
    match value {
        SlotValue::Absent | SlotValue::Checkbox(false) => String::new(),
        SlotValue::Checkbox(true) => match slot.map(|s| s.kind) {
            Some(SlotKind::Checkbox(literal)) => literal.to_string(),
            _ => String::new(),
        },
        SlotValue::Text(text) | SlotValue::Choice(text) => text.clone(),
        SlotValue::Number(n) => n.to_string(),
        SlotValue::Composite(composite) => composite.kind.grammar().encode(composite),
    }
}
