//! Decoded value types.

use std::fmt;

use crate::grammar::{CompositeKind, Variant};
use crate::types::RgbaColor;

/// One sub-field of a matched composite variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SubValue {
    Number(f64),
    Text(String),
}

impl SubValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SubValue::Number(n) => Some(*n),
            SubValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubValue::Text(s) => Some(s),
            SubValue::Number(_) => None,
        }
    }
}

impl fmt::Display for SubValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubValue::Number(n) => write!(f, "{n}"),
            SubValue::Text(s) => f.write_str(s),
        }
    }
}

/// A matched composite: which kind, which variant, and the variant's
/// sub-values in sub-slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeValue {
    pub kind: CompositeKind,
    pub variant: Variant,
    pub values: Vec<SubValue>,
}

impl CompositeValue {
    pub fn new(kind: CompositeKind, variant: Variant, values: Vec<SubValue>) -> Self {
        Self {
            kind,
            variant,
            values,
        }
    }

    /// Builds a `length_val` composite such as `2px`.
    pub fn length(value: f64, unit: &str) -> Self {
        Self::new(
            CompositeKind::Length,
            Variant::LengthVal,
            vec![SubValue::Number(value), SubValue::Text(unit.to_string())],
        )
    }

    /// Builds a numeric color composite tagged with the form it encodes to.
    pub fn color(color: RgbaColor) -> Self {
        let variant = if color.is_opaque() {
            Variant::Color24
        } else {
            Variant::ColorRgba
        };
        Self::new(
            CompositeKind::ColorDir,
            variant,
            vec![
                SubValue::Number(f64::from(color.r)),
                SubValue::Number(f64::from(color.g)),
                SubValue::Number(f64::from(color.b)),
                SubValue::Number(color.a),
            ],
        )
    }

    /// Builds a `url` or `file` image composite, depending on the target.
    pub fn image(target: &str) -> Self {
        let variant = if target.starts_with("data:") {
            Variant::File
        } else {
            Variant::Url
        };
        Self::new(
            CompositeKind::Image,
            variant,
            vec![SubValue::Text(target.to_string())],
        )
    }

    /// Builds a `var(--name)` reference of the given kind.
    pub fn var(kind: CompositeKind, name: &str) -> Self {
        Self::new(kind, Variant::Var, vec![SubValue::Text(name.to_string())])
    }

    /// The color this composite denotes, for numeric and named colors.
    pub fn to_color(&self) -> Option<RgbaColor> {
        if self.kind != CompositeKind::ColorDir {
            return None;
        }
        match self.variant {
            Variant::ColorName => self
                .values
                .first()
                .and_then(SubValue::as_text)
                .and_then(RgbaColor::named),
            Variant::Var => None,
            _ => {
                let n = |i: usize| self.values.get(i).and_then(SubValue::as_number);
                Some(RgbaColor::from_components(
                    n(0)?,
                    n(1)?,
                    n(2)?,
                    n(3).unwrap_or(1.0),
                ))
            }
        }
    }
}

impl fmt::Display for CompositeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.grammar().encode(self))
    }
}

/// Outcome for one slot of a property's grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    /// The value ended before this slot.
    Absent,
    Text(String),
    Number(f64),
    /// The chosen literal of a select slot.
    Choice(String),
    Checkbox(bool),
    Composite(CompositeValue),
}

impl SlotValue {
    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            SlotValue::Composite(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SlotValue::Absent)
    }
}

/// A property value after decoding.
///
/// `Unparsed` holds text the grammar could not decompose, or the value of a
/// property unknown to the table. It is kept verbatim and encodes back to the
/// same text.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Slots(Vec<SlotValue>),
    Unparsed(String),
}

impl DecodedValue {
    pub fn slots(&self) -> Option<&[SlotValue]> {
        match self {
            DecodedValue::Slots(slots) => Some(slots),
            DecodedValue::Unparsed(_) => None,
        }
    }

    pub fn slots_mut(&mut self) -> Option<&mut Vec<SlotValue>> {
        match self {
            DecodedValue::Slots(slots) => Some(slots),
            DecodedValue::Unparsed(_) => None,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, DecodedValue::Unparsed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_value_display_drops_trailing_zero() {
        assert_eq!(SubValue::Number(2.0).to_string(), "2");
        assert_eq!(SubValue::Number(0.25).to_string(), "0.25");
        assert_eq!(SubValue::Text("em".into()).to_string(), "em");
    }

    #[test]
    fn test_color_constructor_tags_by_alpha() {
        let opaque = CompositeValue::color(RgbaColor::rgb(1, 2, 3));
        assert_eq!(opaque.variant, Variant::Color24);
        assert_eq!(opaque.to_string(), "#010203");

        let faded = CompositeValue::color(RgbaColor::rgba(1, 2, 3, 0.5));
        assert_eq!(faded.variant, Variant::ColorRgba);
        assert_eq!(faded.to_string(), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn test_to_color() {
        let named = CompositeValue::new(
            CompositeKind::ColorDir,
            Variant::ColorName,
            vec![SubValue::Text("red".into()), SubValue::Text("#ff0000".into())],
        );
        assert_eq!(named.to_color(), Some(RgbaColor::rgb(255, 0, 0)));
        assert_eq!(CompositeValue::length(1.0, "px").to_color(), None);
        assert_eq!(
            CompositeValue::var(CompositeKind::ColorDir, "--x").to_color(),
            None
        );
    }

    #[test]
    fn test_image_constructor() {
        assert_eq!(CompositeValue::image("a.png").variant, Variant::Url);
        assert_eq!(
            CompositeValue::image("data:image/gif;base64,R0").variant,
            Variant::File
        );
    }
}
