//! Value grammar: slot and variant definitions.
//!
//! Every known property owns an ordered list of [`SlotDef`]s (see
//! [`table`]). A slot is either primitive or one of three composite kinds,
//! and each composite kind owns an ordered list of [`VariantDef`]s. The codec
//! walks these definitions generically; adding a composite form is a change to
//! the data in [`composite`], not to the decoder.
//!
//! ## Submodules
//!
//! - [`composite`]: the [`CompositeGrammar`] trait, its three implementations
//!   and the variant matchers
//! - [`table`]: the static property table

pub mod composite;
pub mod table;

pub use composite::CompositeGrammar;
pub use table::{Category, PropertyInfo, properties, property_info, slots_for};

use std::fmt;

use bitflags::bitflags;
use nom::IResult;

use crate::codec::SubValue;
use crate::types::RgbaColor;

bitflags! {
    /// Per-slot behavior flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SlotFlags: u8 {
        /// Auxiliary control that never contributes to encoded text.
        const AVOID_IN_OUTPUT = 0b0000_0001;
    }
}

/// The kind of one positional field in a property's value grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Any single token.
    Text,
    /// A single numeric token.
    Number,
    /// A URL token.
    Url,
    /// A file-path token.
    FilePath,
    /// One of the listed literals. Literals may contain spaces.
    Select(&'static [&'static str]),
    /// A flag rendered as the given literal when set.
    Checkbox(&'static str),
    /// A field with several mutually exclusive textual forms.
    Composite(CompositeKind),
}

/// One positional field in a value grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDef {
    pub label: &'static str,
    pub kind: SlotKind,
    pub flags: SlotFlags,
}

impl SlotDef {
    pub const fn new(label: &'static str, kind: SlotKind) -> Self {
        Self {
            label,
            kind,
            flags: SlotFlags::empty(),
        }
    }

    pub const fn text(label: &'static str) -> Self {
        Self::new(label, SlotKind::Text)
    }

    pub const fn number(label: &'static str) -> Self {
        Self::new(label, SlotKind::Number)
    }

    pub const fn url(label: &'static str) -> Self {
        Self::new(label, SlotKind::Url)
    }

    pub const fn file_path(label: &'static str) -> Self {
        Self::new(label, SlotKind::FilePath)
    }

    pub const fn select(label: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(label, SlotKind::Select(values))
    }

    pub const fn checkbox(label: &'static str, literal: &'static str) -> Self {
        Self::new(label, SlotKind::Checkbox(literal))
    }

    pub const fn length(label: &'static str) -> Self {
        Self::new(label, SlotKind::Composite(CompositeKind::Length))
    }

    pub const fn color(label: &'static str) -> Self {
        Self::new(label, SlotKind::Composite(CompositeKind::ColorDir))
    }

    pub const fn image(label: &'static str) -> Self {
        Self::new(label, SlotKind::Composite(CompositeKind::Image))
    }

    /// Marks this slot as an auxiliary control excluded from encoded text.
    pub const fn avoid_in_output(self) -> Self {
        Self {
            flags: self.flags.union(SlotFlags::AVOID_IN_OUTPUT),
            ..self
        }
    }

    pub fn is_avoided(&self) -> bool {
        self.flags.contains(SlotFlags::AVOID_IN_OUTPUT)
    }
}

/// The composite kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    Length,
    ColorDir,
    Image,
}

impl CompositeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeKind::Length => "length",
            CompositeKind::ColorDir => "colordir",
            CompositeKind::Image => "image",
        }
    }

    /// Returns the grammar that matches and renders this kind.
    pub fn grammar(&self) -> &'static dyn CompositeGrammar {
        match self {
            CompositeKind::Length => &composite::LENGTH,
            CompositeKind::ColorDir => &composite::COLOR_DIR,
            CompositeKind::Image => &composite::IMAGE,
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named alternative forms of the composite kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `var(--name)`, shared by every composite kind.
    Var,
    /// Number with a unit, e.g. `2px`.
    LengthVal,
    /// `calc(expr)`.
    Calc,
    /// `#rrggbb`.
    Color24,
    /// `#rgb`.
    Color12,
    /// `rgba(r, g, b, a)`.
    ColorRgba,
    /// `rgb(r, g, b)`.
    ColorRgb,
    /// A named color such as `red`.
    ColorName,
    /// `url("data:...")`.
    File,
    /// `url("...")`.
    Url,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Var => "var",
            Variant::LengthVal => "length_val",
            Variant::Calc => "calc",
            Variant::Color24 => "color24",
            Variant::Color12 => "color12",
            Variant::ColorRgba => "color_rgba",
            Variant::ColorRgb => "color_rgb",
            Variant::ColorName => "color_name",
            Variant::File => "file",
            Variant::Url => "url",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a matched variant renders its sub-values back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeTemplate {
    /// Sub-values concatenated without separator.
    Concat,
    /// Sub-values concatenated and wrapped in a prefix and suffix.
    Wrap(&'static str, &'static str),
    /// `[r, g, b, a]` rendered as `#rrggbb` when opaque, else `rgba(...)`.
    Color,
    /// `url("...")`, or `url('...')` when the target contains a double quote.
    Url,
}

impl EncodeTemplate {
    /// Renders `values` against the variant's sub-slot definitions.
    ///
    /// Sub-values whose sub-slot is flagged [`SlotFlags::AVOID_IN_OUTPUT`]
    /// are skipped.
    pub fn render(&self, sub_slots: &[SlotDef], values: &[SubValue]) -> String {
        match self {
            EncodeTemplate::Concat => concat(sub_slots, values),
            EncodeTemplate::Wrap(prefix, suffix) => {
                format!("{prefix}{}{suffix}", concat(sub_slots, values))
            }
            EncodeTemplate::Color => {
                let component = |i: usize, default: f64| {
                    values.get(i).and_then(SubValue::as_number).unwrap_or(default)
                };
                RgbaColor::from_components(
                    component(0, 0.0),
                    component(1, 0.0),
                    component(2, 0.0),
                    component(3, 1.0),
                )
                .to_string()
            }
            EncodeTemplate::Url => {
                let target = concat(sub_slots, values);
                let quote = if target.contains('"') { '\'' } else { '"' };
                format!("url({quote}{target}{quote})")
            }
        }
    }
}

fn concat(sub_slots: &[SlotDef], values: &[SubValue]) -> String {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| !sub_slots.get(*i).is_some_and(SlotDef::is_avoided))
        .map(|(_, v)| v.to_string())
        .collect()
}

/// Matches a variant at the start of a value and yields its sub-values.
pub type Matcher = fn(&str) -> IResult<&str, Vec<SubValue>>;

/// One named alternative of a composite kind.
#[derive(Clone, Copy)]
pub struct VariantDef {
    pub tag: Variant,
    pub matcher: Matcher,
    pub sub_slots: &'static [SlotDef],
    pub template: EncodeTemplate,
}

impl fmt::Debug for VariantDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDef")
            .field("tag", &self.tag)
            .field("sub_slots", &self.sub_slots)
            .field("template", &self.template)
            .finish()
    }
}
