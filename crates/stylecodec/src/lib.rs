//! # stylecodec - editable style-rule codec
//!
//! The text side of a CSS-editing widget. This crate turns a block of
//! style-sheet text into an ordered, per-selector model of
//! property/value/enabled triples, decomposes individual values into typed
//! editable slots, re-encodes edited slots into canonical text, and writes the
//! whole model back out with a deterministic selector order.
//!
//! - **Parsing**: [`parse_stylesheet`](parser::parse_stylesheet) builds a [`StyleModel`]
//! - **Grammar**: a static, table-driven slot grammar per property ([`grammar`])
//! - **Codec**: [`decode_value`] / [`encode_value`] between text and [`DecodedValue`]
//! - **Serialization**: [`serialize`](serializer::serialize) with bucketed selector order
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecodec::parser::parse_stylesheet;
//! use stylecodec::serializer::serialize;
//! use stylecodec::{decode_value, encode_value};
//!
//! let model = parse_stylesheet(".x { color: #fff; border-width: 2px; }").unwrap();
//! let color = model.property(".x", "color").unwrap();
//! assert_eq!(color.value, "#fff");
//!
//! let decoded = decode_value("color", &color.value);
//! assert_eq!(encode_value("color", &decoded), "#ffffff");
//!
//! assert_eq!(
//!     serialize(&model),
//!     ".x {\n\tcolor: #fff;\n\tborder-width: 2px;\n}\n"
//! );
//! ```
//!
//! ## Supported Input
//!
//! - Comma-separated selector lists and brace-delimited declaration blocks
//! - `name: value;` declarations, `url("...")` consumed atomically
//! - Block comments (`/* */`), stripped before parsing
//!
//! At-rules, nesting and `!important` are not recognized.
//!
//! ## Modules
//!
//! - [`parser`]: rule-text parsing and selector classification
//! - [`grammar`]: slot and variant definitions, the property table
//! - [`codec`]: decoded value types, decode and encode
//! - [`model`]: the ordered style model
//! - [`serializer`]: canonical re-serialization
//! - [`types`]: color type
//! - [`error`]: error type for malformed input

pub mod codec;
pub mod error;
pub mod grammar;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod types;

pub use codec::{CompositeValue, DecodedValue, SlotValue, SubValue, decode_value, encode_value};
pub use error::CodecError;
pub use model::{Property, RuleSet, SelectorGroups, SelectorKind, StyleModel};
