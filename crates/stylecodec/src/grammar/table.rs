//! The static property table.
//!
//! Maps each editable property to its category, the default value the editor
//! offers when the property is not yet set, and its ordered slot list.
//! Properties missing from this table are "custom": the codec keeps their
//! values verbatim.

use std::fmt;

use crate::grammar::SlotDef;

/// Editor grouping for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Border,
    Background,
    Outline,
    Text,
    Font,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Border => "border",
            Category::Background => "background",
            Category::Outline => "outline",
            Category::Text => "text",
            Category::Font => "font",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammar entry for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: &'static str,
    pub category: Category,
    pub default_value: &'static str,
    pub slots: &'static [SlotDef],
}

/// Looks up a property's grammar entry.
pub fn property_info(name: &str) -> Option<&'static PropertyInfo> {
    PROPERTIES.get(name)
}

/// Looks up a property's slot list.
pub fn slots_for(name: &str) -> Option<&'static [SlotDef]> {
    property_info(name).map(|info| info.slots)
}

/// Iterates all known properties in table order.
pub fn properties() -> impl Iterator<Item = &'static PropertyInfo> {
    PROPERTIES.values()
}

// ============================================================================
// ENUMERATED LITERALS
// ============================================================================

const BORDER_STYLES: &[&str] = &[
    "solid", "none", "hidden", "dotted", "dashed", "double", "ridge", "groove", "outset", "inset",
];

const BACKGROUND_SIZES: &[&str] = &["cover", "auto", "contain"];

const BACKGROUND_REPEATS: &[&str] = &["repeat", "no-repeat", "round", "space", "repeat-x", "repeat-y"];

const BACKGROUND_ATTACHMENTS: &[&str] = &["local", "scroll", "fixed"];

const HORIZONTAL_POSITIONS: &[&str] = &["left", "center", "right"];

const VERTICAL_POSITIONS: &[&str] = &["top", "center", "bottom"];

const BOXES: &[&str] = &["padding-box", "border-box", "content-box"];

const OVERFLOWS: &[&str] = &["auto", "hidden", "visible", "scroll"];

const WRITING_MODES: &[&str] = &["vertical-rl", "horizontal-tb", "vertical-lr"];

const DISPLAYS: &[&str] = &[
    "none",
    "inline",
    "block",
    "list-item",
    "inline-block",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "table-cell",
    "table-row",
    "table-column",
    "table-caption",
    "table-row-group",
    "table-header-group",
    "table-footer-group",
    "table-column-group",
    "compact",
    "run-in",
    "ruby",
    "ruby-base",
    "ruby-text",
];

const BORDER_COLLAPSES: &[&str] = &["collapse", "separate"];

const POSITIONS: &[&str] = &["static", "relative", "absolute", "fixed"];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "start", "end", "justify"];

const VERTICAL_ALIGNS: &[&str] = &["top", "middle", "bottom", "baseline"];

const WHITE_SPACES: &[&str] = &["normal", "pre", "nowrap", "pre-wrap", "pre-line"];

const WORD_BREAKS: &[&str] = &["normal", "break-all", "keep-all"];

const TEXT_JUSTIFIES: &[&str] = &[
    "auto",
    "inter-ideograph",
    "newspaper",
    "inter-cluster",
    "kashida",
    "inter-word",
    "distribute",
    "distribute-all-lines",
];

const FONT_WEIGHTS: &[&str] = &[
    "normal", "bold", "bolder", "lighter", "100", "200", "300", "400", "500", "600", "700", "800",
    "900",
];

const FONT_STYLES: &[&str] = &["normal", "italic", "oblique"];

const FONT_FAMILIES: &[&str] = &[
    "\"Yu Gothic\", YuGothic, \"Hiragino Kaku Gothic Pro\", Osaka, sans-serif",
    "Meiryo, \"Hiragino Kaku Gothic Pro\", Osaka, sans-serif",
    "\"Hiragino Kaku Gothic ProN\", \"MS PGothic\", Osaka, sans-serif",
    "\"Yu Mincho\", YuMincho, \"Hiragino Mincho ProN\", serif",
    "\"Hiragino Mincho ProN\", \"MS PMincho\", serif",
    "serif",
    "sans-serif",
    "cursive",
    "fantasy",
    "monospace",
];

const FONT_STRETCHES: &[&str] = &[
    "ultra-condensed",
    "extra-condensed",
    "condensed",
    "semi-condensed",
    "normal",
    "semi-expanded",
    "expanded",
    "extra-expanded",
    "ultra-expanded",
];

// ============================================================================
// SHARED SLOT LISTS
// ============================================================================

const ONE_LENGTH: &[SlotDef] = &[SlotDef::length("length")];

const FOUR_SIDES: &[SlotDef] = &[
    SlotDef::length("top"),
    SlotDef::length("right"),
    SlotDef::length("bottom"),
    SlotDef::length("left"),
];

const OVERFLOW: &[SlotDef] = &[SlotDef::select("overflow", OVERFLOWS)];

// ============================================================================
// TABLE
// ============================================================================

static PROPERTIES: phf::OrderedMap<&'static str, PropertyInfo> = phf::phf_ordered_map! {
    // Border
    "border-style" => PropertyInfo {
        name: "border-style",
        category: Category::Border,
        default_value: "solid",
        slots: &[SlotDef::select("line style", BORDER_STYLES)],
    },
    "border-color" => PropertyInfo {
        name: "border-color",
        category: Category::Border,
        default_value: "#808080",
        slots: &[SlotDef::color("color")],
    },
    "border-width" => PropertyInfo {
        name: "border-width",
        category: Category::Border,
        default_value: "1px",
        slots: &[SlotDef::length("width")],
    },
    "border-radius" => PropertyInfo {
        name: "border-radius",
        category: Category::Border,
        default_value: "1em",
        slots: &[SlotDef::length("radius")],
    },
    "box-shadow" => PropertyInfo {
        name: "box-shadow",
        category: Category::Border,
        default_value: "2px 2px 2px 3px rgba(0,0,0,0.5)",
        slots: &[
            SlotDef::length("offset x"),
            SlotDef::length("offset y"),
            SlotDef::length("blur"),
            SlotDef::length("spread"),
            SlotDef::color("shadow color"),
            SlotDef::checkbox("inner shadow", "inset"),
        ],
    },

    // Background
    "background-color" => PropertyInfo {
        name: "background-color",
        category: Category::Background,
        default_value: "transparent",
        slots: &[SlotDef::color("color")],
    },
    "background-image" => PropertyInfo {
        name: "background-image",
        category: Category::Background,
        default_value: "url(\"/none.png\")",
        slots: &[SlotDef::image("image")],
    },
    "background-size" => PropertyInfo {
        name: "background-size",
        category: Category::Background,
        default_value: "contain",
        slots: &[SlotDef::select("size", BACKGROUND_SIZES)],
    },
    "background-repeat" => PropertyInfo {
        name: "background-repeat",
        category: Category::Background,
        default_value: "no-repeat",
        slots: &[SlotDef::select("repeat", BACKGROUND_REPEATS)],
    },
    "background-attachment" => PropertyInfo {
        name: "background-attachment",
        category: Category::Background,
        default_value: "scroll",
        slots: &[SlotDef::select("attachment", BACKGROUND_ATTACHMENTS)],
    },
    "background-position" => PropertyInfo {
        name: "background-position",
        category: Category::Background,
        default_value: "center center",
        slots: &[
            SlotDef::select("horizontal", HORIZONTAL_POSITIONS),
            SlotDef::select("vertical", VERTICAL_POSITIONS),
        ],
    },
    "background-clip" => PropertyInfo {
        name: "background-clip",
        category: Category::Background,
        default_value: "padding-box",
        slots: &[SlotDef::select("box", BOXES)],
    },
    "background-origin" => PropertyInfo {
        name: "background-origin",
        category: Category::Background,
        default_value: "padding-box",
        slots: &[SlotDef::select("box", BOXES)],
    },

    // Outline
    "margin" => PropertyInfo {
        name: "margin",
        category: Category::Outline,
        default_value: "0px 0px 0px 0px",
        slots: FOUR_SIDES,
    },
    "padding" => PropertyInfo {
        name: "padding",
        category: Category::Outline,
        default_value: "0px 0px 0px 0px",
        slots: FOUR_SIDES,
    },
    "overflow" => PropertyInfo {
        name: "overflow",
        category: Category::Outline,
        default_value: "auto",
        slots: OVERFLOW,
    },
    "overflow-x" => PropertyInfo {
        name: "overflow-x",
        category: Category::Outline,
        default_value: "auto",
        slots: OVERFLOW,
    },
    "overflow-y" => PropertyInfo {
        name: "overflow-y",
        category: Category::Outline,
        default_value: "auto",
        slots: OVERFLOW,
    },
    "writing-mode" => PropertyInfo {
        name: "writing-mode",
        category: Category::Outline,
        default_value: "vertical-rl",
        slots: &[SlotDef::select("mode", WRITING_MODES)],
    },
    "width" => PropertyInfo {
        name: "width",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "max-width" => PropertyInfo {
        name: "max-width",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "min-width" => PropertyInfo {
        name: "min-width",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "height" => PropertyInfo {
        name: "height",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "max-height" => PropertyInfo {
        name: "max-height",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "min-height" => PropertyInfo {
        name: "min-height",
        category: Category::Outline,
        default_value: "100px",
        slots: ONE_LENGTH,
    },
    "display" => PropertyInfo {
        name: "display",
        category: Category::Outline,
        default_value: "block",
        slots: &[SlotDef::select("display", DISPLAYS)],
    },
    "border-collapse" => PropertyInfo {
        name: "border-collapse",
        category: Category::Outline,
        default_value: "collapse",
        slots: &[SlotDef::select("collapse", BORDER_COLLAPSES)],
    },
    "border-spacing" => PropertyInfo {
        name: "border-spacing",
        category: Category::Outline,
        default_value: "4px 4px",
        slots: &[SlotDef::length("horizontal"), SlotDef::length("vertical")],
    },
    "position" => PropertyInfo {
        name: "position",
        category: Category::Outline,
        default_value: "static",
        slots: &[SlotDef::select("position", POSITIONS)],
    },
    "top" => PropertyInfo {
        name: "top",
        category: Category::Outline,
        default_value: "0px",
        slots: ONE_LENGTH,
    },
    "bottom" => PropertyInfo {
        name: "bottom",
        category: Category::Outline,
        default_value: "0px",
        slots: ONE_LENGTH,
    },
    "left" => PropertyInfo {
        name: "left",
        category: Category::Outline,
        default_value: "0px",
        slots: ONE_LENGTH,
    },
    "right" => PropertyInfo {
        name: "right",
        category: Category::Outline,
        default_value: "0px",
        slots: ONE_LENGTH,
    },

    // Text
    "line-height" => PropertyInfo {
        name: "line-height",
        category: Category::Text,
        default_value: "1.4em",
        slots: ONE_LENGTH,
    },
    "text-align" => PropertyInfo {
        name: "text-align",
        category: Category::Text,
        default_value: "center",
        slots: &[SlotDef::select("align", TEXT_ALIGNS)],
    },
    "vertical-align" => PropertyInfo {
        name: "vertical-align",
        category: Category::Text,
        default_value: "middle",
        slots: &[SlotDef::select("align", VERTICAL_ALIGNS)],
    },
    "white-space" => PropertyInfo {
        name: "white-space",
        category: Category::Text,
        default_value: "nowrap",
        slots: &[SlotDef::select("white space", WHITE_SPACES)],
    },
    "word-break" => PropertyInfo {
        name: "word-break",
        category: Category::Text,
        default_value: "break-all",
        slots: &[SlotDef::select("word break", WORD_BREAKS)],
    },
    "text-indent" => PropertyInfo {
        name: "text-indent",
        category: Category::Text,
        default_value: "0em",
        slots: ONE_LENGTH,
    },
    "word-spacing" => PropertyInfo {
        name: "word-spacing",
        category: Category::Text,
        default_value: "0.2em",
        slots: ONE_LENGTH,
    },
    "letter-spacing" => PropertyInfo {
        name: "letter-spacing",
        category: Category::Text,
        default_value: "0.1em",
        slots: ONE_LENGTH,
    },
    "text-justify" => PropertyInfo {
        name: "text-justify",
        category: Category::Text,
        default_value: "newspaper",
        slots: &[SlotDef::select("justify", TEXT_JUSTIFIES)],
    },

    // Font
    "color" => PropertyInfo {
        name: "color",
        category: Category::Font,
        default_value: "#202020",
        slots: &[SlotDef::color("color")],
    },
    "font-size" => PropertyInfo {
        name: "font-size",
        category: Category::Font,
        default_value: "1rem",
        slots: &[SlotDef::length("size")],
    },
    "font-weight" => PropertyInfo {
        name: "font-weight",
        category: Category::Font,
        default_value: "500",
        slots: &[SlotDef::select("weight", FONT_WEIGHTS)],
    },
    "font-style" => PropertyInfo {
        name: "font-style",
        category: Category::Font,
        default_value: "italic",
        slots: &[SlotDef::select("style", FONT_STYLES)],
    },
    "font-family" => PropertyInfo {
        name: "font-family",
        category: Category::Font,
        default_value: "sans-serif",
        slots: &[SlotDef::select("family", FONT_FAMILIES)],
    },
    "font-feature-settings" => PropertyInfo {
        name: "font-feature-settings",
        category: Category::Font,
        default_value: "\"pwid\"",
        slots: &[SlotDef::text("features")],
    },
    "font-synthesis" => PropertyInfo {
        name: "font-synthesis",
        category: Category::Font,
        default_value: "weight style",
        slots: &[
            SlotDef::checkbox("synthesize bold", "weight"),
            SlotDef::checkbox("synthesize style", "style"),
        ],
    },
    "font-stretch" => PropertyInfo {
        name: "font-stretch",
        category: Category::Font,
        default_value: "normal",
        slots: &[SlotDef::select("stretch", FONT_STRETCHES)],
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DecodedValue, decode_value};

    #[test]
    fn test_lookup_known_and_unknown() {
        let info = property_info("box-shadow").unwrap();
        assert_eq!(info.category, Category::Border);
        assert_eq!(info.slots.len(), 6);
        assert!(property_info("grid-template-areas").is_none());
    }

    #[test]
    fn test_iteration_follows_table_order() {
        let names: Vec<_> = properties().map(|p| p.name).take(3).collect();
        assert_eq!(names, ["border-style", "border-color", "border-width"]);
    }

    #[test]
    fn test_keys_match_names() {
        for (key, info) in PROPERTIES.entries() {
            assert_eq!(*key, info.name);
        }
    }

    #[test]
    fn test_every_default_value_decodes() {
        for info in properties() {
            assert!(
                !matches!(decode_value(info.name, info.default_value), DecodedValue::Unparsed(_)),
                "default for {} does not decode: {}",
                info.name,
                info.default_value
            );
        }
    }
}
