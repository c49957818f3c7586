//! Canonical rule-text output.
//!
//! Selectors are written bucket by bucket (other, class, id) so that, under
//! equal specificity, id rules come last and win. Within a bucket the model
//! order is kept.

use std::fmt::Write as _;

use crate::model::{RuleSet, SelectorKind, StyleModel};

/// Default class of the editor's selected-state companion rule.
pub const DEFAULT_SELECTED_CLASS: &str = "cssedit-editable-selected";

/// Default shadow layer drawn for the selected state.
pub const DEFAULT_SELECTED_SHADOW: &str = "0 0 1px 2px rgba(255,255,0,0.8)";

/// Settings for the selected-state companion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Class appended to a selector for its companion rule, without the dot.
    pub selected_class: String,
    /// Shadow layer placed in front of the author's `box-shadow`.
    pub selected_shadow: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            selected_shadow: DEFAULT_SELECTED_SHADOW.to_string(),
        }
    }
}

/// Serializes the model with default options.
pub fn serialize(model: &StyleModel) -> String {
    serialize_with(model, &SerializeOptions::default())
}

/// Serializes the model.
///
/// Only enabled properties are written, and a selector without any is
/// omitted. A selector with an enabled `box-shadow` gets a companion
/// `selector.<selected_class>` rule whose shadow is the selected layer
/// followed by the author's value.
///
/// ```rust
/// use stylecodec::StyleModel;
/// use stylecodec::serializer::serialize;
///
/// let mut model = StyleModel::new();
/// model.set_property("#b", "color", "red", true);
/// model.set_property(".a", "color", "blue", true);
/// model.set_property("div", "color", "green", true);
///
/// let text = serialize(&model);
/// let order: Vec<_> = text.lines().filter(|l| l.ends_with('{')).collect();
/// assert_eq!(order, ["div {", ".a {", "#b {"]);
/// ```
pub fn serialize_with(model: &StyleModel, options: &SerializeOptions) -> String {
    let groups = model.get_selectors();
    let mut out = String::new();

    for kind in SelectorKind::EMISSION_ORDER {
        for selector in groups.of(kind) {
            if let Some(rule_set) = model.rule_set(selector) {
                write_rule(&mut out, selector, rule_set, options);
            }
        }
    }

    out
}

fn write_rule(out: &mut String, selector: &str, rule_set: &RuleSet, options: &SerializeOptions) {
    if !rule_set.has_enabled() {
        return;
    }

    let _ = writeln!(out, "{selector} {{");
    for (name, property) in rule_set.enabled() {
        let _ = writeln!(out, "\t{name}: {};", property.value);
    }
    out.push_str("}\n");

    if let Some(shadow) = rule_set.get("box-shadow").filter(|p| p.enabled) {
        let _ = writeln!(out, "{selector}.{} {{", options.selected_class);
        let _ = writeln!(out, "\tbox-shadow: {}, {};", options.selected_shadow, shadow.value);
        out.push_str("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_only_selector_is_omitted() {
        let mut model = StyleModel::new();
        model.set_property(".a", "color", "red", false);
        model.add_selector(".empty");
        assert_eq!(serialize(&model), "");
    }

    #[test]
    fn test_disabled_box_shadow_has_no_companion() {
        let mut model = StyleModel::new();
        model.set_property(".a", "box-shadow", "1px 1px 1px 1px red", false);
        model.set_property(".a", "color", "red", true);
        assert_eq!(serialize(&model), ".a {\n\tcolor: red;\n}\n");
    }

    #[test]
    fn test_custom_selected_class() {
        let mut model = StyleModel::new();
        model.set_property("p", "box-shadow", "none", true);
        let options = SerializeOptions {
            selected_class: "sel".into(),
            selected_shadow: "0 0 1px blue".into(),
        };
        assert_eq!(
            serialize_with(&model, &options),
            "p {\n\tbox-shadow: none;\n}\np.sel {\n\tbox-shadow: 0 0 1px blue, none;\n}\n"
        );
    }
}
