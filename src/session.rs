//! The editing session driven by the host UI.

use log::debug;
use stylecodec::grammar::property_info;
use stylecodec::parser::{parse_declarations, parse_stylesheet_with_marker};
use stylecodec::serializer::serialize_with;
use stylecodec::{
    CompositeValue, DecodedValue, SelectorGroups, SlotValue, StyleModel, decode_value,
    encode_value,
};

use crate::error::Result;
use crate::image::{check_image, data_url};
use crate::options::EditorOptions;

/// One editable style sheet.
///
/// ```rust
/// use cssedit::CssEdit;
///
/// let mut edit = CssEdit::new();
/// edit.load_from_text(".x { color: #fff; }").unwrap();
///
/// let color = edit.decode_for_editing(".x", "color");
/// edit.apply_edit(".x", "color", &color, true);
/// assert_eq!(edit.declarations_text(".x"), "color: #ffffff;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CssEdit {
    model: StyleModel,
    options: EditorOptions,
}

impl CssEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            model: StyleModel::new(),
            options,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn model(&self) -> &StyleModel {
        &self.model
    }

    /// Replaces the model with the parsed `text`. On error the current model
    /// is kept.
    pub fn load_from_text(&mut self, text: &str) -> Result<()> {
        let model = parse_stylesheet_with_marker(text, &self.options.marker())?;
        debug!("loaded {} selectors", model.len());
        self.model = model;
        Ok(())
    }

    /// Decodes a property for its editor form.
    ///
    /// A property the selector does not have decodes from the table's default
    /// value, so the form starts from something sensible.
    pub fn decode_for_editing(&self, selector: &str, property: &str) -> DecodedValue {
        if let Some(current) = self.model.property(selector, property) {
            return decode_value(property, &current.value);
        }
        match property_info(property) {
            Some(info) => decode_value(property, info.default_value),
            None => DecodedValue::Unparsed(String::new()),
        }
    }

    pub fn is_enabled(&self, selector: &str, property: &str) -> bool {
        self.model
            .property(selector, property)
            .is_some_and(|p| p.enabled)
    }

    /// Encodes an edited value and stores it.
    pub fn apply_edit(
        &mut self,
        selector: &str,
        property: &str,
        value: &DecodedValue,
        enabled: bool,
    ) {
        let text = encode_value(property, value);
        self.model.set_property(selector, property, text, enabled);
    }

    /// Toggles a stored property. Returns false if there is none.
    pub fn set_enabled(&mut self, selector: &str, property: &str, enabled: bool) -> bool {
        let Some(current) = self.model.property(selector, property) else {
            return false;
        };
        let value = current.value.clone();
        self.model.set_property(selector, property, value, enabled);
        true
    }

    pub fn remove_property(&mut self, selector: &str, property: &str) -> bool {
        self.model.remove_property(selector, property).is_some()
    }

    /// Full style-sheet text for the live preview: the editor's own rules
    /// followed by the serialized model.
    pub fn render_text(&self) -> String {
        let mut text = self.header_css();
        text.push_str(&serialize_with(&self.model, &self.options.serialize_options()));
        text
    }

    /// Rules that outline editable objects and highlight the selected one.
    pub fn header_css(&self) -> String {
        let on = self.options.class("editable-on");
        let object = self.options.class("editable-object");
        let selected = self.options.selected_class();
        let editable = &self.options.editable_shadow;
        format!(
            ".{on} .{object} {{ box-shadow: {editable}; cursor: default; }}\n\
             .{on} .{selected} {{ box-shadow: {}, {editable}; cursor: default; }}\n",
            self.options.selected_shadow
        )
    }

    /// Declarations of `selector` whose properties the grammar table does not
    /// know, one `name: value;` per line.
    pub fn custom_text(&self, selector: &str) -> String {
        let Some(rule_set) = self.model.rule_set(selector) else {
            return String::new();
        };
        rule_set
            .iter()
            .filter(|(name, _)| property_info(name).is_none())
            .map(|(name, p)| format!("{name}: {};\n", p.value))
            .collect()
    }

    /// Replaces the custom declarations of `selector` with those in `text`.
    ///
    /// Returns the text that did not parse as declarations. The host shows a
    /// non-blank remainder as an error.
    pub fn apply_custom_text(&mut self, selector: &str, text: &str) -> String {
        let (rest, declarations) = match parse_declarations(text) {
            Ok(parsed) => parsed,
            Err(_) => (text, Vec::new()),
        };

        let rule_set = self.model.rule_set_mut(selector);
        let stale: Vec<String> = rule_set
            .iter()
            .map(|(name, _)| name)
            .filter(|name| property_info(name).is_none())
            .map(str::to_string)
            .collect();
        for name in &stale {
            rule_set.remove(name);
        }
        self.model.merge_declarations(selector, &declarations);

        if !rest.trim().is_empty() {
            debug!("{selector}: custom text left unparsed: {:?}", rest.trim());
        }
        rest.to_string()
    }

    /// Enabled declarations of one selector, one `name: value;` per line.
    pub fn declarations_text(&self, selector: &str) -> String {
        let Some(rule_set) = self.model.rule_set(selector) else {
            return String::new();
        };
        rule_set
            .enabled()
            .map(|(name, p)| format!("{name}: {};\n", p.value))
            .collect()
    }

    /// Adds an empty selector. Empty, duplicate and editor-internal selectors
    /// are refused.
    pub fn add_selector(&mut self, selector: &str) -> bool {
        let selector = selector.trim();
        if selector.is_empty() || selector.contains(&self.options.marker()) {
            return false;
        }
        self.model.add_selector(selector)
    }

    pub fn remove_selector(&mut self, selector: &str) -> bool {
        self.model.remove_selector(selector).is_some()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.model.selectors()
    }

    pub fn get_selectors(&self) -> SelectorGroups {
        self.model.get_selectors()
    }

    /// Builds an image slot that embeds `bytes` as a `data:` URL.
    pub fn embed_image(&self, mime: &str, bytes: &[u8]) -> Result<SlotValue> {
        check_image(mime, bytes.len(), self.options.max_file_size_kb)?;
        Ok(SlotValue::Composite(CompositeValue::image(&data_url(
            mime, bytes,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_enabled_requires_existing_property() {
        let mut edit = CssEdit::new();
        assert!(!edit.set_enabled(".a", "color", true));
        edit.load_from_text(".a { color: red; }").unwrap();
        assert!(edit.set_enabled(".a", "color", false));
        assert!(!edit.is_enabled(".a", "color"));
        assert_eq!(edit.model().property(".a", "color").unwrap().value, "red");
    }

    #[test]
    fn test_unknown_property_default_is_empty_unparsed() {
        let edit = CssEdit::new();
        assert_eq!(
            edit.decode_for_editing(".a", "grid-area"),
            DecodedValue::Unparsed(String::new())
        );
    }
}
