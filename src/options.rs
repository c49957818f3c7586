//! Editor configuration.

use stylecodec::serializer::SerializeOptions;

use crate::error::{EditError, Result};

/// Options for a [`CssEdit`](crate::CssEdit) session.
///
/// ```rust
/// use cssedit::EditorOptions;
///
/// let options = EditorOptions::default().with_internal_prefix("ed-").unwrap();
/// assert_eq!(options.marker(), ".ed-");
/// assert_eq!(options.selected_class(), "ed-editable-selected");
///
/// assert!(EditorOptions::default().with_internal_prefix("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    internal_prefix: String,
    /// Shadow drawn around every editable object.
    pub editable_shadow: String,
    /// Shadow layer drawn around the selected object.
    pub selected_shadow: String,
    /// Largest image accepted by [`embed_image`](crate::CssEdit::embed_image).
    pub max_file_size_kb: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            internal_prefix: "cssedit-".to_string(),
            editable_shadow: "1px 1px 3px 2px rgba(0,0,0,0.18)".to_string(),
            selected_shadow: "0 0 1px 2px rgba(255,255,0,0.8)".to_string(),
            max_file_size_kb: 200,
        }
    }
}

impl EditorOptions {
    /// Sets the class prefix of the editor's own rules. Selectors containing
    /// `.` + prefix never enter the model.
    ///
    /// The prefix must be a non-empty run of class-name characters, otherwise
    /// the marker would match ordinary class selectors.
    pub fn with_internal_prefix(mut self, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let valid = !prefix.is_empty()
            && prefix
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EditError::InvalidPrefix { prefix });
        }
        self.internal_prefix = prefix;
        Ok(self)
    }

    pub fn internal_prefix(&self) -> &str {
        &self.internal_prefix
    }

    pub fn with_editable_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.editable_shadow = shadow.into();
        self
    }

    pub fn with_selected_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.selected_shadow = shadow.into();
        self
    }

    pub fn with_max_file_size_kb(mut self, kb: u64) -> Self {
        self.max_file_size_kb = kb;
        self
    }

    /// Substring identifying editor-injected selectors.
    pub fn marker(&self) -> String {
        format!(".{}", self.internal_prefix)
    }

    /// Class of the selected-state companion rules.
    pub fn selected_class(&self) -> String {
        self.class("editable-selected")
    }

    pub(crate) fn class(&self, name: &str) -> String {
        format!("{}{name}", self.internal_prefix)
    }

    pub fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            selected_class: self.selected_class(),
            selected_shadow: self.selected_shadow.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_codec_defaults() {
        let options = EditorOptions::default();
        assert_eq!(options.marker(), stylecodec::parser::DEFAULT_MARKER);
        assert_eq!(options.serialize_options(), SerializeOptions::default());
    }

    #[test]
    fn test_builders() {
        let options = EditorOptions::default()
            .with_selected_shadow("0 0 1px red")
            .with_editable_shadow("1px 1px blue")
            .with_max_file_size_kb(8);
        assert_eq!(options.serialize_options().selected_shadow, "0 0 1px red");
        assert_eq!(options.editable_shadow, "1px 1px blue");
        assert_eq!(options.max_file_size_kb, 8);
    }

    #[test]
    fn test_prefix_must_be_a_class_name_run() {
        for bad in ["", " ", "a b", "x.", "#id-"] {
            assert_eq!(
                EditorOptions::default().with_internal_prefix(bad),
                Err(EditError::InvalidPrefix { prefix: bad.into() }),
                "{bad:?}"
            );
        }
        let options = EditorOptions::default().with_internal_prefix("ed_2-").unwrap();
        assert_eq!(options.internal_prefix(), "ed_2-");
    }
}
