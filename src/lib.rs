//! # cssedit - editing session for style-sheet text
//!
//! [`CssEdit`] holds one parsed style sheet and exposes what an editor UI
//! needs: decode a property into form slots, apply an edited value, keep
//! custom declarations as free text, embed images, and render the sheet for
//! a live preview. The text handling itself lives in [`stylecodec`].
//!
//! ```rust
//! use cssedit::{CssEdit, EditorOptions};
//!
//! let mut edit = CssEdit::with_options(EditorOptions::default());
//! edit.load_from_text(".card { box-shadow: 1px 1px 1px 1px red; }").unwrap();
//!
//! let text = edit.render_text();
//! assert!(text.contains(".card.cssedit-editable-selected {"));
//!
//! // Rendered text loads back to the same model.
//! let mut again = CssEdit::new();
//! again.load_from_text(&text).unwrap();
//! assert_eq!(again.model(), edit.model());
//! ```

pub mod error;
pub mod image;
pub mod options;
pub mod session;

pub use error::{EditError, Result};
pub use options::EditorOptions;
pub use session::CssEdit;

pub use stylecodec;
