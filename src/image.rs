//! Embedded images as `data:` URLs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::error::{EditError, Result};

/// Encodes `bytes` as a base64 `data:` URL of type `mime`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

/// Checks that `mime` is an `image/*` type and `len` fits in `limit_kb`.
pub fn check_image(mime: &str, len: usize, limit_kb: u64) -> Result<()> {
    match mime.split_once('/') {
        Some((top, sub)) if top.eq_ignore_ascii_case("image") && !sub.is_empty() => {}
        _ => {
            return Err(EditError::NotAnImage {
                mime: mime.to_string(),
            });
        }
    }

    let len = len as u64;
    if len > limit_kb.saturating_mul(1024) {
        return Err(EditError::FileTooLarge {
            size_kb: len.div_ceil(1024),
            limit_kb,
        });
    }
    Ok(())
}
