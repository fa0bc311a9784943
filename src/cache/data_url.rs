// Data URL encoding for cached images.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::api::ImagePayload;

/// MIME type used when the image origin does not report one.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode raw image bytes as a `data:<mime>;base64,<payload>` URL.
pub fn encode(payload: &ImagePayload) -> String {
    let mime = payload
        .content_type
        .as_deref()
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(FALLBACK_MIME);

    format!("data:{};base64,{}", mime, BASE64.encode(&payload.bytes))
}

/// Split a base64 data URL into its MIME type and decoded size in bytes.
/// Returns None for anything that is not a base64 data URL.
pub fn describe(source: &str) -> Option<(&str, usize)> {
    let rest = source.strip_prefix("data:")?;
    let (mime, encoded) = rest.split_once(";base64,")?;
    let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
    let size = (encoded.len() / 4 * 3).saturating_sub(padding);
    Some((mime, size))
}

/// Format a byte count for display.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_content_type() {
        let payload = ImagePayload {
            content_type: Some("image/webp".to_string()),
            bytes: b"abc".to_vec(),
        };
        assert_eq!(encode(&payload), "data:image/webp;base64,YWJj");
    }

    #[test]
    fn test_encode_strips_parameters_and_falls_back() {
        let with_params = ImagePayload {
            content_type: Some("image/png; charset=binary".to_string()),
            bytes: vec![1, 2],
        };
        assert!(encode(&with_params).starts_with("data:image/png;base64,"));

        let missing = ImagePayload {
            content_type: None,
            bytes: vec![1, 2],
        };
        assert!(encode(&missing).starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("data:image/png;base64,YWJj"), Some(("image/png", 3)));
        assert_eq!(describe("data:image/png;base64,YQ=="), Some(("image/png", 1)));
        assert_eq!(describe("https://cdn.example/a.png"), None);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
