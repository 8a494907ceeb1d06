//! Photo attachment handling
//!
//! Client-side size gate and transport encoding for the optional delegate
//! photo. The collaborator endpoint decodes the base64 payload and stores
//! it in its content store.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{RegResult, RegistrationError};

/// Uploads strictly larger than this are rejected before any encoding work.
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

/// An encoded photo ready for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    /// Base64-encoded file contents
    pub data: String,
    /// Original filename
    pub name: String,
    /// MIME type derived from the filename extension
    pub mime: String,
}

/// Enforce the 2 MB gate. Exactly 2 MB is accepted.
pub fn check_size(size: u64) -> RegResult<()> {
    if size > MAX_PHOTO_BYTES {
        return Err(RegistrationError::PhotoTooLarge {
            size,
            limit: MAX_PHOTO_BYTES,
        });
    }
    Ok(())
}

/// MIME type for a filename, by extension.
pub fn mime_for_filename(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Build an attachment from raw file bytes, enforcing the size gate first.
pub fn attachment_from_bytes(name: &str, bytes: &[u8]) -> RegResult<PhotoAttachment> {
    check_size(bytes.len() as u64)?;
    Ok(PhotoAttachment {
        data: STANDARD.encode(bytes),
        name: name.to_string(),
        mime: mime_for_filename(name).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_megabytes_is_accepted() {
        assert!(check_size(MAX_PHOTO_BYTES).is_ok());
    }

    #[test]
    fn one_byte_over_is_rejected() {
        let err = check_size(MAX_PHOTO_BYTES + 1).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::PhotoTooLarge { size, .. } if size == MAX_PHOTO_BYTES + 1
        ));
    }

    #[test]
    fn mime_by_extension() {
        assert_eq!(mime_for_filename("me.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("me.png"), "image/png");
        assert_eq!(mime_for_filename("me.gif"), "image/gif");
        assert_eq!(mime_for_filename("mystery"), "application/octet-stream");
    }

    #[test]
    fn attachment_encodes_base64() {
        let att = attachment_from_bytes("selfie.png", b"hello").unwrap();
        assert_eq!(att.data, "aGVsbG8=");
        assert_eq!(att.name, "selfie.png");
        assert_eq!(att.mime, "image/png");
    }

    #[test]
    fn oversized_attachment_is_rejected_before_encoding() {
        let bytes = vec![0u8; (MAX_PHOTO_BYTES + 1) as usize];
        assert!(attachment_from_bytes("big.png", &bytes).is_err());
    }
}
