//! File input boundary: declared media type and size checks.

use bytes::Bytes;
use serde::Serialize;

use crate::parsing::ParseError;

/// Maximum accepted upload size: 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The document formats the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<MediaType> {
        // Ignore parameters such as "; charset=binary".
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(MediaType::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(MediaType::Docx)
        } else {
            None
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => PDF_MIME,
            MediaType::Docx => DOCX_MIME,
        }
    }
}

/// A document as received at the upload boundary.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub declared_type: String,
    /// Declared size in bytes. Checked before the content is looked at.
    pub size: u64,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(file_name: Option<String>, declared_type: &str, content: Bytes) -> Self {
        Self {
            file_name,
            declared_type: declared_type.to_string(),
            size: content.len() as u64,
            content,
        }
    }
}

/// Checks the declared media type, then the size.
pub fn validate_upload(declared_type: &str, size: u64) -> Result<MediaType, ParseError> {
    let media_type =
        MediaType::from_mime(declared_type).ok_or_else(|| ParseError::UnsupportedFormat {
            declared_type: declared_type.to_string(),
        })?;

    if size > MAX_UPLOAD_BYTES {
        return Err(ParseError::FileTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_and_docx_are_accepted() {
        assert_eq!(validate_upload(PDF_MIME, 10), Ok(MediaType::Pdf));
        assert_eq!(validate_upload(DOCX_MIME, 10), Ok(MediaType::Docx));
    }

    #[test]
    fn test_mime_parameters_are_ignored() {
        assert_eq!(
            MediaType::from_mime("application/PDF; charset=binary"),
            Some(MediaType::Pdf)
        );
    }

    #[test]
    fn test_png_is_unsupported() {
        let err = validate_upload("image/png", 10).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedFormat {
                declared_type: "image/png".to_string()
            }
        );
    }

    #[test]
    fn test_legacy_word_is_unsupported() {
        assert!(matches!(
            validate_upload("application/msword", 10),
            Err(ParseError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_size_boundary() {
        assert!(validate_upload(PDF_MIME, MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload(PDF_MIME, MAX_UPLOAD_BYTES + 1),
            Err(ParseError::FileTooLarge {
                size: 5 * 1024 * 1024 + 1,
                limit: 5 * 1024 * 1024
            })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        assert!(matches!(
            validate_upload("text/plain", MAX_UPLOAD_BYTES * 2),
            Err(ParseError::UnsupportedFormat { .. })
        ));
    }
}
