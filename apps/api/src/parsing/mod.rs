//! Resume Parsing Interface: turns an uploaded document into `ResumeData`.
//!
//! Text extraction itself is an external capability. This module owns the
//! contract around it: upload validation, the pluggable `ResumeParser` trait,
//! and the `parse_document` pipeline that guarantees callers only ever see a
//! fully populated resume or a `ParseError`.
//!
//! `AppState` holds an `Arc<dyn ResumeParser>`, chosen at startup via config.

pub mod fixture;
pub mod upload;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::ResumeData;

pub use fixture::{FailingParser, FixtureParser};
pub use upload::{validate_upload, MediaType, UploadedDocument, MAX_UPLOAD_BYTES};

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unsupported file format '{declared_type}'. Please upload a PDF or DOCX file")]
    UnsupportedFormat { declared_type: String },

    #[error("File exceeds the {limit} byte size limit ({size} bytes received)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to parse resume: {0}")]
    ParseFailure(String),
}

/// The parser trait. Implement this to plug in an extraction backend without
/// touching the handlers or the editor.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Extracts a resume from an already validated document.
    async fn parse(
        &self,
        document: &UploadedDocument,
        media_type: MediaType,
    ) -> Result<ResumeData, ParseError>;
}

/// Runs the full parsing contract: validate, extract (bounded by `timeout`),
/// then verify the result is fully populated.
///
/// Validation failures are returned before the parser is invoked.
pub async fn parse_document(
    parser: &dyn ResumeParser,
    document: &UploadedDocument,
    timeout: Duration,
) -> Result<ResumeData, ParseError> {
    let media_type = validate_upload(&document.declared_type, document.size)?;

    let data = match tokio::time::timeout(timeout, parser.parse(document, media_type)).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(
                "Parser '{}' timed out after {}s",
                parser.name(),
                timeout.as_secs()
            );
            return Err(ParseError::ParseFailure(format!(
                "extraction did not finish within {}s",
                timeout.as_secs()
            )));
        }
    };

    if let Err(problems) = data.check_integrity() {
        warn!(
            "Parser '{}' returned an incomplete resume: {}",
            parser.name(),
            problems.join("; ")
        );
        return Err(ParseError::ParseFailure(problems.join("; ")));
    }

    info!(
        "Parsed {:?} '{}' ({} bytes) with '{}': {} experience, {} education, {} skills",
        media_type,
        document.file_name.as_deref().unwrap_or("<unnamed>"),
        document.size,
        parser.name(),
        data.experience.len(),
        data.education.len(),
        data.skills.len()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts invocations so tests can prove validation happens first.
    struct CountingParser {
        calls: AtomicUsize,
        output: ResumeData,
    }

    #[async_trait]
    impl ResumeParser for CountingParser {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn parse(
            &self,
            _document: &UploadedDocument,
            _media_type: MediaType,
        ) -> Result<ResumeData, ParseError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output.clone())
        }
    }

    struct SlowParser;

    #[async_trait]
    impl ResumeParser for SlowParser {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn parse(
            &self,
            _document: &UploadedDocument,
            _media_type: MediaType,
        ) -> Result<ResumeData, ParseError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ResumeData::placeholder())
        }
    }

    fn counting(output: ResumeData) -> CountingParser {
        CountingParser {
            calls: AtomicUsize::new(0),
            output,
        }
    }

    fn pdf_of_size(size: usize) -> UploadedDocument {
        let mut content = b"%PDF-1.7\n".to_vec();
        content.resize(size, b' ');
        UploadedDocument::new(
            Some("resume.pdf".to_string()),
            upload::PDF_MIME,
            Bytes::from(content),
        )
    }

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_png_rejected_before_parser_runs() {
        let parser = counting(ResumeData::placeholder());
        let doc = UploadedDocument::new(None, "image/png", Bytes::from_static(b"\x89PNG"));

        let err = parse_document(&parser, &doc, TIMEOUT).await.unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat { .. }));
        assert_eq!(parser.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_rejected_before_parser_runs() {
        let parser = counting(ResumeData::placeholder());
        let doc = pdf_of_size(MAX_UPLOAD_BYTES as usize + 1);

        let err = parse_document(&parser, &doc, TIMEOUT).await.unwrap_err();
        assert_eq!(
            err,
            ParseError::FileTooLarge {
                size: MAX_UPLOAD_BYTES + 1,
                limit: MAX_UPLOAD_BYTES
            }
        );
        assert_eq!(parser.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let parser = counting(ResumeData::placeholder());
        let doc = pdf_of_size(MAX_UPLOAD_BYTES as usize);

        assert!(parse_document(&parser, &doc, TIMEOUT).await.is_ok());
        assert_eq!(parser.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_incomplete_parser_output_becomes_parse_failure() {
        let mut partial = ResumeData::placeholder();
        partial.experience.clear();
        let parser = counting(partial);

        let err = parse_document(&parser, &pdf_of_size(64), TIMEOUT)
            .await
            .unwrap_err();
        match err {
            ParseError::ParseFailure(msg) => assert!(msg.contains("experience")),
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_parse_failure() {
        let err = parse_document(&SlowParser, &pdf_of_size(64), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ParseError::ParseFailure(_)));
    }

    #[tokio::test]
    async fn test_two_megabyte_pdf_parses_with_fixture() {
        let doc = pdf_of_size(2 * 1024 * 1024);
        let data = parse_document(&FixtureParser, &doc, TIMEOUT).await.unwrap();

        assert!(!data.personal_info.name.is_empty());
        assert!(!data.experience.is_empty());
    }

    #[tokio::test]
    async fn test_failing_parser_surfaces_parse_failure() {
        let parser = FailingParser::new("extraction engine offline");
        let err = parse_document(&parser, &pdf_of_size(64), TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::ParseFailure("extraction engine offline".to_string())
        );
    }
}
