//! Text extraction contract for uploaded documents.
//!
//! The quiz engine never extracts text itself; upload flows hand the
//! document bytes to whatever implementation the host application
//! provides, and a failure here never touches quiz or attempt state.

use std::fmt;

/// Extraction failure, carrying the collaborator's diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub message: String,
}

impl ExtractError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text extraction failed: {}", self.message)
    }
}

impl std::error::Error for ExtractError {}

/// Pulls selectable plain text out of an uploaded document.
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
            String::from_utf8(bytes.to_vec())
                .map_err(|err| ExtractError::new(err.to_string()))
        }
    }

    #[test]
    fn failures_carry_the_diagnostic() {
        let extractor = Utf8Extractor;
        assert_eq!(extractor.extract_text(b"hello").unwrap(), "hello");

        let err = extractor.extract_text(&[0xff, 0xfe]).unwrap_err();
        assert!(err.to_string().starts_with("text extraction failed:"));
    }
}
