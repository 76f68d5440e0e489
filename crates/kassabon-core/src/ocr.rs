//! Boundary types for the external text-recognition service.
//!
//! OCR itself lives outside this crate; collaborators hand recognized text
//! across this seam. Blank recognition output is rejected here, so the
//! parser never sees an empty input and has no "no receipt" state to
//! represent.

use crate::error::OcrError;

/// External text-recognition service, e.g. a vision API client.
pub trait TextRecognizer {
    /// Recognize the text in a photographed receipt.
    fn recognize_text(&self, image: &[u8]) -> Result<RecognizedText, OcrError>;
}

/// Non-blank OCR output, validated at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Wrap raw OCR output, rejecting blank text with [`OcrError::NoText`].
    pub fn new(text: impl Into<String>) -> Result<Self, OcrError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(OcrError::NoText);
        }
        Ok(Self(text))
    }

    /// The recognized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_text() {
        assert!(matches!(RecognizedText::new(""), Err(OcrError::NoText)));
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert!(matches!(RecognizedText::new("  \n\t "), Err(OcrError::NoText)));
    }

    #[test]
    fn test_accepts_text() {
        let text = RecognizedText::new("JUMBO\nMelk 1,29").unwrap();
        assert_eq!(text.as_str(), "JUMBO\nMelk 1,29");
    }
}
