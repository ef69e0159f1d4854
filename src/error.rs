//! Error handling for the ATS checker
//!
//! The scoring engine never fails; every variant here belongs to one of the
//! collaborators around it (file validation, extraction, the rewrite service,
//! configuration and report output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Legacy .doc files are not supported. Please use .docx or .pdf.")]
    LegacyWordFormat,

    #[error("Only PDF and DOCX files are allowed. {0}")]
    UnsupportedFormat(String),

    #[error("File size must be under {limit_mb}MB. ({size_bytes} bytes)")]
    FileTooLarge { size_bytes: u64, limit_mb: u64 },

    #[error("Could not extract text from your resume. Please ensure it's a text-based file.")]
    EmptyExtraction,

    #[error("Could not read text from file. PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Could not read text from file. DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Failed to get suggestions. {0}")]
    RewriteService(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsCheckerError>;

impl AtsCheckerError {
    /// Whether the error came from validating the uploaded file rather than
    /// from reading or processing it.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AtsCheckerError::LegacyWordFormat
                | AtsCheckerError::UnsupportedFormat(_)
                | AtsCheckerError::FileTooLarge { .. }
                | AtsCheckerError::EmptyExtraction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let messages = [
            AtsCheckerError::LegacyWordFormat.to_string(),
            AtsCheckerError::UnsupportedFormat("text/html".to_string()).to_string(),
            AtsCheckerError::FileTooLarge { size_bytes: 3_000_000, limit_mb: 2 }.to_string(),
            AtsCheckerError::EmptyExtraction.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(messages[0].contains(".docx or .pdf"));
        assert!(messages[2].contains("under 2MB"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(AtsCheckerError::LegacyWordFormat.is_validation_error());
        assert!(AtsCheckerError::EmptyExtraction.is_validation_error());
        assert!(!AtsCheckerError::RewriteService("timeout".to_string()).is_validation_error());
        assert!(!AtsCheckerError::PdfExtraction("bad xref".to_string()).is_validation_error());
    }
}
