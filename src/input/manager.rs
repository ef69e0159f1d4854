//! Input manager: validates resume files and routes them to an extractor

use crate::error::{AtsCheckerError, Result};
use crate::input::file_detector::{FileMetadata, FileType, MAX_FILE_BYTES};
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Text of a resume file together with the metadata the file checks need.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedResume {
    pub text: String,
    pub metadata: FileMetadata,
}

pub struct InputManager {
    cache: HashMap<String, ExtractedResume>,
    enable_cache: bool,
    max_file_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_file_bytes: MAX_FILE_BYTES,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    /// Validate a resume file and extract its text.
    ///
    /// Rejections happen in order: legacy `.doc`, unsupported type, size at
    /// or above the cap, then text that is empty after extraction.
    pub async fn extract_resume(&mut self, path: &Path) -> Result<ExtractedResume> {
        let key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&key) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        let file_type = FileType::from_path(path);
        match file_type {
            FileType::LegacyDoc => return Err(AtsCheckerError::LegacyWordFormat),
            FileType::Unknown => {
                return Err(AtsCheckerError::UnsupportedFormat(format!(
                    "Got '{}'; the command line also accepts .txt and .md.",
                    path.display()
                )))
            }
            _ => {}
        }

        let size_bytes = tokio::fs::metadata(path)
            .await
            .map_err(|e| {
                AtsCheckerError::InvalidInput(format!("Cannot read '{}': {}", path.display(), e))
            })?
            .len();
        if size_bytes >= self.max_file_bytes {
            return Err(AtsCheckerError::FileTooLarge {
                size_bytes,
                limit_mb: self.max_file_bytes.div_ceil(1024 * 1024),
            });
        }

        let text = self.extract_by_type(&file_type, path).await?;
        if text.trim().is_empty() {
            return Err(AtsCheckerError::EmptyExtraction);
        }
        debug!("Extracted {} characters from {}", text.len(), path.display());

        let extracted = ExtractedResume {
            text,
            metadata: FileMetadata::new(file_type.media_type(), size_bytes)
                .with_max_bytes(self.max_file_bytes),
        };

        if self.enable_cache {
            self.cache.insert(key, extracted.clone());
        }

        Ok(extracted)
    }

    /// Read a job description. Any readable text format is accepted and no
    /// size or type restrictions apply.
    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        let file_type = FileType::from_path(path);
        let text = match file_type {
            FileType::Unknown | FileType::LegacyDoc => PlainTextExtractor.extract(path).await?,
            _ => self.extract_by_type(&file_type, path).await?,
        };
        Ok(text.trim().to_string())
    }

    async fn extract_by_type(&self, file_type: &FileType, path: &Path) -> Result<String> {
        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::LegacyDoc => Err(AtsCheckerError::LegacyWordFormat),
            FileType::Unknown => Err(AtsCheckerError::UnsupportedFormat(format!(
                "Got '{}'.",
                path.display()
            ))),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::MEDIA_TYPE_TEXT;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_legacy_doc_is_rejected_before_reading() {
        let mut manager = InputManager::new();
        let err = manager
            .extract_resume(Path::new("/nonexistent/resume.doc"))
            .await
            .unwrap_err();
        assert!(matches!(err, AtsCheckerError::LegacyWordFormat));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let mut manager = InputManager::new();
        let err = manager
            .extract_resume(Path::new("/nonexistent/resume.rtf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AtsCheckerError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_size_cap_is_exclusive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let mut at_cap = InputManager::new().with_max_file_bytes(64);
        let err = at_cap.extract_resume(&path).await.unwrap_err();
        assert!(matches!(err, AtsCheckerError::FileTooLarge { size_bytes: 64, .. }));

        let mut under_cap = InputManager::new().with_max_file_bytes(65);
        let extracted = under_cap.extract_resume(&path).await.unwrap();
        assert_eq!(extracted.metadata.max_bytes, 65);
    }

    #[tokio::test]
    async fn test_whitespace_only_file_is_empty_extraction() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "  \n\t \n").unwrap();

        let err = InputManager::new().extract_resume(&path).await.unwrap_err();
        assert!(matches!(err, AtsCheckerError::EmptyExtraction));
    }

    #[tokio::test]
    async fn test_metadata_and_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Experience\nLed the platform team").unwrap();

        let mut manager = InputManager::new();
        let extracted = manager.extract_resume(&path).await.unwrap();
        assert_eq!(extracted.metadata.media_type, MEDIA_TYPE_TEXT);
        assert_eq!(extracted.metadata.size_bytes, 32);
        assert_eq!(manager.cache_size(), 1);

        let again = manager.extract_resume(&path).await.unwrap();
        assert_eq!(again, extracted);

        manager.clear_cache();
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_job_description_accepts_any_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posting");
        std::fs::write(&path, "  Rust engineer, Kafka  \n").unwrap();

        let text = InputManager::new().read_job_description(&path).await.unwrap();
        assert_eq!(text, "Rust engineer, Kafka");
    }
}
