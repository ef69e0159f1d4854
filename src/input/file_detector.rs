//! File type detection and upload compatibility rules

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MEDIA_TYPE_LEGACY_DOC: &str = "application/msword";
pub const MEDIA_TYPE_TEXT: &str = "text/plain";
pub const MEDIA_TYPE_MARKDOWN: &str = "text/markdown";

/// Upload size cap. Files must be strictly smaller.
pub const MAX_FILE_BYTES: u64 = 2 * 1024 * 1024;

/// Media types an ATS reliably parses.
pub const ATS_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_PDF, MEDIA_TYPE_DOCX];

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Docx,
    LegacyDoc,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "doc" => FileType::LegacyDoc,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            FileType::Pdf => MEDIA_TYPE_PDF,
            FileType::Docx => MEDIA_TYPE_DOCX,
            FileType::LegacyDoc => MEDIA_TYPE_LEGACY_DOC,
            FileType::Text => MEDIA_TYPE_TEXT,
            FileType::Markdown => MEDIA_TYPE_MARKDOWN,
            FileType::Unknown => "application/octet-stream",
        }
    }
}

/// Declared media type and size of the uploaded resume, plus the size cap
/// it is judged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub media_type: String,
    pub size_bytes: u64,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

fn default_max_bytes() -> u64 {
    MAX_FILE_BYTES
}

impl FileMetadata {
    pub fn new(media_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            media_type: media_type.into(),
            size_bytes,
            max_bytes: MAX_FILE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Size cap for messages: whole megabytes when exact, bytes otherwise.
    pub fn max_size_display(&self) -> String {
        const MIB: u64 = 1024 * 1024;
        if self.max_bytes % MIB == 0 {
            format!("{}MB", self.max_bytes / MIB)
        } else {
            format!("{} bytes", self.max_bytes)
        }
    }

    pub fn compatibility(&self) -> FileCompatibility {
        if self.media_type == MEDIA_TYPE_LEGACY_DOC {
            FileCompatibility::LegacyWord
        } else if !ATS_MEDIA_TYPES.contains(&self.media_type.as_str()) {
            FileCompatibility::UnsupportedType
        } else if self.size_bytes >= self.max_bytes {
            FileCompatibility::TooLarge
        } else {
            FileCompatibility::Compatible
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCompatibility {
    Compatible,
    LegacyWord,
    UnsupportedType,
    TooLarge,
}
