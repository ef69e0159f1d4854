//! Text extraction from resume file formats

use crate::error::{AtsCheckerError, Result};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

/// Body part of an OOXML word-processing package.
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));
static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("Invalid blank line regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsCheckerError::PdfExtraction(format!("'{}': {}", path.display(), e))
        })
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let xml = Self::document_xml(bytes)
            .map_err(|e| AtsCheckerError::DocxExtraction(format!("'{}': {}", path.display(), e)))?;
        Ok(Self::xml_to_text(&xml))
    }
}

impl DocxExtractor {
    fn document_xml(bytes: Vec<u8>) -> std::result::Result<String, String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
        let mut part = archive
            .by_name(DOCX_DOCUMENT_PART)
            .map_err(|e| format!("{DOCX_DOCUMENT_PART}: {e}"))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| e.to_string())?;
        Ok(xml)
    }

    /// Paragraph ends become line breaks; runs are joined and markup dropped.
    pub fn xml_to_text(xml: &str) -> String {
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t");
        let text = TAG_REGEX.replace_all(&text, "");
        decode_entities(&text).trim().to_string()
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Render to HTML, then strip tags keeping headings and paragraphs on
    /// their own lines so section headers stay detectable.
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = ["</p>", "</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>", "</ul>", "</ol>"]
            .iter()
            .fold(html_output.replace("<br />", "\n"), |acc, tag| {
                acc.replace(tag, &format!("{tag}\n"))
            });
        let text = TAG_REGEX.replace_all(&text, "");
        let text = decode_entities(&text);

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        BLANK_LINES
            .replace_all(&lines.join("\n"), "\n\n")
            .trim()
            .to_string()
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_xml_to_text() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Experience</w:t></w:r></w:p><w:p><w:r><w:t>Led &amp; built</w:t></w:r><w:r><w:t xml:space="preserve"> APIs</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(DocxExtractor::xml_to_text(xml), "Experience\nLed & built APIs");
    }

    #[test]
    fn test_markdown_headings_stay_on_own_lines() {
        let md = "# Jane Doe\n\n## Experience\n\n- Led a **migration** to Rust\n- Cut costs by 30%\n\n## Skills\n\nRust, SQL";
        let text = MarkdownExtractor::markdown_to_text(md);

        assert!(text.lines().any(|l| l == "Experience"));
        assert!(text.lines().any(|l| l == "Skills"));
        assert!(text.contains("Led a migration to Rust"));
        assert!(!text.contains('<'));
        assert!(!text.contains("\n\n\n"));
    }

    #[tokio::test]
    async fn test_docx_without_document_part_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = DocxExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, AtsCheckerError::DocxExtraction(_)));
        assert!(err.to_string().starts_with("Could not read text from file."));
    }
}
