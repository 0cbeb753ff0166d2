//! Text extraction from various file formats

use crate::error::ExtractionError;
use anyhow::Context;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

static DOCX_PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").expect("Invalid paragraph regex"));

static DOCX_TAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:tab\s*/>").expect("Invalid tab regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = ExtractionResult<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> ExtractionResult<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Corrupt {
            path: path.display().to_string(),
            reason: format!("Failed to extract text from PDF: {}", e),
        })
    }
}

/// Reads the main document part of a `.docx` archive.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> ExtractionResult<String> {
        let bytes = fs::read(path).await?;

        let xml = Self::read_document_xml(bytes).map_err(|e| ExtractionError::Corrupt {
            path: path.display().to_string(),
            reason: format!("{:#}", e),
        })?;

        Ok(Self::xml_to_text(&xml))
    }
}

impl DocxExtractor {
    fn read_document_xml(bytes: Vec<u8>) -> anyhow::Result<String> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).context("Not a valid DOCX archive")?;
        let mut part = archive
            .by_name("word/document.xml")
            .context("DOCX archive has no word/document.xml")?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .context("word/document.xml is not valid UTF-8")?;
        Ok(xml)
    }

    /// Paragraphs and line breaks become newlines; all other markup is dropped.
    pub fn xml_to_text(xml: &str) -> String {
        let text = DOCX_PARAGRAPH_END.replace_all(xml, "\n");
        let text = DOCX_TAB.replace_all(&text, "\t");
        let text = HTML_TAG_REGEX.replace_all(&text, "");
        decode_entities(&text)
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> ExtractionResult<String> {
        let bytes = fs::read(path).await?;

        String::from_utf8(bytes).map_err(|e| ExtractionError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> ExtractionResult<String> {
        let markdown_content = PlainTextExtractor.extract(path).await?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html.replace("<br>", "\n").replace("</p>", "\n\n");
        let clean_text = HTML_TAG_REGEX.replace_all(&text, "");

        decode_entities(&clean_text)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Decode the XML/HTML entities emitted by Markdown renderers and Word.
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
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Jane Roe</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">R&amp;D </w:t></w:r><w:r><w:tab/><w:t>Lead</w:t></w:r></w:p></w:body></w:document>"#;

        assert_eq!(DocxExtractor::xml_to_text(xml), "Jane Roe\nR&D \tLead");
    }

    #[test]
    fn test_markdown_html_to_text() {
        let html = "<h2>Skills</h2>\n<p><strong>Rust</strong> &amp; Go</p>\n";
        assert_eq!(MarkdownExtractor.html_to_text(html), "Skills\nRust & Go");
    }

    #[test]
    fn test_entities_decode_ampersand_last() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
