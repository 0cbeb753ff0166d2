//! Resume and job description loading with a per-path text cache

use crate::error::ExtractionError;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, ExtractionResult, MarkdownExtractor, PdfExtractor, PlainTextExtractor,
    TextExtractor,
};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SUPPORTED_LIST: &str = "pdf, docx, txt, md";

/// Loads document text by extension. Extracted text is trimmed and, unless
/// caching is turned off, remembered per path for the life of the manager.
#[derive(Default)]
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    cache_disabled: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(self, enabled: bool) -> Self {
        Self {
            cache_disabled: !enabled,
            ..self
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> ExtractionResult<String> {
        if let Some(text) = self.cache.get(path) {
            debug!("{} served from cache", path.display());
            return Ok(text.clone());
        }

        // Type is checked before existence, so a missing .xyz file is
        // reported as unsupported rather than not found.
        let file_type = supported_file_type(path)?;
        if !path.exists() {
            return Err(ExtractionError::NotFound(path.display().to_string()));
        }

        let raw = read_document(file_type, path).await?;
        let text = raw.trim().to_string();
        debug!("{:?} {} yielded {} characters", file_type, path.display(), text.len());

        if !self.cache_disabled {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn supported_file_type(path: &Path) -> ExtractionResult<FileType> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ExtractionError::MissingExtension(path.display().to_string()))?;

    match FileType::from_extension(extension) {
        FileType::Unknown => Err(ExtractionError::UnsupportedFormat(format!(
            "{} (supported: {})",
            path.display(),
            SUPPORTED_LIST
        ))),
        file_type => Ok(file_type),
    }
}

async fn read_document(file_type: FileType, path: &Path) -> ExtractionResult<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Docx => DocxExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(ExtractionError::UnsupportedFormat(path.display().to_string())),
    }
}
