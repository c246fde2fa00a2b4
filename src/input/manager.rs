//! Input manager routing resume files to the right extractor

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::{FileInfo, FileType};
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::processing::document::ResumeText;
use log::{debug, info};
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    max_file_size: Option<u64>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self { max_file_size: None }
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Validate a candidate resume file without reading its contents
    pub async fn inspect(&self, path: &Path) -> Result<FileInfo> {
        if !path.exists() {
            return Err(ResumeAtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = fs::metadata(path).await?.len();
        let info = FileInfo::new(path, size);

        if info.file_type == FileType::Unknown {
            return Err(ResumeAtsError::UnsupportedFormat(info.name));
        }

        if let Some(limit) = self.max_file_size {
            if size > limit {
                return Err(ResumeAtsError::InvalidInput(format!(
                    "{} is {}, above the {:.2} KB limit",
                    info.name,
                    info.display_size(),
                    limit as f64 / 1024.0
                )));
            }
        }

        debug!("Inspected {} ({}, {})", info.name, info.file_type, info.display_size());
        Ok(info)
    }

    /// Read a resume from disk and return its validated text
    pub async fn extract_text(&self, path: &Path) -> Result<ResumeText> {
        let info = self.inspect(path).await?;
        self.read_text(path, &info).await
    }

    /// Extract text from a file that has already passed `inspect`
    pub async fn read_text(&self, path: &Path, info: &FileInfo) -> Result<ResumeText> {
        info!("Extracting text from {}: {}", info.file_type, path.display());
        let bytes = fs::read(path).await?;

        self.extract_from_bytes(&bytes, info.file_type)
    }

    /// Extract and validate text from an in-memory document
    pub fn extract_from_bytes(&self, bytes: &[u8], file_type: FileType) -> Result<ResumeText> {
        let text = match file_type {
            FileType::Pdf => PdfExtractor.extract(bytes)?,
            FileType::Docx => DocxExtractor.extract(bytes)?,
            FileType::Unknown => {
                return Err(ResumeAtsError::UnsupportedFormat(
                    "unrecognized file type".to_string(),
                ));
            }
        };

        debug!("Extracted {} characters of {} text", text.chars().count(), file_type);

        ResumeText::new(text)
    }
}
