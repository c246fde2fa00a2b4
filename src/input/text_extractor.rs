//! Text extraction from PDF and DOCX documents

use crate::error::{Result, ResumeAtsError};
use log::{debug, warn};
use pdf_extract::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Converts the raw bytes of one document format into plain text
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let document = Document::load_mem(bytes).map_err(|e| {
            ResumeAtsError::ExtractionFailed(format!("Failed to load PDF: {}", e))
        })?;

        match Self::page_texts(&document) {
            Ok(pages) => Ok(Self::join_pages(&pages)),
            Err(e) => {
                warn!("Per-page PDF extraction failed ({}), using whole-document text", e);
                let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
                    ResumeAtsError::ExtractionFailed(format!(
                        "Failed to extract text from PDF: {}",
                        e
                    ))
                })?;
                Ok(Self::join_pages(&[text]))
            }
        }
    }
}

impl PdfExtractor {
    /// Text of every page, in ascending page order
    fn page_texts(document: &Document) -> Result<Vec<String>> {
        let pages = document.get_pages();
        debug!("PDF has {} pages", pages.len());

        pages
            .keys()
            .map(|&page_number| {
                document.extract_text(&[page_number]).map_err(|e| {
                    ResumeAtsError::ExtractionFailed(format!(
                        "Failed to read page {}: {}",
                        page_number, e
                    ))
                })
            })
            .collect()
    }

    /// Each page's fragments are joined with a single space and every page
    /// ends with a newline.
    pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
        pages
            .iter()
            .map(|page| {
                let mut line = page.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
                line.push('\n');
                line
            })
            .collect()
    }
}

pub struct DocxExtractor;

const DOCUMENT_PART: &str = "word/document.xml";

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            ResumeAtsError::ExtractionFailed(format!("Missing '{}' in DOCX: {}", DOCUMENT_PART, e))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            ResumeAtsError::ExtractionFailed(format!("Failed to read '{}': {}", DOCUMENT_PART, e))
        })?;

        Self::raw_text(&xml)
    }
}

impl DocxExtractor {
    /// Raw text of a WordprocessingML body: runs are concatenated, every
    /// paragraph is followed by a blank line.
    pub fn raw_text(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_run_text = false,
                    b"w:p" => text.push_str("\n\n"),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    b"w:p" => text.push_str("\n\n"),
                    _ => {}
                },
                Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(text)
    }
}
