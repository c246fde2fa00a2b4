//! Error handling for the resume ATS checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file format: {0}. Please upload PDF or DOCX.")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error(
        "Unable to extract text from file: {0}. \
         If this is a scanned document, re-export it as a text-based PDF."
    )]
    EmptyDocument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),
}

pub type Result<T> = std::result::Result<T, ResumeAtsError>;

impl From<zip::result::ZipError> for ResumeAtsError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeAtsError::ExtractionFailed(format!("DOCX archive error: {}", err))
    }
}

impl From<quick_xml::Error> for ResumeAtsError {
    fn from(err: quick_xml::Error) -> Self {
        ResumeAtsError::ExtractionFailed(format!("DOCX XML error: {}", err))
    }
}
