//! Validated resume text

use crate::error::{Result, ResumeAtsError};
use serde::Serialize;

/// Characters of original text shown in a preview
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Plain-text content of a resume. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResumeText(String);

impl ResumeText {
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();

        if content.trim().is_empty() {
            return Err(ResumeAtsError::EmptyDocument(
                "the document has no embedded text layer".to_string(),
            ));
        }

        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// First `max_chars` characters, with `...` appended when cut short
    pub fn preview(&self, max_chars: usize) -> String {
        match self.0.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}...", &self.0[..byte_index]),
            None => self.0.clone(),
        }
    }
}
