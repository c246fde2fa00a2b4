//! Resume section detection

use crate::error::{Result, ResumeAtsError};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Experience,
    Education,
    Skills,
    Contact,
    Summary,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 5] = [
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
        ResumeSection::Contact,
        ResumeSection::Summary,
    ];

    /// Synonyms that mark the section anywhere in the text
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            ResumeSection::Experience => &["experience", "work history", "employment"],
            ResumeSection::Education => &["education", "academic", "degree"],
            ResumeSection::Skills => &["skills", "technical", "competencies"],
            ResumeSection::Contact => &["email", "phone", "linkedin"],
            ResumeSection::Summary => &["summary", "objective", "profile"],
        }
    }
}

impl std::fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResumeSection::Experience => write!(f, "Experience"),
            ResumeSection::Education => write!(f, "Education"),
            ResumeSection::Skills => write!(f, "Skills"),
            ResumeSection::Contact => write!(f, "Contact"),
            ResumeSection::Summary => write!(f, "Summary"),
        }
    }
}

/// Which sections were found in one resume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub contact: bool,
    pub summary: bool,
}

impl SectionFlags {
    pub fn get(&self, section: ResumeSection) -> bool {
        match section {
            ResumeSection::Experience => self.experience,
            ResumeSection::Education => self.education,
            ResumeSection::Skills => self.skills,
            ResumeSection::Contact => self.contact,
            ResumeSection::Summary => self.summary,
        }
    }

    fn set(&mut self, section: ResumeSection, found: bool) {
        match section {
            ResumeSection::Experience => self.experience = found,
            ResumeSection::Education => self.education = found,
            ResumeSection::Skills => self.skills = found,
            ResumeSection::Contact => self.contact = found,
            ResumeSection::Summary => self.summary = found,
        }
    }

    pub fn count(&self) -> usize {
        ResumeSection::ALL.iter().filter(|s| self.get(**s)).count()
    }

    pub fn missing(&self) -> Vec<ResumeSection> {
        ResumeSection::ALL.into_iter().filter(|s| !self.get(*s)).collect()
    }
}

pub struct SectionDetector {
    patterns: Vec<(ResumeSection, Regex)>,
}

impl SectionDetector {
    pub fn new() -> Result<Self> {
        let patterns = ResumeSection::ALL
            .into_iter()
            .map(|section| {
                let pattern = format!("(?i){}", section.synonyms().join("|"));
                Regex::new(&pattern).map(|regex| (section, regex)).map_err(|e| {
                    ResumeAtsError::Processing(format!(
                        "Invalid {} section pattern: {}",
                        section, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Case-insensitive search over the raw text
    pub fn detect(&self, text: &str) -> SectionFlags {
        let mut flags = SectionFlags::default();
        for (section, regex) in &self.patterns {
            flags.set(*section, regex.is_match(text));
        }
        flags
    }
}
