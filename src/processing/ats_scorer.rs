//! ATS (Applicant Tracking System) compatibility scoring

use crate::error::{Result, ResumeAtsError};
use crate::processing::document::ResumeText;
use crate::processing::recommendations::recommend;
use crate::processing::sections::{SectionDetector, SectionFlags};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SECTION_POINTS: u32 = 6;
pub const MAX_SECTION_SCORE: u32 = 30;
pub const MAX_LENGTH_SCORE: u32 = 20;
pub const FORMAT_POINTS: u32 = 5;
pub const MAX_FORMAT_SCORE: u32 = 20;
pub const MATCH_POINTS: u32 = 2;
pub const MAX_KEYWORD_SCORE: u32 = 15;
pub const MAX_VERB_SCORE: u32 = 15;
pub const MAX_TOTAL_SCORE: u32 = 100;

const _: () = assert!(
    MAX_SECTION_SCORE + MAX_LENGTH_SCORE + MAX_FORMAT_SCORE + MAX_KEYWORD_SCORE + MAX_VERB_SCORE
        == MAX_TOTAL_SCORE
);

pub const MIN_OPTIMAL_WORDS: usize = 300;
pub const MAX_OPTIMAL_WORDS: usize = 1000;

pub const PROFESSIONAL_KEYWORDS: [&str; 10] = [
    "managed", "developed", "led", "created", "implemented",
    "achieved", "improved", "analyzed", "designed", "coordinated",
];

pub const ACTION_VERBS: [&str; 10] = [
    "achieved", "improved", "trained", "mentored", "created",
    "designed", "implemented", "launched", "reduced", "increased",
];

/// Structural signals, worth five points each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatFlags {
    pub has_bullets: bool,
    pub has_numbers: bool,
    pub has_email: bool,
    pub has_phone: bool,
}

impl FormatFlags {
    pub fn count(&self) -> usize {
        [self.has_bullets, self.has_numbers, self.has_email, self.has_phone]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub section_score: u32,
    pub length_score: u32,
    pub format_score: u32,
    pub keyword_score: u32,
    pub verb_score: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.section_score
            + self.length_score
            + self.format_score
            + self.keyword_score
            + self.verb_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    pub sections: SectionFlags,
    pub section_count: usize,
    #[serde(flatten)]
    pub format: FormatFlags,
    pub word_count: usize,
    pub keyword_count: usize,
    pub verb_count: usize,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.total_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    /// Boundaries belong to the higher band
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Rating::Excellent,
            60..=79 => Rating::Good,
            40..=59 => Rating::NeedsImprovement,
            _ => Rating::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::NeedsImprovement => "Needs Improvement",
            Rating::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Deterministic resume scorer. Holds only compiled patterns, so one
/// instance can score any number of resumes.
pub struct AtsScorer {
    section_detector: SectionDetector,
    bullet_regex: Regex,
    number_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
    keyword_matcher: AhoCorasick,
    verb_matcher: AhoCorasick,
}

impl AtsScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            section_detector: SectionDetector::new()?,
            bullet_regex: Self::compile(r"[•\-*]")?,
            number_regex: Self::compile(r"[0-9]")?,
            email_regex: Self::compile(r"\S+@\S+\.\S+")?,
            phone_regex: Self::compile(r"[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}")?,
            keyword_matcher: Self::build_matcher(&PROFESSIONAL_KEYWORDS)?,
            verb_matcher: Self::build_matcher(&ACTION_VERBS)?,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| {
            ResumeAtsError::Processing(format!("Invalid pattern '{}': {}", pattern, e))
        })
    }

    fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick> {
        AhoCorasick::new(patterns)
            .map_err(|e| ResumeAtsError::Processing(format!("Failed to build ATS matcher: {}", e)))
    }

    /// Score one resume
    pub fn analyze(&self, text: &ResumeText) -> AnalysisResult {
        let raw = text.as_str();
        let lower = raw.to_lowercase();

        let sections = self.section_detector.detect(raw);
        let section_count = sections.count();

        let word_count = text.word_count();

        let format = FormatFlags {
            has_bullets: self.bullet_regex.is_match(raw),
            has_numbers: self.number_regex.is_match(raw),
            has_email: self.email_regex.is_match(raw),
            has_phone: self.phone_regex.is_match(raw),
        };

        let keyword_count = Self::distinct_matches(&self.keyword_matcher, &lower);
        let verb_count = Self::distinct_matches(&self.verb_matcher, &lower);

        let breakdown = ScoreBreakdown {
            section_score: Self::capped(section_count, SECTION_POINTS, MAX_SECTION_SCORE),
            length_score: Self::length_score(word_count),
            format_score: Self::capped(format.count(), FORMAT_POINTS, MAX_FORMAT_SCORE),
            keyword_score: Self::capped(keyword_count, MATCH_POINTS, MAX_KEYWORD_SCORE),
            verb_score: Self::capped(verb_count, MATCH_POINTS, MAX_VERB_SCORE),
        };

        let recommendations = recommend(&sections, &format, verb_count, word_count)
            .iter()
            .map(|rec| rec.message().to_string())
            .collect();

        AnalysisResult {
            total_score: breakdown.total(),
            breakdown,
            sections,
            section_count,
            format,
            word_count,
            keyword_count,
            verb_count,
            recommendations,
        }
    }

    /// Three-tier step: optimal range, too long, too short
    pub fn length_score(word_count: usize) -> u32 {
        if (MIN_OPTIMAL_WORDS..=MAX_OPTIMAL_WORDS).contains(&word_count) {
            20
        } else if word_count > MAX_OPTIMAL_WORDS {
            15
        } else {
            10
        }
    }

    fn capped(count: usize, points: u32, cap: u32) -> u32 {
        u32::try_from(count)
            .unwrap_or(u32::MAX)
            .saturating_mul(points)
            .min(cap)
    }

    /// Number of distinct patterns occurring anywhere, overlaps included
    fn distinct_matches(matcher: &AhoCorasick, haystack: &str) -> usize {
        matcher
            .find_overlapping_iter(haystack)
            .map(|mat| mat.pattern())
            .collect::<HashSet<_>>()
            .len()
    }
}
