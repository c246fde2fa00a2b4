//! Report structures wrapping one analysis for presentation

use crate::input::file_detector::FileInfo;
use crate::processing::ats_scorer::{AnalysisResult, Rating, MAX_OPTIMAL_WORDS, MIN_OPTIMAL_WORDS};
use crate::processing::document::ResumeText;
use crate::processing::recommendations::MIN_ACTION_VERBS;
use crate::processing::sections::ResumeSection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to show one finished analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub file: FileInfo,

    pub rating: RatingSummary,

    /// Headline metric cards, in display order
    pub metrics: Vec<MetricCard>,

    /// Raw scoring output
    pub result: AnalysisResult,

    /// Leading slice of the extracted text, if requested
    pub preview: Option<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub rating: Rating,
    pub label: String,
    pub icon: String,
    pub status: MetricStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub status: MetricStatus,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn new(
        file: FileInfo,
        text: &ResumeText,
        result: AnalysisResult,
        preview_chars: Option<usize>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            file,
            rating: RatingSummary::from_rating(result.rating()),
            metrics: metric_cards(&result),
            preview: preview_chars.map(|max| text.preview(max)),
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                processing_time_ms,
            },
        }
    }

    pub fn missing_sections(&self) -> Vec<ResumeSection> {
        self.result.sections.missing()
    }
}

impl RatingSummary {
    pub fn from_rating(rating: Rating) -> Self {
        let (icon, status) = match rating {
            Rating::Excellent => ("🌟", MetricStatus::Good),
            Rating::Good => ("👍", MetricStatus::Good),
            Rating::NeedsImprovement => ("⚠️", MetricStatus::Warning),
            Rating::Poor => ("❌", MetricStatus::Error),
        };

        Self {
            rating,
            label: rating.label().to_string(),
            icon: icon.to_string(),
            status,
        }
    }
}

/// The four headline cards: sections, word count, action verbs, key elements
pub fn metric_cards(result: &AnalysisResult) -> Vec<MetricCard> {
    let sections = result.section_count;
    let (section_status, section_label) = if sections >= 4 {
        (MetricStatus::Good, "Complete")
    } else if sections >= 3 {
        (MetricStatus::Warning, "Acceptable")
    } else {
        (MetricStatus::Error, "Incomplete")
    };

    let words = result.word_count;
    let optimal = MIN_OPTIMAL_WORDS..=MAX_OPTIMAL_WORDS;
    let (length_status, length_label) = if optimal.contains(&words) {
        (MetricStatus::Good, "Optimal")
    } else if words < MIN_OPTIMAL_WORDS {
        (MetricStatus::Warning, "Too Short")
    } else {
        (MetricStatus::Warning, "Too Long")
    };

    let verbs = result.verb_count;
    let (verb_status, verb_label) = if verbs >= MIN_ACTION_VERBS {
        (MetricStatus::Good, "Strong")
    } else if verbs >= 3 {
        (MetricStatus::Warning, "Fair")
    } else {
        (MetricStatus::Error, "Weak")
    };

    let elements = result.format.count();
    let (element_status, element_label) = if elements >= 3 {
        (MetricStatus::Good, "Well Formatted")
    } else {
        (MetricStatus::Warning, "Needs Work")
    };

    vec![
        MetricCard::new(
            "📝 Sections Found",
            format!("{}/{}", sections, ResumeSection::ALL.len()),
            section_status,
            section_label,
        ),
        MetricCard::new("📊 Word Count", words.to_string(), length_status, length_label),
        MetricCard::new("🎯 Action Verbs", verbs.to_string(), verb_status, verb_label),
        MetricCard::new(
            "🔑 Key Elements",
            format!("{}/4", elements),
            element_status,
            element_label,
        ),
    ]
}

impl MetricCard {
    fn new(title: &str, value: String, status: MetricStatus, label: &str) -> Self {
        Self {
            title: title.to_string(),
            value,
            status,
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ats_scorer::AtsScorer;
    use std::path::Path;

    fn analyze(text: &str) -> (ResumeText, AnalysisResult) {
        let text = ResumeText::new(text).unwrap();
        let result = AtsScorer::new().unwrap().analyze(&text);
        (text, result)
    }

    #[test]
    fn test_metric_cards_for_sparse_resume() {
        let (_, result) = analyze("Jane Doe, trained and mentored");
        let cards = metric_cards(&result);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "0/5");
        assert_eq!(cards[0].label, "Incomplete");
        assert_eq!(cards[1].label, "Too Short");
        assert_eq!(cards[1].status, MetricStatus::Warning);
        assert_eq!(cards[2].value, "2");
        assert_eq!(cards[2].label, "Weak");
        assert_eq!(cards[3].value, "0/4");
        assert_eq!(cards[3].label, "Needs Work");
    }

    #[test]
    fn test_metric_thresholds() {
        let (_, result) =
            analyze("experience education skills; achieved improved trained - 2020 a@b.co");
        let cards = metric_cards(&result);

        assert_eq!(cards[0].label, "Acceptable");
        assert_eq!(cards[2].label, "Fair");
        assert_eq!(cards[3].value, "3/4");
        assert_eq!(cards[3].label, "Well Formatted");
    }

    #[test]
    fn test_long_resume_card() {
        let (_, result) = analyze(&vec!["lorem"; 1200].join(" "));
        let cards = metric_cards(&result);
        assert_eq!(cards[1].label, "Too Long");
    }

    #[test]
    fn test_rating_summary() {
        let summary = RatingSummary::from_rating(Rating::NeedsImprovement);
        assert_eq!(summary.label, "Needs Improvement");
        assert_eq!(summary.status, MetricStatus::Warning);
        assert_eq!(RatingSummary::from_rating(Rating::Good).status, MetricStatus::Good);
        assert_eq!(RatingSummary::from_rating(Rating::Poor).icon, "❌");
    }

    #[test]
    fn test_report_preview_is_optional() {
        let (text, result) = analyze("Jane Doe resume text");
        let file = FileInfo::new(Path::new("jane.pdf"), 1024);

        let with_preview = AnalysisReport::new(file.clone(), &text, result.clone(), Some(4), 3);
        assert_eq!(with_preview.preview.as_deref(), Some("Jane..."));
        assert_eq!(with_preview.rating.rating, Rating::Poor);

        let without = AnalysisReport::new(file, &text, result, None, 3);
        assert!(without.preview.is_none());
        assert_eq!(without.missing_sections().len(), 5);
    }
}
