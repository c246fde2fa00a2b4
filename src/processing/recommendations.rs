//! Ordered improvement recommendations

use crate::processing::ats_scorer::{FormatFlags, MAX_OPTIMAL_WORDS, MIN_OPTIMAL_WORDS};
use crate::processing::sections::SectionFlags;
use serde::{Deserialize, Serialize};

/// Fewer action verbs than this triggers a recommendation
pub const MIN_ACTION_VERBS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    AddExperienceSection,
    AddEducationSection,
    AddSkillsSection,
    AddContactInfo,
    UseBulletPoints,
    QuantifyAchievements,
    UseMoreActionVerbs,
    ExpandContent,
    CondenseContent,
    AddSummary,
    WellOptimized,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::AddExperienceSection => "Add a clear \"Experience\" section",
            Recommendation::AddEducationSection => "Include an \"Education\" section",
            Recommendation::AddSkillsSection => "Add a dedicated \"Skills\" section",
            Recommendation::AddContactInfo => "Include complete contact information",
            Recommendation::UseBulletPoints => "Use bullet points for readability",
            Recommendation::QuantifyAchievements => "Quantify achievements with numbers",
            Recommendation::UseMoreActionVerbs => "Use more action verbs",
            Recommendation::ExpandContent => "Expand your resume for details",
            Recommendation::CondenseContent => "Consider condensing content",
            Recommendation::AddSummary => "Add a professional summary at the top",
            Recommendation::WellOptimized => "Great job! Resume is well-optimized",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every rule in order. Never returns an empty list.
pub fn recommend(
    sections: &SectionFlags,
    format: &FormatFlags,
    verb_count: usize,
    word_count: usize,
) -> Vec<Recommendation> {
    let rules = [
        (!sections.experience, Recommendation::AddExperienceSection),
        (!sections.education, Recommendation::AddEducationSection),
        (!sections.skills, Recommendation::AddSkillsSection),
        (!sections.contact, Recommendation::AddContactInfo),
        (!format.has_bullets, Recommendation::UseBulletPoints),
        (!format.has_numbers, Recommendation::QuantifyAchievements),
        (verb_count < MIN_ACTION_VERBS, Recommendation::UseMoreActionVerbs),
        (word_count < MIN_OPTIMAL_WORDS, Recommendation::ExpandContent),
        (word_count > MAX_OPTIMAL_WORDS, Recommendation::CondenseContent),
        (!sections.summary, Recommendation::AddSummary),
    ];

    let mut recommendations: Vec<Recommendation> = rules
        .into_iter()
        .filter_map(|(fired, rec)| fired.then_some(rec))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation::WellOptimized);
    }

    recommendations
}
