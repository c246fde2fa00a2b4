//! Text processing and scoring module

pub mod document;
pub mod sections;
pub mod ats_scorer;
pub mod recommendations;

pub use ats_scorer::{AnalysisResult, AtsScorer, Rating, ScoreBreakdown};
pub use document::ResumeText;
pub use sections::{ResumeSection, SectionFlags};
