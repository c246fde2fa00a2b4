//! Resume ATS compatibility checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod session;

pub use config::Config;
pub use error::{Result, ResumeAtsError};
pub use processing::{AnalysisResult, AtsScorer, ResumeText};
