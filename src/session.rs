//! Analysis session lifecycle
//!
//! One session walks a single resume through
//! idle → file selected → analyzing → result shown | error shown, and back to
//! idle. The scoring engine never sees this state.

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileInfo;
use crate::input::manager::InputManager;
use crate::output::report::AnalysisReport;
use crate::processing::ats_scorer::AtsScorer;
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum SessionState {
    Idle,
    FileSelected(FileInfo),
    Analyzing(FileInfo),
    ResultShown(Box<AnalysisReport>),
    ErrorShown {
        file: Option<FileInfo>,
        message: String,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FileSelected(_) => "file-selected",
            SessionState::Analyzing(_) => "analyzing",
            SessionState::ResultShown(_) => "result-shown",
            SessionState::ErrorShown { .. } => "error-shown",
        }
    }
}

#[derive(Debug)]
pub struct AnalysisSession {
    state: SessionState,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Analyzing(_))
    }

    /// Replaces any previous file, result or error
    pub fn select_file(&mut self, file: FileInfo) -> Result<()> {
        self.ensure_not_busy("select a file")?;
        self.state = SessionState::FileSelected(file);
        Ok(())
    }

    pub fn remove_file(&mut self) -> Result<()> {
        match self.state {
            SessionState::FileSelected(_) | SessionState::ErrorShown { .. } => {
                self.state = SessionState::Idle;
                Ok(())
            }
            _ => Err(self.invalid("remove the file")),
        }
    }

    /// Begin analyzing the selected file; a failed file may be retried
    pub fn start_analysis(&mut self) -> Result<FileInfo> {
        let file = match &self.state {
            SessionState::FileSelected(file) => file.clone(),
            SessionState::ErrorShown { file: Some(file), .. } => file.clone(),
            _ => return Err(self.invalid("start analysis")),
        };

        self.state = SessionState::Analyzing(file.clone());
        Ok(file)
    }

    pub fn complete(&mut self, report: AnalysisReport) -> Result<&AnalysisReport> {
        if !self.is_busy() {
            return Err(self.invalid("complete analysis"));
        }

        self.state = SessionState::ResultShown(Box::new(report));
        match &self.state {
            SessionState::ResultShown(report) => Ok(report.as_ref()),
            _ => Err(self.invalid("read the result")),
        }
    }

    /// Any failure lands in the error state, keeping the file for a retry
    pub fn fail(&mut self, error: &ResumeAtsError) {
        let file = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::FileSelected(file) | SessionState::Analyzing(file) => Some(file),
            SessionState::ErrorShown { file, .. } => file,
            SessionState::Idle | SessionState::ResultShown(_) => None,
        };

        warn!("Analysis failed: {}", error);
        self.state = SessionState::ErrorShown {
            file,
            message: error.to_string(),
        };
    }

    pub fn reset(&mut self) -> Result<()> {
        self.ensure_not_busy("reset")?;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Run one file through the whole lifecycle
    pub async fn analyze(
        &mut self,
        path: &Path,
        input: &InputManager,
        scorer: &AtsScorer,
        preview_chars: Option<usize>,
    ) -> Result<&AnalysisReport> {
        let file = match input.inspect(path).await {
            Ok(file) => file,
            Err(e) => {
                self.fail(&e);
                return Err(e);
            }
        };

        self.select_file(file)?;
        let file = self.start_analysis()?;
        let started = Instant::now();

        match input.read_text(path, &file).await {
            Ok(text) => {
                let result = scorer.analyze(&text);
                info!("Scored {}: {}/100", file.name, result.total_score);

                let elapsed = started.elapsed().as_millis() as u64;
                let report = AnalysisReport::new(file, &text, result, preview_chars, elapsed);
                self.complete(report)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    fn ensure_not_busy(&self, action: &str) -> Result<()> {
        if self.is_busy() {
            Err(self.invalid(action))
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &str) -> ResumeAtsError {
        ResumeAtsError::InvalidTransition(format!("cannot {} while {}", action, self.state.name()))
    }
}
