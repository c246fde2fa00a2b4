//! Output formatters for console and JSON presentation

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, MetricStatus};
use crate::processing::ats_scorer::{
    MAX_FORMAT_SCORE, MAX_KEYWORD_SCORE, MAX_LENGTH_SCORE, MAX_SECTION_SCORE, MAX_TOTAL_SCORE,
    MAX_VERB_SCORE,
};
use crate::processing::sections::ResumeSection;
use colored::{Color, Colorize};

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn status_color(status: MetricStatus) -> Color {
        match status {
            MetricStatus::Good => Color::Green,
            MetricStatus::Warning => Color::Yellow,
            MetricStatus::Error => Color::Red,
        }
    }

    fn check_mark(&self, present: bool) -> String {
        if present {
            self.colorize("✓", Color::Green)
        } else {
            self.colorize("✗", Color::Red)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ATS ANALYSIS", 1));
        output.push_str(&format!(
            "File: {} ({}) | Generated: {} | Processing time: {}ms\n",
            report.file.name,
            report.file.display_size(),
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Score
        output.push_str(&self.format_header("ATS Score", 2));
        let rating = format!("{} {}", report.rating.icon, report.rating.label);
        output.push_str(&format!(
            "{}/{} {}\n",
            result.total_score,
            MAX_TOTAL_SCORE,
            self.colorize(&rating, Self::status_color(report.rating.status))
        ));

        // Metric cards
        output.push_str(&self.format_header("Metrics", 3));
        for card in &report.metrics {
            output.push_str(&format!(
                "  {:<20} {:>6}  {}\n",
                card.title,
                card.value,
                self.colorize(&card.label, Self::status_color(card.status))
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Score Breakdown", 3));
            let breakdown = &result.breakdown;
            for (name, score, max) in [
                ("Sections", breakdown.section_score, MAX_SECTION_SCORE),
                ("Length", breakdown.length_score, MAX_LENGTH_SCORE),
                ("Format", breakdown.format_score, MAX_FORMAT_SCORE),
                ("Keywords", breakdown.keyword_score, MAX_KEYWORD_SCORE),
                ("Action verbs", breakdown.verb_score, MAX_VERB_SCORE),
            ] {
                output.push_str(&format!("  {:<14} {:>2}/{}\n", name, score, max));
            }

            output.push_str(&self.format_header("Sections", 3));
            for section in ResumeSection::ALL {
                output.push_str(&format!(
                    "  {} {}\n",
                    self.check_mark(result.sections.get(section)),
                    section
                ));
            }

            output.push_str(&self.format_header("Key Elements", 3));
            for (name, present) in [
                ("Bullet points", result.format.has_bullets),
                ("Numbers", result.format.has_numbers),
                ("Email", result.format.has_email),
                ("Phone", result.format.has_phone),
            ] {
                output.push_str(&format!("  {} {}\n", self.check_mark(present), name));
            }
            output.push_str(&format!(
                "  Keywords matched: {} | Action verbs matched: {}\n",
                result.keyword_count, result.verb_count
            ));
        }

        output.push_str(&self.format_header("📋 Recommendations", 2));
        for (i, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, rec));
        }

        if let Some(preview) = &report.preview {
            output.push_str(&self.format_header("📄 Extracted Text Preview", 2));
            output.push_str(preview);
            output.push('\n');
        }

        output.push_str(&format!(
            "\n{} Generated by resume-ats v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(
        &self,
        report: &AnalysisReport,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
