//! Console output formatter for conversion results

use colored::Colorize;
use quizpack_application::ConvertQuizOutput;
use quizpack_domain::{Notice, NoticeLevel};
use serde::Serialize;
use std::path::Path;

/// What a conversion produced, as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub source: String,
    /// Written package, `None` when nothing was packaged
    pub output: Option<String>,
    pub title: Option<String>,
    pub bytes: usize,
    pub mapped: usize,
    pub skipped: usize,
    pub image_included: bool,
    pub notices: Vec<Notice>,
}

impl ConversionSummary {
    pub fn new(source: &str, output: &ConvertQuizOutput, written_to: Option<&Path>) -> Self {
        let package = output.package.as_ref();
        Self {
            source: source.to_string(),
            output: written_to.map(|p| p.display().to_string()),
            title: package.map(|p| p.title.clone()),
            bytes: package.map_or(0, |p| p.bytes.len()),
            mapped: output.mapped,
            skipped: output.skipped,
            image_included: package.is_some_and(|p| p.image_included),
            notices: output.notices.clone(),
        }
    }

    fn warnings(&self) -> usize {
        self.notices
            .iter()
            .filter(|n| n.level >= NoticeLevel::Warning)
            .count()
    }
}

/// Formats conversion summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the summary as text
    pub fn format(summary: &ConversionSummary) -> String {
        let mut output = String::new();

        match &summary.output {
            Some(path) => output.push_str(&format!(
                "{} {}\n",
                "Package written:".green().bold(),
                path
            )),
            None => output.push_str(&format!(
                "{} {}\n",
                "No package created for".yellow().bold(),
                summary.source
            )),
        }

        if let Some(title) = &summary.title {
            output.push_str(&format!("  {} {}\n", "Title:".cyan(), title));
        }
        output.push_str(&format!(
            "  {} {} mapped, {} skipped\n",
            "Questions:".cyan(),
            summary.mapped,
            summary.skipped
        ));
        if summary.output.is_some() {
            output.push_str(&format!(
                "  {} {}\n",
                "Size:".cyan(),
                Self::human_size(summary.bytes)
            ));
            if summary.image_included {
                output.push_str(&format!("  {} custom intro image\n", "Image:".cyan()));
            }
        }

        let warnings = summary.warnings();
        if warnings > 0 {
            output.push_str(&format!(
                "  {}\n",
                format!("{} warning(s), see above", warnings).dimmed()
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(summary: &ConversionSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn human_size(bytes: usize) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KiB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
