//! Progress reporting for conversions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use quizpack_application::ConversionNotifier;
use quizpack_domain::{ConversionStep, Notice, NoticeLevel};
use std::sync::Mutex;
use std::time::Duration;

/// Render a notice as one colored line
pub fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info".cyan(),
        NoticeLevel::Warning => "warning".yellow().bold(),
        NoticeLevel::Error => "error".red().bold(),
    };
    format!("{}: {}", tag, notice.message)
}

fn step_display_name(step: ConversionStep) -> &'static str {
    match step {
        ConversionStep::Parse => "Parsing document",
        ConversionStep::Map => "Mapping questions",
        ConversionStep::Assemble => "Assembling question set",
        ConversionStep::Serialize => "Serializing content",
        ConversionStep::Package => "Building package",
    }
}

fn step_prefix(step: ConversionStep) -> String {
    format!("[{}/{}]", step.ordinal(), ConversionStep::ALL.len())
}

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionNotifier for ProgressReporter {
    fn on_step_start(&self, step: ConversionStep) {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(step_prefix(step));
        pb.set_message(format!("{}...", step_display_name(step)));
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.bar.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_step_complete(&self, step: ConversionStep) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_with_message(format!("{} {}", step_display_name(step), "done".green()));
            }
        }
    }

    fn on_notice(&self, notice: &Notice) {
        let line = notice_line(notice);
        let slot = self.bar.lock();
        match slot.as_ref().ok().and_then(|bar| bar.as_ref()) {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(pb) = slot.take() {
                pb.abandon();
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// With `quiet` set only warnings and errors are printed.
pub struct SimpleProgress {
    quiet: bool,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionNotifier for SimpleProgress {
    fn on_step_start(&self, step: ConversionStep) {
        if !self.quiet {
            eprintln!(
                "{} {} {}",
                "->".cyan(),
                step_prefix(step).dimmed(),
                step_display_name(step).bold()
            );
        }
    }

    fn on_step_complete(&self, _step: ConversionStep) {}

    fn on_notice(&self, notice: &Notice) {
        if !self.quiet || notice.level >= NoticeLevel::Warning {
            eprintln!("  {}", notice_line(notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_line_contains_message() {
        colored::control::set_override(false);
        let line = notice_line(&Notice::warning("No questions found in 'q.json'."));
        assert_eq!(line, "warning: No questions found in 'q.json'.");
    }

    #[test]
    fn test_step_prefix_counts_all_steps() {
        assert_eq!(step_prefix(ConversionStep::Parse), "[1/5]");
        assert_eq!(step_prefix(ConversionStep::Package), "[5/5]");
    }
}
