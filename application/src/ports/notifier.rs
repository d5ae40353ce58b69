//! Conversion notification port
//!
//! Defines the interface for reporting steps and notices during a conversion.

use quizpack_domain::{ConversionStep, Notice};

/// Callback for progress updates during a conversion
///
/// Implementations live in the presentation layer.
pub trait ConversionNotifier: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: ConversionStep);

    /// Called when a step completes successfully
    fn on_step_complete(&self, step: ConversionStep);

    /// Called for every info, warning or error notice
    fn on_notice(&self, notice: &Notice);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoNotifier;

impl ConversionNotifier for NoNotifier {
    fn on_step_start(&self, _step: ConversionStep) {}
    fn on_step_complete(&self, _step: ConversionStep) {}
    fn on_notice(&self, _notice: &Notice) {}
}
