//! Structured configuration issues.
//!
//! Validation collects every problem it finds instead of stopping at the
//! first one, so a config file with several mistakes is reported in one run.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: conversion works but the result may not be what was meant.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `quiz.pool_size` outside 1..=16.
    PoolSizeOutOfRange,
    /// `quiz.pass_percentage` not one of the allowed values.
    InvalidPassPercentage,
    /// `quiz.title` is empty or whitespace only.
    EmptyTitle,
    /// `template.path` is empty.
    EmptyTemplatePath,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
