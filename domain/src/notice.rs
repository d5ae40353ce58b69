//! Pipeline steps and caller-facing notices

use serde::Serialize;

/// Steps of one conversion, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStep {
    Parse,
    Map,
    Assemble,
    Serialize,
    Package,
}

impl ConversionStep {
    pub const ALL: [ConversionStep; 5] = [
        ConversionStep::Parse,
        ConversionStep::Map,
        ConversionStep::Assemble,
        ConversionStep::Serialize,
        ConversionStep::Package,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionStep::Parse => "parse",
            ConversionStep::Map => "map",
            ConversionStep::Assemble => "assemble",
            ConversionStep::Serialize => "serialize",
            ConversionStep::Package => "package",
        }
    }

    /// 1-based position in [`ConversionStep::ALL`]
    pub fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }
}

impl std::fmt::Display for ConversionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// An advisory message surfaced to the caller. Not part of the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
