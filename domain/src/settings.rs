//! Quiz settings value objects
//!
//! The four scalars a user chooses for a conversion: title, question
//! randomization, pool size and pass percentage.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Title used when the caller does not provide one
pub const DEFAULT_TITLE: &str = "Generated Quiz";

/// Errors raised when a setting falls outside its allowed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("pool size must be between 1 and 16, got {0}")]
    PoolSizeOutOfRange(u8),

    #[error("pass percentage must be one of 50, 60, 66, 75 or 100, got {0}")]
    InvalidPassPercentage(u8),
}

/// Number of questions drawn per play-through (Value Object)
///
/// Only the range is checked. A pool larger than the number of questions
/// in a document is allowed and written to the package unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolSize(u8);

impl PoolSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 16;
    pub const DEFAULT: u8 = 7;

    pub fn new(value: u8) -> Result<Self, SettingsError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SettingsError::PoolSizeOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PoolSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for PoolSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum score considered a pass (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PassPercentage {
    Fifty,
    #[default]
    Sixty,
    SixtySix,
    SeventyFive,
    Hundred,
}

impl PassPercentage {
    /// All selectable values in ascending order
    pub const ALL: [PassPercentage; 5] = [
        PassPercentage::Fifty,
        PassPercentage::Sixty,
        PassPercentage::SixtySix,
        PassPercentage::SeventyFive,
        PassPercentage::Hundred,
    ];

    pub fn value(self) -> u8 {
        match self {
            PassPercentage::Fifty => 50,
            PassPercentage::Sixty => 60,
            PassPercentage::SixtySix => 66,
            PassPercentage::SeventyFive => 75,
            PassPercentage::Hundred => 100,
        }
    }
}

impl TryFrom<u8> for PassPercentage {
    type Error = SettingsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.value() == value)
            .ok_or(SettingsError::InvalidPassPercentage(value))
    }
}

impl std::fmt::Display for PassPercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for PassPercentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for PassPercentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        PassPercentage::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// User-chosen options for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub title: String,
    pub randomize_questions: bool,
    pub pool_size: PoolSize,
    pub pass_percentage: PassPercentage,
}

impl QuizSettings {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_randomize_questions(mut self, randomize: bool) -> Self {
        self.randomize_questions = randomize;
        self
    }

    pub fn with_pool_size(mut self, pool_size: PoolSize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_pass_percentage(mut self, pass_percentage: PassPercentage) -> Self {
        self.pass_percentage = pass_percentage;
        self
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            randomize_questions: true,
            pool_size: PoolSize::default(),
            pass_percentage: PassPercentage::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = QuizSettings::default();
        assert_eq!(settings.title, "Generated Quiz");
        assert!(settings.randomize_questions);
        assert_eq!(settings.pool_size.get(), 7);
        assert_eq!(settings.pass_percentage.value(), 60);
    }

    #[test]
    fn test_pool_size_bounds() {
        assert!(PoolSize::new(1).is_ok());
        assert!(PoolSize::new(16).is_ok());
        assert_eq!(PoolSize::new(0), Err(SettingsError::PoolSizeOutOfRange(0)));
        assert_eq!(
            PoolSize::new(17),
            Err(SettingsError::PoolSizeOutOfRange(17))
        );
    }

    #[test]
    fn test_pass_percentage_from_value() {
        for p in PassPercentage::ALL {
            assert_eq!(PassPercentage::try_from(p.value()), Ok(p));
        }
        assert_eq!(
            PassPercentage::try_from(70),
            Err(SettingsError::InvalidPassPercentage(70))
        );
    }

    #[test]
    fn test_pass_percentage_serializes_as_number() {
        let json = serde_json::to_string(&PassPercentage::SixtySix).unwrap();
        assert_eq!(json, "66");
        let parsed: PassPercentage = serde_json::from_str("75").unwrap();
        assert_eq!(parsed, PassPercentage::SeventyFive);
        assert!(serde_json::from_str::<PassPercentage>("80").is_err());
    }

    #[test]
    fn test_builder() {
        let settings = QuizSettings::new("T")
            .with_randomize_questions(false)
            .with_pool_size(PoolSize::new(1).unwrap())
            .with_pass_percentage(PassPercentage::Hundred);
        assert_eq!(settings.title, "T");
        assert!(!settings.randomize_questions);
        assert_eq!(settings.pool_size.get(), 1);
        assert_eq!(settings.pass_percentage, PassPercentage::Hundred);
    }
}
