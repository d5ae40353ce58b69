//! Locale table loader
//!
//! The German table is compiled into the binary. A replacement table can be
//! loaded from disk; it must define every key, there is no per-key fallback
//! to the built-in table.
//!
//! # Example
//!
//! ```
//! use quizpack_infrastructure::LocaleLoader;
//!
//! let bundle = LocaleLoader::builtin().unwrap();
//! assert_eq!(bundle.language, "de");
//! ```

use quizpack_domain::LocaleBundle;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const BUILTIN_GERMAN: &str = include_str!("../../../locales/de.toml");

/// Errors that can occur while loading a locale table
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Failed to read locale file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid locale table '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads [`LocaleBundle`]s from TOML
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleLoader;

impl LocaleLoader {
    /// The built-in German table
    pub fn builtin() -> Result<LocaleBundle, LocaleError> {
        Self::parse(BUILTIN_GERMAN, "built-in")
    }

    /// Load a table from `path`, or the built-in table when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<LocaleBundle, LocaleError> {
        match path {
            None => Self::builtin(),
            Some(path) => Self::load_file(path),
        }
    }

    pub fn load_file(path: &Path) -> Result<LocaleBundle, LocaleError> {
        let text = fs::read_to_string(path).map_err(|source| LocaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle = Self::parse(&text, &path.display().to_string())?;
        debug!(
            "Loaded locale '{}' from {}",
            bundle.language,
            path.display()
        );
        Ok(bundle)
    }

    fn parse(text: &str, origin: &str) -> Result<LocaleBundle, LocaleError> {
        toml::from_str(text).map_err(|source| LocaleError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_table() {
        let bundle = LocaleLoader::builtin().unwrap();
        assert_eq!(bundle.language, "de");
        assert_eq!(bundle.quiz.start_button_text, "Quiz starten");
        assert_eq!(LocaleLoader::load(None).unwrap(), bundle);
    }

    #[test]
    fn test_load_replacement_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let text = BUILTIN_GERMAN.replace("Quiz starten", "Los geht's");
        fs::write(&path, text).unwrap();

        let bundle = LocaleLoader::load(Some(&path)).unwrap();
        assert_eq!(bundle.quiz.start_button_text, "Los geht's");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = LocaleLoader::load_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LocaleError::Read { .. }));
    }

    #[test]
    fn test_incomplete_table_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "language = \"en\"\n").unwrap();

        let err = LocaleLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, LocaleError::Parse { .. }));
        assert!(err.to_string().contains("partial.toml"));
    }
}
