//! Resource locations from TOML (`[template]` and `[locale]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Template archive used when none is configured
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/MC_TF.zip";

/// Raw template configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTemplateConfig {
    /// Template archive, relative to the working directory unless absolute
    pub path: PathBuf,
}

impl Default for FileTemplateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
        }
    }
}

/// Raw locale configuration from TOML
///
/// Without a path the built-in German table is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocaleConfig {
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_default_path() {
        let config = FileTemplateConfig::default();
        assert_eq!(config.path, PathBuf::from("templates/MC_TF.zip"));
    }

    #[test]
    fn test_resource_paths_deserialize() {
        let toml_str = r#"
[template]
path = "/srv/h5p/MC_TF.zip"

[locale]
path = "locales/de-ch.toml"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.template.path, PathBuf::from("/srv/h5p/MC_TF.zip"));
        assert_eq!(config.locale.path, Some(PathBuf::from("locales/de-ch.toml")));
    }
}
