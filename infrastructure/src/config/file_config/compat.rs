//! Player compatibility switches from TOML (`[compat]` section)

use quizpack_domain::{PostProcessPipeline, SharpSCompat};
use serde::{Deserialize, Serialize};

/// Raw compatibility configuration from TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompatConfig {
    /// Replace `ß` with `ss` in the content document
    pub replace_sharp_s: bool,
}

impl Default for FileCompatConfig {
    fn default() -> Self {
        Self {
            replace_sharp_s: true,
        }
    }
}

impl FileCompatConfig {
    /// Post-processing stages enabled by this section
    pub fn pipeline(&self) -> PostProcessPipeline {
        let pipeline = PostProcessPipeline::new();
        if self.replace_sharp_s {
            pipeline.with_stage(SharpSCompat)
        } else {
            pipeline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_s_enabled_by_default() {
        let pipeline = FileCompatConfig::default().pipeline();
        assert_eq!(pipeline.stage_names(), vec!["sharp-s"]);
    }

    #[test]
    fn test_sharp_s_can_be_disabled() {
        let toml_str = r#"
[compat]
replace_sharp_s = false
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.compat.pipeline().is_empty());
    }
}
