use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{BookwormsError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
    pub sort_recommendations: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BookwormsError::ConfigError {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BookwormsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_file_extension("input.path", &self.input.path, &["json"])?;

        if let Some(path) = self.output.as_ref().and_then(|o| o.path.as_deref()) {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    fn sort_recommendations(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.sort_recommendations)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
