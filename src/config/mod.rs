pub mod cli;
pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "bookworms"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Find the books bookworms share and recommend the ones they miss")
)]
pub struct CliConfig {
    /// Path to the JSON file containing bookworms data
    #[cfg_attr(feature = "cli", arg(long, default_value = "testdata/bookworms.json"))]
    pub path: String,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = OutputFormat::Text))]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[cfg_attr(feature = "cli", arg(long))]
    pub output: Option<String>,

    /// Sort each bookworm's recommendations by author and title
    #[cfg_attr(feature = "cli", arg(long))]
    pub sort_recommendations: bool,

    /// TOML configuration file; replaces the input and output flags
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.path
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn sort_recommendations(&self) -> bool {
        self.sort_recommendations
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.path)?;
        validate_file_extension("path", &self.path, &["json"])?;

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["bookworms"]);

        assert_eq!(config.input_path(), "testdata/bookworms.json");
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
        assert!(!config.sort_recommendations());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from([
            "bookworms",
            "--path",
            "shelves.json",
            "--format",
            "csv",
            "--output",
            "report.csv",
            "--sort-recommendations",
        ]);

        assert_eq!(config.input_path(), "shelves.json");
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.output_path(), Some("report.csv"));
        assert!(config.sort_recommendations());
    }

    #[test]
    fn test_cli_rejects_non_json_input() {
        let config = CliConfig::parse_from(["bookworms", "--path", "shelves.txt"]);
        assert!(config.validate().is_err());
    }
}
