//! Configuration management for foliosnip.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::snippet::{
    AmountStyle, LabelStyle, SnippetFormat, SnippetParser, SnippetWriter, WriterOptions,
    DEFAULT_OWNER,
};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "foliosnip";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FOLIOSNIP_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIOSNIP_`, sections split on
///    `__`, e.g. `FOLIOSNIP_PARSER__DEFAULT_OWNER`)
/// 2. TOML config file at `~/.config/foliosnip/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snippet format variant.
    pub format: SnippetFormat,
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Parser-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Owner name used when a snippet has no header line.
    pub default_owner: String,
}

/// Output-related configuration for the snippet writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Amount notation.
    pub amount_style: AmountStyle,
    /// Canonical label spelling.
    pub label_style: LabelStyle,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_owner: DEFAULT_OWNER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation
    /// fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        tracing::debug!(path = %config_file.display(), "Loading configuration");

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file that must exist.
    ///
    /// Environment overrides still apply on top of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, or if loading, parsing or
    /// validation fails.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::config_validation(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let owner = &self.parser.default_owner;
        if owner.trim().is_empty() {
            return Err(Error::config_validation(
                "parser.default_owner must not be empty",
            ));
        }

        if owner.contains('*') {
            return Err(Error::config_validation(format!(
                "parser.default_owner cannot contain '*': {owner}"
            )));
        }

        Ok(())
    }

    /// Build a parser from this configuration.
    #[must_use]
    pub fn parser(&self) -> SnippetParser {
        SnippetParser::with_format(self.format).with_default_owner(&self.parser.default_owner)
    }

    /// Get the writer options.
    #[must_use]
    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            amount_style: self.output.amount_style,
            label_style: self.output.label_style,
        }
    }

    /// Build a writer from this configuration.
    #[must_use]
    pub fn writer(&self) -> SnippetWriter {
        SnippetWriter::new(self.format, self.writer_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::{HeaderStyle, ProjectMarker};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.format, SnippetFormat::default());
        assert_eq!(config.parser.default_owner, "Unknown User");
        assert_eq!(config.output.amount_style, AmountStyle::Compact);
        assert_eq!(config.output.label_style, LabelStyle::Short);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_owner() {
        let mut config = Config::default();
        config.parser.default_owner = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("default_owner"));
    }

    #[test]
    fn test_validate_owner_with_asterisk() {
        let mut config = Config::default();
        config.parser.default_owner = "**Someone**".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("'*'"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("foliosnip"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[format]
require_dollar_sign = false
header_style = "plain"
project_marker = "bare"

[parser]
default_owner = "Someone"

[output]
amount_style = "full"
"#,
            )?;

            let config = Config::load_from(Some(jail.directory().join("config.toml")))
                .map_err(|e| e.to_string())?;
            assert!(!config.format.require_dollar_sign);
            assert_eq!(config.format.header_style, HeaderStyle::Plain);
            assert_eq!(config.format.project_marker, ProjectMarker::Bare);
            assert_eq!(config.parser.default_owner, "Someone");
            assert_eq!(config.output.amount_style, AmountStyle::Full);
            assert_eq!(config.output.label_style, LabelStyle::Short);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[format]
require_dollar_sign = true

[parser]
default_owner = "From File"

[output]
label_style = "long"
"#,
            )?;
            jail.set_env("FOLIOSNIP_PARSER__DEFAULT_OWNER", "From Env");
            jail.set_env("FOLIOSNIP_FORMAT__REQUIRE_DOLLAR_SIGN", "false");

            let config = Config::load_from(Some(jail.directory().join("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.parser.default_owner, "From Env");
            assert!(!config.format.require_dollar_sign);
            // untouched keys keep the file's value
            assert_eq!(config.output.label_style, LabelStyle::Long);
            Ok(())
        });
    }

    #[test]
    fn test_env_override_is_validated() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FOLIOSNIP_PARSER__DEFAULT_OWNER", "A*B");

            let err = Config::load_from(Some(jail.directory().join("missing.toml")))
                .expect_err("owner with '*' should be rejected");
            assert!(err.is_config_error());
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[parser]\ndefault_owner = \"\"")?;

            let err = Config::load_from(Some(jail.directory().join("config.toml")))
                .expect_err("empty owner should be rejected");
            assert!(err.is_config_error());
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unknown_style() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\namount_style = \"fancy\"").unwrap();

        let err = Config::load_from(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_load_file_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_file(&dir.path().join("config.toml")).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_file_reports_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\nheader_style = \"shouty\"").unwrap();

        let err = Config::load_file(file.path()).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_file_accepts_valid_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[output]\nlabel_style = \"long\"")?;

            let config =
                Config::load_file(&jail.directory().join("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.output.label_style, LabelStyle::Long);
            Ok(())
        });
    }

    #[test]
    fn test_parser_uses_config() {
        let mut config = Config::default();
        config.parser.default_owner = "Someone".to_string();
        config.format = SnippetFormat::review();

        let parser = config.parser();
        assert_eq!(parser.default_owner(), "Someone");
        assert_eq!(parser.format(), &SnippetFormat::review());
    }

    #[test]
    fn test_writer_options() {
        let mut config = Config::default();
        config.output.label_style = LabelStyle::Long;

        let options = config.writer_options();
        assert_eq!(options.amount_style, AmountStyle::Compact);
        assert_eq!(options.label_style, LabelStyle::Long);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("require_dollar_sign"));
        assert!(json.contains("default_owner"));
        assert!(json.contains("amount_style"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        assert_eq!(config.clone(), config);
    }
}
