use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Antiquity configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AntiquityConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Fuzzy date settings.
    #[serde(default)]
    pub fuzzy: FuzzyToml,
}

impl AntiquityConfig {
    /// Reads and parses the config at `path`.
    ///
    /// When `required` is false a missing file yields the defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: AntiquityConfig =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_true")]
    pub show_time: bool,
    #[serde(default)]
    pub show_weekday: bool,
    #[serde(default)]
    pub show_mjd: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            show_time: true,
            show_weekday: false,
            show_mjd: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FuzzyToml {
    /// Days added to the radius of every fuzzy date.
    #[serde(default)]
    pub extra_days: f64,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AntiquityConfig = toml::from_str("").unwrap();
        assert!(config.output.show_time);
        assert!(!config.output.show_weekday);
        assert!(!config.output.show_mjd);
        assert_eq!(config.fuzzy.extra_days, 0.0);
    }

    #[test]
    fn partial_sections() {
        let config: AntiquityConfig =
            toml::from_str("[output]\nshow_weekday = true\n\n[fuzzy]\nextra_days = 2.5\n").unwrap();
        assert!(config.output.show_time);
        assert!(config.output.show_weekday);
        assert_eq!(config.fuzzy.extra_days, 2.5);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<AntiquityConfig>("[output]\nlocale = \"fr\"\n").is_err());
    }

    #[test]
    fn missing_optional_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AntiquityConfig::load(&dir.path().join("absent.toml"), false).unwrap();
        assert!(config.output.show_time);
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AntiquityConfig::load(&dir.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nshow_mjd = true").unwrap();
        let config = AntiquityConfig::load(file.path(), true).unwrap();
        assert!(config.output.show_mjd);
    }
}
