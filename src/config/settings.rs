// src/config/settings.rs
use anyhow::{anyhow, Context, Result};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "pentrust";
pub const ENV_PREFIX: &str = "PENTRUST";
pub const DEFAULT_TITLE: &str = "PenTrust – Healthcare Content Clarity Analyzer";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub dark_mode: bool,
}

impl Settings {
    /// Defaults, then `pentrust.toml` (if present), then `PENTRUST_*` variables.
    pub fn load() -> Result<Self> {
        let builder = Self::with_defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::from_builder(builder)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("title", DEFAULT_TITLE)?
            .set_default("window_width", 1280.0)?
            .set_default("window_height", 860.0)?
            .set_default("dark_mode", true)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(anyhow!(
                "Window size must be positive, got {}x{}",
                self.window_width,
                self.window_height
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: 1280.0,
            window_height: 860.0,
            dark_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings> {
        let builder = Settings::with_defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Settings::from_builder(builder)
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_builder(Settings::with_defaults().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = from_toml("window_width = 1024.0\ndark_mode = false").unwrap();
        assert_eq!(settings.window_width, 1024.0);
        assert!(!settings.dark_mode);
        assert_eq!(settings.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_rejects_non_positive_window() {
        assert!(from_toml("window_height = 0.0").is_err());
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(from_toml("dark_mode = \"sometimes\"").is_err());
    }
}
