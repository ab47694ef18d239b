use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Template, TemplateError, presets};

/// Environment variable naming a settings file
pub const CONFIG_ENV_VAR: &str = "LIFE_BOARD_CONFIG";
/// Settings file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "life_board.toml";

pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 100;
pub const MIN_STEPS_PER_SECOND: f32 = 3.0;
pub const MAX_STEPS_PER_SECOND: f32 = 100.0;

/// Clamp a board dimension to the supported range
pub fn clamp_dimension(value: usize) -> usize {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Clamp a speed to the supported range; NaN falls back to the minimum
pub fn clamp_speed(value: f32) -> f32 {
    if value.is_nan() {
        MIN_STEPS_PER_SECOND
    } else {
        value.clamp(MIN_STEPS_PER_SECOND, MAX_STEPS_PER_SECOND)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown template preset `{0}`")]
    UnknownPreset(String),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Startup configuration for a board
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub steps_per_second: f32,
    /// Name of a built-in preset; empty string or `"empty"` means a dead board
    pub template: String,
    /// Inline pattern text, takes precedence over `template`
    pub pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            steps_per_second: 10.0,
            template: "oscillating".to_owned(),
            pattern: None,
        }
    }
}

impl Settings {
    /// Load settings from `$LIFE_BOARD_CONFIG`, then `./life_board.toml`,
    /// falling back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Self::from_path(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_path(local);
        }
        Ok(Self::default())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(text)?;
        // Surface template problems at load time rather than at first use
        settings.seed_template()?;
        Ok(settings)
    }

    /// Resolve the seed template, `None` for an empty board
    pub fn seed_template(&self) -> Result<Option<Template>, ConfigError> {
        if let Some(text) = &self.pattern {
            return Ok(Some(Template::parse("custom", text)?));
        }
        match self.template.as_str() {
            "" | "empty" => Ok(None),
            name => presets::by_name(name)
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_seed_board() {
        let settings = Settings::default();
        assert_eq!((settings.width, settings.height), (4, 4));
        assert_eq!(settings.steps_per_second, 10.0);
        let template = settings.seed_template().unwrap().unwrap();
        assert_eq!(template.name(), "oscillating");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml_str("width = 30\ntemplate = \"empty\"").unwrap();
        assert_eq!(settings.width, 30);
        assert_eq!(settings.height, 4);
        assert!(settings.seed_template().unwrap().is_none());
    }

    #[test]
    fn test_inline_pattern_wins() {
        let settings = Settings::from_toml_str(
            "template = \"glider\"\npattern = \"\"\"\nx x\nx x\n\"\"\"",
        )
        .unwrap();
        let template = settings.seed_template().unwrap().unwrap();
        assert_eq!(template.dimensions(), (2, 2));
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let err = Settings::from_toml_str("template = \"spaceship\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(name) if name == "spaceship"));
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let err = Settings::from_toml_str("pattern = \"x ?\"").unwrap_err();
        assert!(matches!(err, ConfigError::Template(TemplateError::UnknownMarker { .. })));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            Settings::from_toml_str("depth = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Settings::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_dimension(0), 1);
        assert_eq!(clamp_dimension(250), 100);
        assert_eq!(clamp_speed(1.0), 3.0);
        assert_eq!(clamp_speed(500.0), 100.0);
        assert_eq!(clamp_speed(f32::NAN), 3.0);
    }
}
