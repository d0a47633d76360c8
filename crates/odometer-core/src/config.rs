use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::digits::MAX_DENSITY;
use crate::glyph::FontFace;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub odometer: OdometerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to roll progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the final frame
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Roll animation and formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdometerConfig {
    /// Total duration budget for one roll in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Extra time each successive track takes to settle
    #[serde(default = "default_duration_offset")]
    pub duration_offset_ms: u64,
    /// Lower bound for the first track's duration
    #[serde(default = "default_min_track_duration")]
    pub min_track_duration_ms: u64,
    /// Maximum filler frames before settling on the target digit
    #[serde(default = "default_density")]
    pub density: usize,
    #[serde(default)]
    pub easing: EasingType,
    /// Group thousands with `grouping_separator`
    #[serde(default = "default_true")]
    pub grouping: bool,
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
    /// Increment used by the interactive host
    #[serde(default = "default_step")]
    pub step: i64,
}

impl Default for OdometerConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration(),
            duration_offset_ms: default_duration_offset(),
            min_track_duration_ms: default_min_track_duration(),
            density: default_density(),
            easing: EasingType::default(),
            grouping: default_true(),
            grouping_separator: default_grouping_separator(),
            step: default_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a roll is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Text styling for the counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Hex colour string (e.g., "#ffffff" or "fff")
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default)]
    pub font: FontFace,
    #[serde(default = "default_true")]
    pub bold: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text_color: default_text_color(),
            font: FontFace::default(),
            bold: default_true(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    1500
}

fn default_duration_offset() -> u64 {
    200
}

fn default_min_track_duration() -> u64 {
    200
}

fn default_density() -> usize {
    9
}

fn default_grouping_separator() -> char {
    ','
}

fn default_step() -> i64 {
    1
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Reject values the roll engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if !(1..=MAX_DENSITY).contains(&self.odometer.density) {
            return Err(crate::Error::Config(format!(
                "odometer.density must be between 1 and {}, got {}",
                MAX_DENSITY, self.odometer.density
            )));
        }
        if self.odometer.grouping_separator.is_ascii_digit() {
            return Err(crate::Error::Config(format!(
                "odometer.grouping_separator cannot be a digit: '{}'",
                self.odometer.grouping_separator
            )));
        }
        Ok(())
    }

    /// Directory for runtime files such as the log
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("odometer")
    }

    pub fn log_path() -> PathBuf {
        Self::data_dir().join("odometer.log")
    }

    /// Get the configuration file path
    /// Always uses ~/.config/odometer/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("odometer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.odometer.animation_duration_ms, 1500);
        assert_eq!(config.odometer.duration_offset_ms, 200);
        assert_eq!(config.odometer.density, 9);
        assert_eq!(config.odometer.easing, EasingType::Cubic);
        assert_eq!(config.odometer.grouping_separator, ',');
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.ui.theme.font, FontFace::Block);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [odometer]
            density = 4
            easing = "ease_out"

            [ui.theme]
            font = "wide"
            "#,
        )
        .unwrap();

        assert_eq!(config.odometer.density, 4);
        assert_eq!(config.odometer.easing, EasingType::EaseOut);
        assert_eq!(config.odometer.animation_duration_ms, 1500);
        assert_eq!(config.ui.theme.font, FontFace::Wide);
        assert!(config.ui.theme.bold);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_zero_density_rejected() {
        let config = AppConfig::from_toml("[odometer]\ndensity = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_oversized_density_rejected() {
        let config =
            AppConfig::from_toml("[odometer]\ndensity = 9223372036854775807\n").unwrap();
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));

        let config = AppConfig::from_toml("[odometer]\ndensity = 10\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml("[odometer]\ndensity = 9\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_digit_separator_rejected() {
        let config = AppConfig::from_toml("[odometer]\ngrouping_separator = \"7\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_easing_is_config_error() {
        let result = AppConfig::from_toml("[odometer]\neasing = \"bounce\"\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_theme() {
        let mut config = AppConfig::default();
        config.ui.theme.text_color = "#ff8800".to_string();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.ui.theme.text_color, "#ff8800");
    }

    #[test]
    fn test_load_from_missing_path_is_default() {
        let path = std::env::temp_dir().join("odometer-missing-config-test.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.odometer.density, 9);
    }
}
