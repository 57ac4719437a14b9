use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weather: WeatherConfig,
    pub appearance: AppearanceConfig,
}

/// Weather data and asset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Snapshot JSON maintained by the external fetcher
    pub snapshot_path: PathBuf,
    /// Base for icon assets; `{base}{key}.png`. Local dir or https mirror.
    pub icon_base_url: String,
    /// Location label shown next to the temperature
    pub location_label: String,
}

/// Campus identity and overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Campus theme preset: "main", "scripps", "torrey"
    pub campus: String,
    /// Optional hex override for the campus primary accent
    pub accent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            appearance: AppearanceConfig::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let cache = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("surfside");
        Self {
            snapshot_path: cache.join("weather.json"),
            icon_base_url: format!("{}/icons/", cache.display()),
            location_label: "San Diego".to_string(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            campus: "main".to_string(),
            accent: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The theme for the configured campus, with the accent override
    /// applied when it parses. A bad override is logged and ignored.
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::for_campus(&self.appearance.campus);
        if let Some(ref hex) = self.appearance.accent {
            match parse_hex_color(hex) {
                Ok(color) => theme.accent = color,
                Err(e) => tracing::warn!("Ignoring invalid accent override {hex:?}: {e}"),
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.weather.location_label, "San Diego");
        assert_eq!(config.appearance.campus, "main");
        assert!(config.appearance.accent.is_none());
        assert!(config.weather.icon_base_url.ends_with("/icons/"));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [appearance]
            campus = "scripps"
            "#,
        )
        .unwrap();
        assert_eq!(config.appearance.campus, "scripps");
        // Untouched sections keep their defaults
        assert_eq!(config.weather.location_label, "San Diego");
    }

    #[test]
    fn test_resolve_theme_campus_and_override() {
        let mut config = Config::default();
        config.appearance.campus = "scripps".to_string();
        assert_eq!(config.resolve_theme().accent, Theme::scripps().accent);

        config.appearance.accent = Some("#ff0000".to_string());
        assert_eq!(config.resolve_theme().accent, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_resolve_theme_ignores_bad_override() {
        let mut config = Config::default();
        config.appearance.accent = Some("not-a-color".to_string());
        assert_eq!(config.resolve_theme().accent, Theme::main().accent);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/surfside/config.toml").unwrap();
        assert_eq!(config.appearance.campus, "main");
    }
}
