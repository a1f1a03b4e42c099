use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Show the current year in the status bar
    #[serde(default = "default_true")]
    pub show_year: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            show_year: default_true(),
        }
    }
}

/// Snap-scroll behavior.
///
/// `animation_duration_ms` drives both the visual transition and the
/// navigator's settle window; they are one value so they cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable animated transitions (instant jumps when false)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Transition duration and settle window in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frames per second while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Easing function for transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Minimum wheel delta magnitude for a transition; smaller deltas are
    /// treated as trackpad noise and passed through
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: i32,
    /// Minimum milliseconds between two accepted wheel transitions
    #[serde(default = "default_wheel_throttle")]
    pub wheel_throttle_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            wheel_threshold: default_wheel_threshold(),
            wheel_throttle_ms: default_wheel_throttle(),
        }
    }
}

/// Easing curve applied to scroll transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    420
}

fn default_animation_fps() -> u32 {
    60
}

fn default_wheel_threshold() -> i32 {
    12
}

fn default_wheel_throttle() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snapdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 420);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.wheel_threshold, 12);
        assert_eq!(config.wheel_throttle_ms, 250);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            animation_duration_ms = 200
            easing = "linear"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.animation_duration_ms, 200);
        assert_eq!(config.scroll.easing, EasingType::Linear);
        assert_eq!(config.scroll.wheel_threshold, 12);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scroll.animation_duration_ms, 420);
        assert_eq!(parsed.ui.theme, "gruvbox-dark");
    }
}
