//! Configuration types for Dr. Crop
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-sections

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub intake: IntakeSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Diagnosis simulator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Fixed delay before a diagnosis resolves, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// A uniform draw above this value yields a healthy verdict
    #[serde(default = "default_healthy_threshold")]
    pub healthy_threshold: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            healthy_threshold: default_healthy_threshold(),
        }
    }
}

impl AnalysisSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    3000
}

fn default_healthy_threshold() -> f64 {
    0.4
}

/// Image intake settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntakeSettings {
    /// Show a status message when a non-image file is dropped
    #[serde(default = "default_true")]
    pub notify_rejected: bool,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            notify_rejected: true,
        }
    }
}

/// Preference store location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Override for the data directory (store file and saved reports)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout; one tick message is produced per idle poll
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.analysis.delay_ms, 3000);
        assert_eq!(settings.analysis.healthy_threshold, 0.4);
        assert!(settings.intake.notify_rejected);
        assert!(settings.storage.data_dir.is_none());
        assert_eq!(settings.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [analysis]
            delay_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(settings.analysis.delay_ms, 500);
        assert_eq!(settings.analysis.healthy_threshold, 0.4);
        assert!(settings.intake.notify_rejected);
    }

    #[test]
    fn test_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [analysis]
            delay_ms = 10
            healthy_threshold = 0.9

            [intake]
            notify_rejected = false

            [storage]
            data_dir = "/tmp/drcrop"

            [ui]
            tick_rate_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(settings.analysis.delay(), Duration::from_millis(10));
        assert_eq!(settings.analysis.healthy_threshold, 0.9);
        assert!(!settings.intake.notify_rejected);
        assert_eq!(settings.storage.data_dir, Some(PathBuf::from("/tmp/drcrop")));
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }
}
