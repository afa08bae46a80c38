//! Settings loader for config.toml and data directory resolution

use super::types::Settings;
use drcrop_core::logging::APP_DIR_NAME;
use drcrop_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the config file (`~/.config/dr-crop/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file.
///
/// A missing file yields defaults; an unreadable or unparsable file is logged
/// and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the data directory holding `storage.json` and saved reports.
///
/// Priority: explicit override, then `storage.data_dir`, then the platform
/// local data dir.
pub fn resolve_data_dir(override_dir: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Some(ref dir) = settings.storage.data_dir {
        return dir.clone();
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Directory where saved reports are written
pub fn reports_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("reports")
}

/// Write a commented default config file if none exists yet.
///
/// Returns `false` when a file was already there and has been left alone.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# Dr. Crop Configuration

[analysis]
delay_ms = 3000          # Simulated processing time
healthy_threshold = 0.4  # Draws above this are reported healthy

[intake]
notify_rejected = true   # Show a message when a non-image file is dropped

[storage]
# data_dir = "/path/to/dir"   # Defaults to the platform data directory

[ui]
tick_rate_ms = 100
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings.analysis.delay_ms, 3000);
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ndelay_ms = 42\n").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.analysis.delay_ms, 42);
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis\ndelay_ms = ").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.analysis.delay_ms, 3000);
    }

    #[test]
    fn test_resolve_data_dir_priority() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/from/config"));

        let cli = PathBuf::from("/from/cli");
        assert_eq!(resolve_data_dir(Some(&cli), &settings), cli);
        assert_eq!(
            resolve_data_dir(None, &settings),
            PathBuf::from("/from/config")
        );

        settings.storage.data_dir = None;
        assert!(resolve_data_dir(None, &settings).ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_init_config_file_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());

        let settings = load_settings(&path);
        assert_eq!(settings.analysis.delay_ms, 3000);
        assert!(settings.intake.notify_rejected);
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ndelay_ms = 7\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path).analysis.delay_ms, 7);
    }
}
