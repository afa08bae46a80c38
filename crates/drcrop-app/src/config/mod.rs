//! Configuration file parsing for Dr. Crop
//!
//! Supports `~/.config/dr-crop/config.toml` (or an explicit `--config` path).

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, reports_dir, resolve_data_dir,
};
pub use types::*;
