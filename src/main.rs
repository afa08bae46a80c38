//! Dr. Crop - crop disease detection demo in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use drcrop_app::config::{self, Settings};
use drcrop_app::{AppState, FileStore, MemoryStore, PreferenceStore, Screen, SimulatedDiagnosis};
use drcrop_core::logging;
use tracing::{info, warn};

/// Dr. Crop - AI-powered crop disease detection (simulated)
#[derive(Parser, Debug)]
#[command(name = "drcrop")]
#[command(about = "A terminal front-end for simulated crop disease detection", long_about = None)]
struct Args {
    /// Screen to open first: language, dashboard, login, signup, results
    #[arg(long, value_name = "NAME", value_parser = parse_route, default_value = "language")]
    route: Screen,

    /// Directory for storage.json and saved reports
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Simulated analysis time in milliseconds
    #[arg(long, value_name = "N")]
    delay_ms: Option<u64>,

    /// Keep preferences in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Config file (default: <config dir>/dr-crop/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_route(value: &str) -> Result<Screen, String> {
    Screen::from_route(value).ok_or_else(|| {
        let names: Vec<_> = Screen::ALL.iter().map(|s| s.route()).collect();
        format!("unknown route '{}', expected one of: {}", value, names.join(", "))
    })
}

/// Settings from the config file with command-line overrides applied
fn effective_settings(args: &Args, config_path: &Path) -> Settings {
    let mut settings = config::load_settings(config_path);
    if let Some(ms) = args.delay_ms {
        settings.analysis.delay_ms = ms;
    }
    settings
}

/// Create the default config file and describe what happened
fn init_config_report(config_path: &Path) -> drcrop_core::Result<String> {
    Ok(if config::init_config_file(config_path)? {
        format!("Config written to {}", config_path.display())
    } else {
        format!("Config already exists at {}, left unchanged", config_path.display())
    })
}

fn open_store(ephemeral: bool, data_dir: &Path) -> Box<dyn PreferenceStore> {
    if ephemeral {
        info!("Using in-memory preference store");
        return Box::new(MemoryStore::new());
    }

    match FileStore::open(data_dir) {
        Ok(store) => {
            info!("Preference store at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            warn!("Falling back to in-memory store: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    if args.init_config {
        println!("{}", init_config_report(&config_path)?);
        return Ok(());
    }

    logging::init()?;

    let settings = effective_settings(&args, &config_path);
    let data_dir = config::resolve_data_dir(args.data_dir.as_deref(), &settings);
    let store = open_store(args.ephemeral, &data_dir);

    let engine = SimulatedDiagnosis::from_settings(&settings.analysis);
    let state = AppState::new(store, settings);

    drcrop_tui::run(state, engine, config::reports_dir(&data_dir), args.route).await?;
    Ok(())
}
