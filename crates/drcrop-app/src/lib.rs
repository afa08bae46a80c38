//! drcrop-app - Application state and orchestration for Dr. Crop
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the preference store, image intake, the diagnosis engine seam, bilingual content
//! tables, report export and configuration loading.

pub mod actions;
pub mod config;
pub mod content;
pub mod crop_selector;
pub mod handler;
pub mod handoff;
pub mod input_key;
pub mod intake;
pub mod message;
pub mod preview;
pub mod process;
pub mod report;
pub mod simulator;
pub mod state;
pub mod store;

// Re-export primary types
pub use actions::ActionContext;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use simulator::{DiagnosisEngine, LocalDiagnosisEngine, SimulatedDiagnosis};
pub use state::{AppState, Screen};
pub use store::{FileStore, MemoryStore, PreferenceStore};
