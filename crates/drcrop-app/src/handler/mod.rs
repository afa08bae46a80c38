//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function, message dispatch and navigation
//! - `keys`: Key event handlers per screen
//! - `language`: Entry screen handlers
//! - `dashboard`: Crop selection, image intake and the analyze command
//! - `auth`: Demo login/signup form handlers
//! - `results`: Diagnosis lifecycle and report export

pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod keys;
pub(crate) mod language;
pub(crate) mod results;
pub(crate) mod update;


use std::path::PathBuf;

use chrono::{DateTime, Local};
use drcrop_core::SessionRecord;

use crate::intake::IntakeToken;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Read and encode an accepted image file
    LoadImage {
        token: IntakeToken,
        path: PathBuf,
        media_type: &'static str,
    },

    /// Run the diagnosis engine for a results visit
    RunDiagnosis { visit: u64, record: SessionRecord },

    /// Decode the record's `data:` URI into a terminal preview
    DecodePreview { visit: u64, data_uri: String },

    /// Write a rendered report into the reports directory
    SaveReport {
        contents: String,
        at: DateTime<Local>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn and_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
