//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use drcrop_core::{Crop, DiagnosisResult, Language};

use crate::input_key::InputKey;
use crate::intake::{IntakeToken, UploadedImage};
use crate::preview::ImagePreview;
use crate::state::Screen;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste; a single path is treated as a dropped file
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately
    Quit,

    /// Open a screen
    Navigate(Screen),

    /// Dismiss the blocking notice
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Language Select
    // ─────────────────────────────────────────────────────────
    LanguageFocusNext,
    LanguageFocusPrev,
    /// Enter/Space on the focused item
    LanguageActivate,
    ChooseLanguage(Language),
    /// Persist the choice and open the dashboard (no-op without a choice)
    ContinueFromLanguage,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    CropCursorUp,
    CropCursorDown,
    SelectHighlightedCrop,
    SelectCrop(Crop),
    ToggleDashboardFocus,

    /// Replace the upload field text
    PathInput { text: String },

    /// Take the upload field text as the file to load
    SubmitPath,

    /// Validated image path from the field or a drop
    IntakePath(PathBuf),

    ImageLoaded {
        token: IntakeToken,
        image: Box<UploadedImage>,
    },

    ImageLoadFailed {
        token: IntakeToken,
        error: String,
    },

    Analyze,

    // ─────────────────────────────────────────────────────────
    // Login / Signup
    // ─────────────────────────────────────────────────────────
    AuthFocusNext,
    AuthFocusPrev,
    AuthTypeChar(char),
    AuthBackspace,
    /// Enter on the focused element
    AuthActivate,

    // ─────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────
    /// Ask for the record image to be decoded into a preview
    RequestPreview { visit: u64 },

    PreviewDecoded {
        visit: u64,
        preview: Option<ImagePreview>,
        byte_len: Option<usize>,
    },

    DiagnosisCompleted {
        visit: u64,
        result: DiagnosisResult,
    },

    DiagnosisFailed { visit: u64, error: String },

    BackToDashboard,

    /// Clear the session slot and start over on the dashboard
    AnalyzeAnother,

    SaveReport,

    ReportSaved { path: PathBuf },

    ReportFailed { error: String },
}
