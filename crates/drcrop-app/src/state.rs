//! Application state (Model in TEA pattern)

use drcrop_core::{DiagnosisResult, Language, SessionRecord};

use crate::config::Settings;
use crate::crop_selector::CropSelector;
use crate::intake::{IntakeTracker, UploadedImage};
use crate::preview::ImagePreview;
use crate::store::{LanguagePreference, PreferenceStore};

/// Ticks a status message stays visible (~5s at the default tick rate)
pub const STATUS_TICKS: u64 = 50;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Entry screen - pick a display language
    #[default]
    LanguageSelect,

    /// Crop selection, image upload and the analyze command
    Dashboard,

    /// Demo login form
    Login,

    /// Demo signup form
    Signup,

    /// Simulated diagnosis for the submitted session
    Results,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::LanguageSelect,
        Screen::Dashboard,
        Screen::Login,
        Screen::Signup,
        Screen::Results,
    ];

    /// Route name accepted by `--route`
    pub fn route(&self) -> &'static str {
        match self {
            Screen::LanguageSelect => "language",
            Screen::Dashboard => "dashboard",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Results => "results",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        let route = route.trim().trim_start_matches('/').to_ascii_lowercase();
        if route.is_empty() {
            return Some(Screen::LanguageSelect);
        }
        Self::ALL.into_iter().find(|s| s.route() == route)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Language Select
// ─────────────────────────────────────────────────────────────────────────────

/// Items on the entry screen, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageItem {
    #[default]
    English,
    Hindi,
    Continue,
}

impl LanguageItem {
    pub fn language(&self) -> Option<Language> {
        match self {
            LanguageItem::English => Some(Language::En),
            LanguageItem::Hindi => Some(Language::Hi),
            LanguageItem::Continue => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            LanguageItem::English => LanguageItem::Hindi,
            LanguageItem::Hindi => LanguageItem::Continue,
            LanguageItem::Continue => LanguageItem::English,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            LanguageItem::English => LanguageItem::Continue,
            LanguageItem::Hindi => LanguageItem::English,
            LanguageItem::Continue => LanguageItem::Hindi,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LanguageSelectState {
    /// Chosen language; Continue is disabled while `None`
    pub choice: Option<Language>,
    pub focus: LanguageItem,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

/// Which dashboard panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    Crops,
    Upload,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub crops: CropSelector,
    pub focus: DashboardFocus,
    /// Path typed into the upload field
    pub path_input: String,
    /// Latest accepted image
    pub image: Option<UploadedImage>,
    pub intake: IntakeTracker,
}

impl DashboardState {
    /// Fresh form. Outstanding intakes are invalidated, tokens stay monotonic.
    pub fn reset(&mut self) {
        self.crops = CropSelector::new();
        self.focus = DashboardFocus::Crops;
        self.path_input.clear();
        self.image = None;
        self.intake.invalidate();
    }

    pub fn is_loading_image(&self) -> bool {
        self.intake.is_loading()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Login / Signup
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable elements of the auth form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
    Submit,
    SwitchLink,
}

impl AuthField {
    pub fn next(&self) -> Self {
        match self {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Submit,
            AuthField::Submit => AuthField::SwitchLink,
            AuthField::SwitchLink => AuthField::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            AuthField::Email => AuthField::SwitchLink,
            AuthField::Password => AuthField::Email,
            AuthField::Submit => AuthField::Password,
            AuthField::SwitchLink => AuthField::Submit,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, AuthField::Email | AuthField::Password)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthFormState {
    pub email: String,
    pub password: String,
    pub focus: AuthField,
}

impl AuthFormState {
    /// Both fields are required; whitespace-only does not count
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Text of the focused field, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AuthField::Email => Some(&mut self.email),
            AuthField::Password => Some(&mut self.password),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

/// Diagnosis progress for one results visit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiagnosisPhase {
    #[default]
    Idle,
    Loading,
    Resolved(DiagnosisResult),
    Failed(String),
}

#[derive(Debug)]
pub struct ResultsState {
    /// Id of this visit; completions for other visits are dropped
    pub visit: u64,
    pub record: SessionRecord,
    pub phase: DiagnosisPhase,
    pub preview: Option<ImagePreview>,
    /// Original file name, known only when the image came from this run
    pub image_name: Option<String>,
    pub image_bytes: Option<usize>,
    /// Spinner frame while loading
    pub animation_frame: u64,
}

impl ResultsState {
    pub fn new(visit: u64, record: SessionRecord) -> Self {
        Self {
            visit,
            record,
            phase: DiagnosisPhase::Idle,
            preview: None,
            image_name: None,
            image_bytes: None,
            animation_frame: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.record.language
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        match &self.phase {
            DiagnosisPhase::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DiagnosisPhase::Loading)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices and status
// ─────────────────────────────────────────────────────────────────────────────

/// Blocking notice (modal). Keys only dismiss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Screen to open once dismissed
    pub then: Option<Screen>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Non-blocking message in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    /// Tick at which the message was set
    pub since: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,

    /// Display language outside the results screen
    pub language: Language,

    /// Application settings from config file and CLI overrides
    pub settings: Settings,

    /// Persisted `selectedLanguage` / `analysisData` slots
    pub store: Box<dyn PreferenceStore>,

    pub language_select: LanguageSelectState,
    pub dashboard: DashboardState,
    pub auth: AuthFormState,
    pub results: Option<ResultsState>,

    pub notice: Option<Notice>,
    pub status: Option<StatusMessage>,

    /// Tick counter driving animations and status expiry
    pub tick: u64,

    visit_counter: u64,
}

impl AppState {
    pub fn new(store: Box<dyn PreferenceStore>, settings: Settings) -> Self {
        let stored = LanguagePreference::stored(store.as_ref());

        Self {
            phase: AppPhase::Running,
            screen: Screen::LanguageSelect,
            language: stored.unwrap_or_default(),
            settings,
            store,
            language_select: LanguageSelectState {
                choice: stored,
                focus: match stored {
                    Some(Language::Hi) => LanguageItem::Hindi,
                    _ => LanguageItem::English,
                },
            },
            dashboard: DashboardState::default(),
            auth: AuthFormState::default(),
            results: None,
            notice: None,
            status: None,
            tick: 0,
            visit_counter: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Allocate the id for a new results visit
    pub fn next_visit(&mut self) -> u64 {
        self.visit_counter += 1;
        self.visit_counter
    }

    /// Language the current screen is shown in
    pub fn display_language(&self) -> Language {
        match (&self.screen, &self.results) {
            (Screen::Results, Some(results)) => results.language(),
            _ => self.language,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Notice / Status Helpers
    // ─────────────────────────────────────────────────────────

    pub fn show_notice(&mut self, message: impl Into<String>, then: Option<Screen>) {
        self.notice = Some(Notice {
            message: message.into(),
            then,
        });
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: self.tick,
        });
    }

    /// Advance the tick counter, expire the status line, animate the spinner
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if let Some(status) = &self.status {
            if self.tick.saturating_sub(status.since) >= STATUS_TICKS {
                self.status = None;
            }
        }

        if let Some(results) = self.results.as_mut() {
            if results.is_loading() {
                results.animation_frame = results.animation_frame.wrapping_add(1);
            }
        }
    }
}
