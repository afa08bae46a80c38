//! Main update function - handles state transitions (TEA pattern)
//!
//! Screen-specific handlers live in `language`, `dashboard`, `auth` and
//! `results`; this module dispatches and owns navigation.

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState, AuthFormState, Screen};

use super::{auth, dashboard, keys::handle_key, language, results, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => handle_paste(state, text),

        Message::Tick => {
            state.on_tick();
            UpdateResult::none()
        }

        Message::Navigate(screen) => navigate(state, screen),

        Message::DismissNotice => match state.notice.take() {
            Some(notice) => match notice.then {
                Some(screen) => navigate(state, screen),
                None => UpdateResult::none(),
            },
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Language Select
        // ─────────────────────────────────────────────────────────
        Message::LanguageFocusNext => language::handle_focus_next(state),
        Message::LanguageFocusPrev => language::handle_focus_prev(state),
        Message::LanguageActivate => language::handle_activate(state),
        Message::ChooseLanguage(lang) => language::handle_choose(state, lang),
        Message::ContinueFromLanguage => language::handle_continue(state),

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::CropCursorUp => {
            state.dashboard.crops.cursor_up();
            UpdateResult::none()
        }
        Message::CropCursorDown => {
            state.dashboard.crops.cursor_down();
            UpdateResult::none()
        }
        Message::SelectHighlightedCrop => {
            state.dashboard.crops.select_highlighted();
            UpdateResult::none()
        }
        Message::SelectCrop(crop) => {
            state.dashboard.crops.select(crop);
            UpdateResult::none()
        }
        Message::ToggleDashboardFocus => dashboard::handle_toggle_focus(state),
        Message::PathInput { text } => {
            state.dashboard.path_input = text;
            UpdateResult::none()
        }
        Message::SubmitPath => dashboard::handle_submit_path(state),
        Message::IntakePath(path) => dashboard::handle_intake_path(state, path),
        Message::ImageLoaded { token, image } => {
            dashboard::handle_image_loaded(state, token, *image)
        }
        Message::ImageLoadFailed { token, error } => {
            dashboard::handle_image_load_failed(state, token, error)
        }
        Message::Analyze => dashboard::handle_analyze(state),

        // ─────────────────────────────────────────────────────────
        // Login / Signup
        // ─────────────────────────────────────────────────────────
        Message::AuthFocusNext => {
            state.auth.focus = state.auth.focus.next();
            UpdateResult::none()
        }
        Message::AuthFocusPrev => {
            state.auth.focus = state.auth.focus.prev();
            UpdateResult::none()
        }
        Message::AuthTypeChar(c) => {
            if let Some(text) = state.auth.focused_text_mut() {
                text.push(c);
            }
            UpdateResult::none()
        }
        Message::AuthBackspace => {
            if let Some(text) = state.auth.focused_text_mut() {
                text.pop();
            }
            UpdateResult::none()
        }
        Message::AuthActivate => auth::handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // Results
        // ─────────────────────────────────────────────────────────
        Message::RequestPreview { visit } => results::handle_request_preview(state, visit),
        Message::PreviewDecoded {
            visit,
            preview,
            byte_len,
        } => results::handle_preview_decoded(state, visit, preview, byte_len),
        Message::DiagnosisCompleted { visit, result } => {
            results::handle_diagnosis_completed(state, visit, result)
        }
        Message::DiagnosisFailed { visit, error } => {
            results::handle_diagnosis_failed(state, visit, error)
        }
        Message::BackToDashboard => navigate(state, Screen::Dashboard),
        Message::AnalyzeAnother => results::handle_analyze_another(state),
        Message::SaveReport => results::handle_save_report(state),
        Message::ReportSaved { path } => results::handle_report_saved(state, path),
        Message::ReportFailed { error } => results::handle_report_failed(state, error),
    }
}

/// Switch screens.
///
/// Leaving the results screen ends its visit, so a diagnosis still in flight
/// is dropped when it reports. Arriving on a form screen starts a fresh form.
pub(crate) fn navigate(state: &mut AppState, screen: Screen) -> UpdateResult {
    let from = state.screen;
    debug!("Navigate {:?} -> {:?}", from, screen);

    if screen == Screen::Results {
        return results::enter(state);
    }

    state.results = None;

    match screen {
        Screen::Dashboard if from != Screen::Dashboard => state.dashboard.reset(),
        Screen::Login | Screen::Signup if from != screen => {
            state.auth = AuthFormState::default();
        }
        _ => {}
    }

    state.screen = screen;
    UpdateResult::none()
}

/// Pasted text: a dropped file on the dashboard, typed text on the auth form
fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    if state.notice.is_some() {
        return UpdateResult::none();
    }

    match state.screen {
        Screen::Dashboard => match crate::intake::parse_dropped_path(&text) {
            Some(path) => UpdateResult::message(Message::IntakePath(path)),
            None => {
                debug!("Ignoring paste that is not a single path");
                UpdateResult::none()
            }
        },
        Screen::Login | Screen::Signup => {
            let first_line = text.lines().next().unwrap_or_default().to_string();
            if let Some(field) = state.auth.focused_text_mut() {
                field.push_str(&first_line);
            }
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}
