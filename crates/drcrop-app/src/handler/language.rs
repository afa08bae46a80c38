//! Entry screen: language choice and Continue

use drcrop_core::Language;
use tracing::{info, warn};

use crate::message::Message;
use crate::state::{AppState, LanguageItem, Screen, StatusLevel};
use crate::store::LanguagePreference;

use super::update::navigate;
use super::UpdateResult;

pub(super) fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.language_select.focus = state.language_select.focus.next();
    UpdateResult::none()
}

pub(super) fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.language_select.focus = state.language_select.focus.prev();
    UpdateResult::none()
}

pub(super) fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.language_select.focus.language() {
        Some(lang) => UpdateResult::message(Message::ChooseLanguage(lang)),
        None => UpdateResult::message(Message::ContinueFromLanguage),
    }
}

pub(super) fn handle_choose(state: &mut AppState, lang: Language) -> UpdateResult {
    state.language_select.choice = Some(lang);
    state.language_select.focus = match lang {
        Language::En => LanguageItem::English,
        Language::Hi => LanguageItem::Hindi,
    };
    UpdateResult::none()
}

/// Persist the chosen language and open the dashboard
pub(super) fn handle_continue(state: &mut AppState) -> UpdateResult {
    let Some(lang) = state.language_select.choice else {
        return UpdateResult::none();
    };

    if let Err(e) = LanguagePreference::set(state.store.as_mut(), lang) {
        warn!("Failed to persist language preference: {}", e);
        state.set_status(StatusLevel::Error, format!("Could not save language: {}", e));
    }

    info!("Display language set to {}", lang);
    state.language = lang;
    navigate(state, Screen::Dashboard)
}
