//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DashboardFocus, DiagnosisPhase, Screen};
use drcrop_core::Language;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, even over a notice
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.notice.is_some() {
        return handle_key_notice(key);
    }

    match state.screen {
        Screen::LanguageSelect => handle_key_language(key),
        Screen::Dashboard => match state.dashboard.focus {
            DashboardFocus::Crops => handle_key_dashboard(key),
            DashboardFocus::Upload => handle_key_upload_field(state, key),
        },
        Screen::Login | Screen::Signup => handle_key_auth(state, key),
        Screen::Results => handle_key_results(state, key),
    }
}

/// A blocking notice swallows everything except dismissal
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        _ => None,
    }
}

fn handle_key_language(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Left | InputKey::BackTab | InputKey::Char('k') => {
            Some(Message::LanguageFocusPrev)
        }
        InputKey::Down | InputKey::Right | InputKey::Tab | InputKey::Char('j') => {
            Some(Message::LanguageFocusNext)
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::LanguageActivate),
        InputKey::Char('1' | 'e') => Some(Message::ChooseLanguage(Language::En)),
        InputKey::Char('2' | 'h') => Some(Message::ChooseLanguage(Language::Hi)),
        InputKey::Char('c') => Some(Message::ContinueFromLanguage),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Dashboard with the crop list focused
fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CropCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CropCursorDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SelectHighlightedCrop),
        InputKey::Tab | InputKey::BackTab | InputKey::Char('u') => {
            Some(Message::ToggleDashboardFocus)
        }
        InputKey::Char('a') => Some(Message::Analyze),
        InputKey::Char('l') => Some(Message::Navigate(Screen::Login)),
        InputKey::Char('s') => Some(Message::Navigate(Screen::Signup)),
        InputKey::Esc => Some(Message::Navigate(Screen::LanguageSelect)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Dashboard with the upload path field focused
fn handle_key_upload_field(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Tab | InputKey::BackTab => Some(Message::ToggleDashboardFocus),
        InputKey::Enter => Some(Message::SubmitPath),
        InputKey::Backspace => {
            let mut text = state.dashboard.path_input.clone();
            text.pop();
            Some(Message::PathInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::PathInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = state.dashboard.path_input.clone();
            text.push(c);
            Some(Message::PathInput { text })
        }
        _ => None,
    }
}

fn handle_key_auth(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::AuthFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::AuthFocusPrev),
        InputKey::Enter => Some(Message::AuthActivate),
        InputKey::Esc => Some(Message::Navigate(Screen::Dashboard)),
        InputKey::Backspace if state.auth.focus.is_text() => Some(Message::AuthBackspace),
        InputKey::Char(c) if state.auth.focus.is_text() => Some(Message::AuthTypeChar(c)),
        InputKey::Char(' ') => Some(Message::AuthActivate),
        _ => None,
    }
}

fn handle_key_results(state: &AppState, key: InputKey) -> Option<Message> {
    let phase = state.results.as_ref().map(|r| &r.phase);

    match key {
        InputKey::Char('b') | InputKey::Esc => Some(Message::BackToDashboard),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('n') => match phase {
            Some(DiagnosisPhase::Resolved(_) | DiagnosisPhase::Failed(_)) => {
                Some(Message::AnalyzeAnother)
            }
            _ => None,
        },
        InputKey::Char('s' | 'p') => match phase {
            Some(DiagnosisPhase::Resolved(_)) => Some(Message::SaveReport),
            _ => None,
        },
        _ => None,
    }
}
