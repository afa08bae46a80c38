//! Demo login/signup forms. No credentials leave the process.

use tracing::info;

use crate::content::Text;
use crate::state::{AppState, AuthField, Screen, StatusLevel};

use super::update::navigate;
use super::UpdateResult;

/// Enter on the focused form element
pub(super) fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.auth.focus {
        AuthField::Email => {
            state.auth.focus = AuthField::Password;
            UpdateResult::none()
        }
        AuthField::Password | AuthField::Submit => submit(state),
        AuthField::SwitchLink => {
            let other = match state.screen {
                Screen::Signup => Screen::Login,
                _ => Screen::Signup,
            };
            navigate(state, other)
        }
    }
}

fn submit(state: &mut AppState) -> UpdateResult {
    let lang = state.language;

    if !state.auth.is_complete() {
        state.set_status(StatusLevel::Warning, Text::FieldsRequired.get(lang));
        return UpdateResult::none();
    }

    let message = match state.screen {
        Screen::Signup => Text::SignupSuccess,
        _ => Text::LoginSuccess,
    };

    info!("Demo {:?} submitted", state.screen);
    state.auth.password.clear();
    state.show_notice(message.get(lang), Some(Screen::Dashboard));
    UpdateResult::none()
}
