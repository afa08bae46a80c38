//! Full-screen rendering tests

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use drcrop_app::handler::update;
use drcrop_app::message::Message;
use drcrop_app::store::SessionSlot;
use drcrop_core::{Crop, DiagnosisResult, Language, SessionRecord};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

fn with_session(language: Language) -> AppState {
    let mut state = create_test_state();
    let record = SessionRecord::new(
        Some(Crop::Potato),
        Some("data:image/png;base64,AA".into()),
        language,
    );
    SessionSlot::write(state.store.as_mut(), &record).unwrap();
    state
}

/// Open the results screen and resolve its diagnosis
fn resolve(state: &mut AppState, result: DiagnosisResult) {
    update(state, Message::Navigate(Screen::Results));
    let visit = state.results.as_ref().unwrap().visit;
    update(state, Message::DiagnosisCompleted { visit, result });
}

#[test]
fn test_entry_screen() {
    let state = create_test_state();
    let term = draw(&state);
    assert!(term.buffer_contains("Choose Language"));
    assert!(term.buffer_contains("Continue"));
}

#[test]
fn test_dashboard_after_continue() {
    let mut state = create_test_state();
    update(&mut state, Message::ChooseLanguage(Language::En));
    update(&mut state, Message::ContinueFromLanguage);

    let term = draw(&state);
    assert!(term.buffer_contains("Dr. Crop Dashboard"));
    assert!(term.buffer_contains("Select Your Crop"));
    assert!(term.buffer_contains("Upload Crop Image"));
}

#[test]
fn test_results_without_session_never_renders_diagnosis() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(Screen::Results));

    let term = draw(&state);
    assert!(term.buffer_contains("Dr. Crop Dashboard"));
    assert!(!term.buffer_contains("Expert Recommendations"));
    assert!(!term.buffer_contains("AI Analysis in Progress"));
}

#[test]
fn test_results_loading_then_resolved() {
    let mut state = with_session(Language::En);
    update(&mut state, Message::Navigate(Screen::Results));
    assert!(draw(&state).buffer_contains("AI Analysis in Progress..."));

    let visit = state.results.as_ref().unwrap().visit;
    update(
        &mut state,
        Message::DiagnosisCompleted {
            visit,
            result: DiagnosisResult::new(true, 88),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("Healthy Crop Detected!"));
    assert!(term.buffer_contains("88% Confidence"));
    assert!(term.buffer_contains("Potato"));
}

#[test]
fn test_results_follow_record_language_not_current() {
    let mut state = with_session(Language::Hi);
    state.language = Language::En;
    resolve(&mut state, DiagnosisResult::new(false, 90));

    let term = draw(&state);
    assert!(!term.buffer_contains("Expert Recommendations"));
    assert!(!term.buffer_contains("Disease Symptoms Detected"));
}

#[test]
fn test_notice_overlays_dashboard() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(Screen::Dashboard));
    update(&mut state, Message::Analyze);

    let term = draw(&state);
    assert!(term.buffer_contains("Please select a crop type first"));
    assert!(term.buffer_contains("[ OK ]"));
}

#[test]
fn test_auth_screens() {
    let mut state = create_test_state();
    update(&mut state, Message::Navigate(Screen::Login));
    assert!(draw(&state).buffer_contains("Don't have an account? Sign Up"));

    update(&mut state, Message::Navigate(Screen::Signup));
    assert!(draw(&state).buffer_contains("Already have an account? Log In"));
}

#[test]
fn test_every_screen_renders_in_compact_terminal() {
    let mut state = with_session(Language::En);
    for screen in Screen::ALL {
        update(&mut state, Message::Navigate(screen));
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }

    resolve(&mut state, DiagnosisResult::new(false, 81));
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
}
