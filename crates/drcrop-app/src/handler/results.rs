//! Results screen: visit lifecycle, diagnosis completion and report export
//!
//! Each entry into the results screen is a new visit. Completions carry the
//! visit id and are applied only while that visit is still on screen.

use std::path::PathBuf;

use chrono::Local;
use drcrop_core::DiagnosisResult;
use tracing::{debug, info, warn};

use crate::content::Text;
use crate::message::Message;
use crate::preview::ImagePreview;
use crate::report;
use crate::state::{AppState, DiagnosisPhase, ResultsState, Screen, StatusLevel};
use crate::store::SessionSlot;

use super::update::navigate;
use super::{UpdateAction, UpdateResult};

/// Enter the results screen: load the session or fall back to the dashboard
pub(super) fn enter(state: &mut AppState) -> UpdateResult {
    let record = match SessionSlot::read(state.store.as_ref()) {
        Some(record) if record.is_analyzable() => record,
        _ => {
            debug!("No analyzable session, redirecting to dashboard");
            return navigate(state, Screen::Dashboard);
        }
    };

    let visit = state.next_visit();
    let mut results = ResultsState::new(visit, record.clone());

    // Reuse the dashboard preview when the record carries that same upload
    if let Some(image) = state
        .dashboard
        .image
        .as_ref()
        .filter(|image| record.image.as_deref() == Some(image.data_uri.as_str()))
    {
        results.preview = image.preview.clone();
        results.image_name = Some(image.file_name.clone());
        results.image_bytes = Some(image.byte_len);
    }

    let needs_preview = results.image_bytes.is_none();
    results.phase = DiagnosisPhase::Loading;

    info!("Results visit #{} started", visit);
    state.results = Some(results);
    state.screen = Screen::Results;

    let result = UpdateResult::action(UpdateAction::RunDiagnosis { visit, record });
    if needs_preview {
        result.and_message(Message::RequestPreview { visit })
    } else {
        result
    }
}

/// Active results state for `visit`, `None` if that visit has ended
fn current_visit(state: &mut AppState, visit: u64) -> Option<&mut ResultsState> {
    if state.screen != Screen::Results {
        return None;
    }
    state.results.as_mut().filter(|r| r.visit == visit)
}

pub(super) fn handle_request_preview(state: &mut AppState, visit: u64) -> UpdateResult {
    let data_uri = current_visit(state, visit).and_then(|r| r.record.image.clone());
    match data_uri {
        Some(data_uri) => UpdateResult::action(UpdateAction::DecodePreview { visit, data_uri }),
        None => UpdateResult::none(),
    }
}

pub(super) fn handle_preview_decoded(
    state: &mut AppState,
    visit: u64,
    preview: Option<ImagePreview>,
    byte_len: Option<usize>,
) -> UpdateResult {
    if let Some(results) = current_visit(state, visit) {
        results.preview = preview;
        results.image_bytes = byte_len;
    }
    UpdateResult::none()
}

pub(super) fn handle_diagnosis_completed(
    state: &mut AppState,
    visit: u64,
    result: DiagnosisResult,
) -> UpdateResult {
    match current_visit(state, visit) {
        Some(results) if results.is_loading() => {
            results.phase = DiagnosisPhase::Resolved(result);
        }
        _ => debug!("Dropping diagnosis for ended visit #{}", visit),
    }
    UpdateResult::none()
}

pub(super) fn handle_diagnosis_failed(
    state: &mut AppState,
    visit: u64,
    error: String,
) -> UpdateResult {
    match current_visit(state, visit) {
        Some(results) if results.is_loading() => {
            warn!("Diagnosis failed for visit #{}: {}", visit, error);
            results.phase = DiagnosisPhase::Failed(error);
        }
        _ => debug!("Dropping failure for ended visit #{}: {}", visit, error),
    }
    UpdateResult::none()
}

/// Clear the session slot and go back to a fresh dashboard
pub(super) fn handle_analyze_another(state: &mut AppState) -> UpdateResult {
    if let Err(e) = SessionSlot::clear(state.store.as_mut()) {
        warn!("Failed to clear session: {}", e);
    }
    navigate(state, Screen::Dashboard)
}

pub(super) fn handle_save_report(state: &mut AppState) -> UpdateResult {
    let Some(results) = state.results.as_ref() else {
        return UpdateResult::none();
    };
    let Some(result) = results.result() else {
        return UpdateResult::none();
    };

    let at = Local::now();
    let contents = report::build_report(&results.record, result, results.image_name.as_deref(), at);
    UpdateResult::action(UpdateAction::SaveReport { contents, at })
}

pub(super) fn handle_report_saved(state: &mut AppState, path: PathBuf) -> UpdateResult {
    let lang = state.display_language();
    state.set_status(
        StatusLevel::Info,
        format!("{}: {}", Text::SaveReport.get(lang), path.display()),
    );
    UpdateResult::none()
}

pub(super) fn handle_report_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Report export failed: {}", error);
    state.set_status(StatusLevel::Error, error);
    UpdateResult::none()
}
