//! Dashboard handlers: image intake and the analyze command

use std::path::PathBuf;

use drcrop_core::Error;
use tracing::{debug, info, warn};

use crate::content::Text;
use crate::handoff;
use crate::intake::{self, IntakeToken, UploadedImage};
use crate::message::Message;
use crate::state::{AppState, DashboardFocus, Screen, StatusLevel};
use crate::store::SessionSlot;

use super::update::navigate;
use super::{UpdateAction, UpdateResult};

pub(super) fn handle_toggle_focus(state: &mut AppState) -> UpdateResult {
    state.dashboard.focus = match state.dashboard.focus {
        DashboardFocus::Crops => DashboardFocus::Upload,
        DashboardFocus::Upload => DashboardFocus::Crops,
    };
    UpdateResult::none()
}

/// Enter in the upload field
pub(super) fn handle_submit_path(state: &mut AppState) -> UpdateResult {
    match intake::parse_dropped_path(&state.dashboard.path_input) {
        Some(path) => UpdateResult::message(Message::IntakePath(path)),
        None => UpdateResult::none(),
    }
}

/// Validate the media type and start loading. Rejected files leave the
/// current image untouched.
pub(super) fn handle_intake_path(state: &mut AppState, path: PathBuf) -> UpdateResult {
    let media_type = match intake::check_image_path(&path) {
        Ok(media_type) => media_type,
        Err(e) => {
            debug!("Rejected intake: {}", e);
            if state.settings.intake.notify_rejected {
                let text = Text::OnlyImages.get(state.language);
                state.set_status(StatusLevel::Warning, text);
            }
            return UpdateResult::none();
        }
    };

    let token = state.dashboard.intake.issue();
    state.dashboard.path_input.clear();
    debug!("Intake #{} accepted: {:?} ({})", token.value(), path, media_type);

    UpdateResult::action(UpdateAction::LoadImage {
        token,
        path,
        media_type,
    })
}

pub(super) fn handle_image_loaded(
    state: &mut AppState,
    token: IntakeToken,
    image: UploadedImage,
) -> UpdateResult {
    if !state.dashboard.intake.complete(token) {
        debug!("Dropping stale intake #{} ({})", token.value(), image.file_name);
        return UpdateResult::none();
    }

    info!("Image ready: {} ({} bytes)", image.file_name, image.byte_len);
    state.dashboard.image = Some(image);
    UpdateResult::none()
}

pub(super) fn handle_image_load_failed(
    state: &mut AppState,
    token: IntakeToken,
    error: String,
) -> UpdateResult {
    if !state.dashboard.intake.complete(token) {
        debug!("Dropping stale intake failure #{}: {}", token.value(), error);
        return UpdateResult::none();
    }

    warn!("Image intake failed: {}", error);
    state.set_status(StatusLevel::Error, format!("Could not load image: {}", error));
    UpdateResult::none()
}

/// Bundle the selections, persist them and open the results screen
pub(super) fn handle_analyze(state: &mut AppState) -> UpdateResult {
    let lang = state.language;
    let crop = state.dashboard.crops.selected();
    let image = state.dashboard.image.as_ref().map(|i| i.data_uri.as_str());

    // The analyze command needs an image even when a crop is chosen
    if crop.is_some() && image.is_none() {
        state.show_notice(Text::UploadImageFirst.get(lang), None);
        return UpdateResult::none();
    }

    let record = match handoff::submit(crop, image, lang) {
        Ok(record) => record,
        Err(Error::MissingPrecondition) => {
            state.show_notice(Text::SelectCropFirst.get(lang), None);
            return UpdateResult::none();
        }
        Err(e) => {
            warn!("Submit failed: {}", e);
            state.set_status(StatusLevel::Error, e.to_string());
            return UpdateResult::none();
        }
    };

    // The store keeps the value in memory even when the disk write fails
    if let Err(e) = SessionSlot::write(state.store.as_mut(), &record) {
        warn!("Failed to persist session: {}", e);
        state.set_status(StatusLevel::Error, format!("Could not save session: {}", e));
    }

    info!("Submitted session for crop '{}'", record.crop);
    navigate(state, Screen::Results)
}
