//! Session handoff: bundle the dashboard selections into a [`SessionRecord`]

use drcrop_core::prelude::*;
use drcrop_core::{Crop, Language, SessionRecord};

/// Build the record handed to the results screen.
///
/// Fails with [`Error::MissingPrecondition`] only when neither a crop nor an
/// image is present. Persisting the record is the caller's job.
pub fn submit(crop: Option<Crop>, image: Option<&str>, language: Language) -> Result<SessionRecord> {
    let image = image.filter(|uri| !uri.is_empty());
    if crop.is_none() && image.is_none() {
        return Err(Error::MissingPrecondition);
    }

    Ok(SessionRecord::new(crop, image.map(str::to_string), language))
}
