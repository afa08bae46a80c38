//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs in its own tokio task and reports back with a
//! [`Message`] on the event loop channel.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::intake;
use crate::message::Message;
use crate::preview::{ImagePreview, PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH};
use crate::report;
use crate::simulator::DiagnosisEngine;
use crate::UpdateAction;

/// Everything background tasks need from the outside world
pub struct ActionContext<E> {
    pub msg_tx: mpsc::Sender<Message>,
    pub engine: Arc<E>,
    /// Directory saved reports are written into
    pub reports_dir: PathBuf,
}

impl<E> ActionContext<E> {
    pub fn new(msg_tx: mpsc::Sender<Message>, engine: E, reports_dir: PathBuf) -> Self {
        Self {
            msg_tx,
            engine: Arc::new(engine),
            reports_dir,
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<E>(action: UpdateAction, ctx: &ActionContext<E>)
where
    E: DiagnosisEngine + Sync + 'static,
{
    let msg_tx = ctx.msg_tx.clone();

    match action {
        UpdateAction::LoadImage {
            token,
            path,
            media_type,
        } => {
            tokio::spawn(async move {
                let msg = match intake::load_image(path, media_type).await {
                    Ok(image) => Message::ImageLoaded {
                        token,
                        image: Box::new(image),
                    },
                    Err(e) => Message::ImageLoadFailed {
                        token,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RunDiagnosis { visit, record } => {
            let engine = Arc::clone(&ctx.engine);
            tokio::spawn(async move {
                let msg = match engine.diagnose(&record).await {
                    Ok(result) => Message::DiagnosisCompleted { visit, result },
                    Err(e) => Message::DiagnosisFailed {
                        visit,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::DecodePreview { visit, data_uri } => {
            tokio::spawn(async move {
                let decoded = tokio::task::spawn_blocking(move || {
                    let bytes = intake::decode_data_uri(&data_uri)?;
                    let preview =
                        ImagePreview::from_bytes(&bytes, PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT);
                    Some((preview, bytes.len()))
                })
                .await;

                let (preview, byte_len) = match decoded {
                    Ok(Some((preview, len))) => (preview, Some(len)),
                    Ok(None) => (None, None),
                    Err(e) => {
                        warn!("Preview decode task failed: {}", e);
                        (None, None)
                    }
                };

                send(
                    &msg_tx,
                    Message::PreviewDecoded {
                        visit,
                        preview,
                        byte_len,
                    },
                )
                .await;
            });
        }

        UpdateAction::SaveReport { contents, at } => {
            let dir = ctx.reports_dir.clone();
            tokio::spawn(async move {
                let msg = match report::write_report(&dir, &contents, at).await {
                    Ok(path) => Message::ReportSaved { path },
                    Err(e) => Message::ReportFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Event loop gone, dropping background result");
    }
}
