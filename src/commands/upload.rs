use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::FileMetadata;
use crate::services::session::AttachError;
use crate::services::state::AppState;
use crate::services::upload::Attachment;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no attachment to open")]
    NoAttachment,
    #[error("could not open attachment: {0}")]
    Launch(#[from] std::io::Error),
}

/// Runs the selected path through the upload gate. Acceptance persists the
/// file metadata immediately; rejection reports why and changes nothing.
pub fn upload_file(state: &mut AppState, selection: &str) -> Result<FileMetadata, AttachError> {
    match state.session.attach(&state.store, selection) {
        Ok(metadata) => {
            info!(
                name = %metadata.name,
                size = metadata.size,
                mime = %metadata.mime_type,
                "attachment accepted"
            );
            Ok(metadata)
        }
        Err(error) => {
            warn!(error = %error, "attachment rejected");
            Err(error)
        }
    }
}

pub fn current_attachment(state: &AppState) -> Option<&Attachment> {
    state.session.attachment()
}

/// Opens the attached file with the platform handler. Returns whether the
/// file changed on disk since it was accepted.
pub fn open_attachment(state: &AppState) -> Result<bool, OpenError> {
    let attachment = state.session.attachment().ok_or(OpenError::NoAttachment)?;

    let stale = attachment.is_stale();
    if stale {
        warn!(path = %attachment.path().display(), "attachment changed on disk since upload");
    }

    open::that(attachment.path())?;
    debug!(path = %attachment.path().display(), "attachment opened");
    Ok(stale)
}
