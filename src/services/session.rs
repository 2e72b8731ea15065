use thiserror::Error;

use crate::models::{FileMetadata, InvoiceDraft};
use crate::services::navigation::TabController;
use crate::services::upload::{self, Attachment, UploadError};
use crate::services::validation::{self, FieldErrors};
use crate::storage::{LocalStore, StoreError, INVOICE_DATA_KEY, INVOICE_FILE_KEY};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum AttachError {
    #[error(transparent)]
    Rejected(#[from] UploadError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// In-memory state of one entry session: the draft being edited, the
/// accepted upload, the active tab and the confirmation modal.
pub struct FormSession {
    pub draft: InvoiceDraft,
    pub tabs: TabController,
    attachment: Option<Attachment>,
    errors: FieldErrors,
    modal_open: bool,
}

impl FormSession {
    pub fn new() -> Self {
        FormSession {
            draft: InvoiceDraft::default(),
            tabs: TabController::new(),
            attachment: None,
            errors: FieldErrors::default(),
            modal_open: false,
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Errors from the last failed submit, kept for inline display.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Dismisses the confirmation modal. Touches nothing else; the fresh
    /// draft prepared on submit stays as it is.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Validates and persists the draft. On success the payload lands under
    /// `invoiceData`, the confirmation modal opens and a fresh draft replaces
    /// the submitted one; the `invoiceFile` key is left alone. On any failure
    /// the draft and attachment survive untouched.
    pub fn submit(&mut self, store: &LocalStore) -> Result<(), SubmitError> {
        if let Err(errors) = validation::validate(&self.draft) {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        let payload = serde_json::to_string(&self.draft).map_err(StoreError::from)?;
        store.put(INVOICE_DATA_KEY, &payload)?;

        self.modal_open = true;
        self.reset();
        Ok(())
    }

    /// Runs the upload gate and, on acceptance, persists the file metadata
    /// under `invoiceFile` and replaces the held attachment. A rejected file
    /// leaves the previous attachment and its persisted metadata in place.
    pub fn attach(
        &mut self,
        store: &LocalStore,
        selection: &str,
    ) -> Result<FileMetadata, AttachError> {
        let attachment = upload::evaluate(selection)?;

        let payload = serde_json::to_string(attachment.metadata()).map_err(StoreError::from)?;
        store.put(INVOICE_FILE_KEY, &payload)?;

        let metadata = attachment.metadata().clone();
        self.attachment = Some(attachment);
        Ok(metadata)
    }

    fn reset(&mut self) {
        self.draft = InvoiceDraft::default();
        self.attachment = None;
        self.errors = FieldErrors::default();
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
