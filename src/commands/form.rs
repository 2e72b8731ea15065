use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Field;
use crate::services::session::SubmitError;
use crate::services::state::AppState;
use crate::utils::{format_decimal, parse_decimal};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("\"{value}\" is not a valid amount")]
    InvalidAmount { value: String },
}

/// Writes one field of the draft. Text fields take the value as entered;
/// amount fields parse first, and a failed parse leaves the draft untouched.
pub fn update_field(state: &mut AppState, field: Field, value: &str) -> Result<(), UpdateError> {
    let draft = &mut state.session.draft;
    match field {
        Field::VendorName => draft.vendor_name = value.to_string(),
        Field::VendorNumber => draft.vendor_number = value.to_string(),
        Field::VendorDate => draft.vendor_date = value.to_string(),
        Field::VendorDescription => draft.vendor_description = value.to_string(),
        Field::PoNumber => draft.po_number = value.to_string(),
        Field::InvoiceNumber => draft.invoice_number = value.to_string(),
        Field::TotalAmount => draft.total_amount = parse_amount(value)?,
        Field::InvoiceDate => draft.invoice_date = value.to_string(),
        Field::PaymentTerms => draft.payment_terms = value.to_string(),
        Field::DueDate => draft.due_date = value.to_string(),
        Field::GlPostDate => draft.gl_post_date = value.to_string(),
        Field::InvoiceDescription => draft.invoice_description = value.to_string(),
        Field::LineAmount => draft.line_amount = parse_amount(value)?,
        Field::Account => draft.account = value.to_string(),
        Field::Department => draft.department = value.to_string(),
        Field::Location => draft.location = value.to_string(),
        Field::Description => draft.description = value.to_string(),
        Field::Comment => draft.comment = value.to_string(),
    }

    debug!(field = field.key(), "field updated");
    Ok(())
}

fn parse_amount(value: &str) -> Result<Option<f64>, UpdateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // the float parser accepts "nan" and "inf"; neither is an amount
    match parse_decimal(trimmed) {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(UpdateError::InvalidAmount {
            value: value.to_string(),
        }),
    }
}

/// Display value of one field: text as stored, amounts with two decimal
/// places, empty string when an amount is unset.
pub fn field_value(state: &AppState, field: Field) -> String {
    let draft = &state.session.draft;
    match field {
        Field::VendorName => draft.vendor_name.clone(),
        Field::VendorNumber => draft.vendor_number.clone(),
        Field::VendorDate => draft.vendor_date.clone(),
        Field::VendorDescription => draft.vendor_description.clone(),
        Field::PoNumber => draft.po_number.clone(),
        Field::InvoiceNumber => draft.invoice_number.clone(),
        Field::TotalAmount => draft.total_amount.map(format_decimal).unwrap_or_default(),
        Field::InvoiceDate => draft.invoice_date.clone(),
        Field::PaymentTerms => draft.payment_terms.clone(),
        Field::DueDate => draft.due_date.clone(),
        Field::GlPostDate => draft.gl_post_date.clone(),
        Field::InvoiceDescription => draft.invoice_description.clone(),
        Field::LineAmount => draft.line_amount.map(format_decimal).unwrap_or_default(),
        Field::Account => draft.account.clone(),
        Field::Department => draft.department.clone(),
        Field::Location => draft.location.clone(),
        Field::Description => draft.description.clone(),
        Field::Comment => draft.comment.clone(),
    }
}

pub fn submit_invoice(state: &mut AppState) -> Result<(), SubmitError> {
    let draft_id = state.session.draft.draft_id;
    match state.session.submit(&state.store) {
        Ok(()) => {
            info!(draft = %draft_id, "invoice submitted and persisted");
            Ok(())
        }
        Err(error) => {
            match &error {
                SubmitError::Invalid(errors) => {
                    warn!(draft = %draft_id, fields = errors.len(), "submit blocked by validation")
                }
                SubmitError::Store(store_error) => {
                    warn!(draft = %draft_id, error = %store_error, "submit could not persist")
                }
            }
            Err(error)
        }
    }
}

/// The draft button acknowledges the request and does nothing else; no
/// draft persistence is wired up.
pub fn save_draft(state: &AppState) {
    debug!(draft = %state.session.draft.draft_id, "save as draft requested, nothing persisted");
}

pub fn close_modal(state: &mut AppState) {
    state.session.close_modal();
    debug!("confirmation dismissed");
}
