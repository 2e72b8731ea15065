use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Field, InvoiceDraft};

/// Validation failures keyed by field, iterated in form order. Each field
/// carries its first violation only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Checks the whole draft. Runs at submit time only; a clean draft submits,
/// anything else reports every failing field at once.
pub fn validate(draft: &InvoiceDraft) -> Result<(), FieldErrors> {
    let mut errors = BTreeMap::new();
    for field in Field::all() {
        if let Err(message) = check_field(field, draft) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

fn check_field(field: Field, draft: &InvoiceDraft) -> Result<(), String> {
    match field {
        Field::VendorName => required_text(field, &draft.vendor_name),
        Field::VendorNumber => required_text(field, &draft.vendor_number),
        Field::VendorDate => required_text(field, &draft.vendor_date),
        Field::VendorDescription => required_text(field, &draft.vendor_description),
        Field::PoNumber => required_text(field, &draft.po_number),
        Field::InvoiceNumber => required_text(field, &draft.invoice_number),
        Field::TotalAmount => required_amount(field, draft.total_amount),
        Field::InvoiceDate => required_text(field, &draft.invoice_date),
        Field::PaymentTerms => required_text(field, &draft.payment_terms),
        Field::DueDate => required_text(field, &draft.due_date),
        Field::GlPostDate => required_text(field, &draft.gl_post_date),
        Field::InvoiceDescription => required_text(field, &draft.invoice_description),
        Field::LineAmount => required_amount(field, draft.line_amount),
        Field::Account => required_text(field, &draft.account),
        Field::Department => required_text(field, &draft.department),
        Field::Location => required_text(field, &draft.location),
        Field::Description => required_text(field, &draft.description),
        Field::Comment => required_text(field, &draft.comment),
    }
}

/// Text fields must be non-empty after trimming. Content is otherwise free
/// form; dates and identifiers carry no format rule.
fn required_text(field: Field, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(required_message(field))
    } else {
        Ok(())
    }
}

/// Amounts must be entered and not negative. Non-finite values fail the
/// range check as well; serialized they would land as `null`. A missing
/// amount reports the required message, never the range one.
fn required_amount(field: Field, value: Option<f64>) -> Result<(), String> {
    match value {
        None => Err(required_message(field)),
        Some(amount) if !amount.is_finite() || amount < 0.0 => {
            Err("Amount must be positive".to_string())
        }
        Some(_) => Ok(()),
    }
}

fn required_message(field: Field) -> String {
    match field {
        // the one plural label takes the plural verb
        Field::PaymentTerms => format!("{} are required", field.label()),
        _ => format!("{} is required", field.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> InvoiceDraft {
        InvoiceDraft {
            vendor_name: "Acme Corporation".to_string(),
            vendor_number: "V-1042".to_string(),
            vendor_date: "2024-03-01".to_string(),
            vendor_description: "Office supplies vendor".to_string(),
            po_number: "PO-7731".to_string(),
            invoice_number: "INV-2024-0042".to_string(),
            total_amount: Some(100.0),
            invoice_date: "2024-03-05".to_string(),
            payment_terms: "Net 30".to_string(),
            due_date: "2024-04-04".to_string(),
            gl_post_date: "2024-03-06".to_string(),
            invoice_description: "March stationery order".to_string(),
            line_amount: Some(50.0),
            account: "6200 Office Expense".to_string(),
            department: "Operations".to_string(),
            location: "Berlin".to_string(),
            description: "Stationery".to_string(),
            comment: "Approved".to_string(),
            ..InvoiceDraft::default()
        }
    }

    #[test]
    fn filled_draft_passes() {
        assert!(validate(&filled_draft()).is_ok());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate(&InvoiceDraft::default()).unwrap_err();
        assert_eq!(errors.len(), Field::all().len());
    }

    #[test]
    fn errors_iterate_in_form_order() {
        let errors = validate(&InvoiceDraft::default()).unwrap_err();
        let order: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(order, Field::all().to_vec());
    }

    #[test]
    fn missing_vendor_name_reports_the_label() {
        let mut draft = filled_draft();
        draft.vendor_name = String::new();

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::VendorName), Some("Vendor Name is required"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = filled_draft();
        draft.account = "   ".to_string();

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::Account), Some("Account is required"));
    }

    #[test]
    fn payment_terms_message_is_plural() {
        let mut draft = filled_draft();
        draft.payment_terms = String::new();

        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(Field::PaymentTerms),
            Some("Payment Terms are required")
        );
    }

    #[test]
    fn missing_amount_reports_required_not_range() {
        let mut draft = filled_draft();
        draft.total_amount = None;

        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(Field::TotalAmount),
            Some("Total Amount is required")
        );
    }

    #[test]
    fn negative_amount_reports_the_range_message() {
        let mut draft = filled_draft();
        draft.line_amount = Some(-0.01);

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::LineAmount), Some("Amount must be positive"));
    }

    #[test]
    fn nan_amount_reports_the_range_message() {
        let mut draft = filled_draft();
        draft.total_amount = Some(f64::NAN);

        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get(Field::TotalAmount),
            Some("Amount must be positive")
        );
    }

    #[test]
    fn infinite_amount_reports_the_range_message() {
        let mut draft = filled_draft();
        draft.line_amount = Some(f64::INFINITY);

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::LineAmount), Some("Amount must be positive"));
    }

    #[test]
    fn zero_amount_is_accepted() {
        let mut draft = filled_draft();
        draft.total_amount = Some(0.0);
        draft.line_amount = Some(0.0);

        assert!(validate(&draft).is_ok());
    }
}
