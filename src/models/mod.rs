use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One invoice being entered. Serializes to the exact payload written under
/// the `invoiceData` key; the transient `draft_id` never leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    #[serde(skip)]
    pub draft_id: Uuid,
    pub vendor_name: String,
    pub vendor_number: String,
    pub vendor_date: String,
    pub vendor_description: String,
    pub po_number: String,
    pub invoice_number: String,
    pub total_amount: Option<f64>,
    pub invoice_date: String,
    pub payment_terms: String,
    pub due_date: String,
    pub gl_post_date: String,
    pub invoice_description: String,
    pub line_amount: Option<f64>,
    pub account: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub comment: String,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        InvoiceDraft {
            draft_id: Uuid::new_v4(),
            vendor_name: String::new(),
            vendor_number: String::new(),
            vendor_date: String::new(),
            vendor_description: String::new(),
            po_number: String::new(),
            invoice_number: String::new(),
            total_amount: None,
            invoice_date: String::new(),
            payment_terms: String::new(),
            due_date: String::new(),
            gl_post_date: String::new(),
            invoice_description: String::new(),
            line_amount: None,
            account: String::new(),
            department: String::new(),
            location: String::new(),
            description: String::new(),
            comment: String::new(),
        }
    }
}

/// Metadata snapshot of an accepted upload. Serializes to the payload
/// written under the `invoiceFile` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Every editable field of the form, in form order. The `Ord` derive keeps
/// error maps iterating in the same order the fields are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    VendorName,
    VendorNumber,
    VendorDate,
    VendorDescription,
    PoNumber,
    InvoiceNumber,
    TotalAmount,
    InvoiceDate,
    PaymentTerms,
    DueDate,
    GlPostDate,
    InvoiceDescription,
    LineAmount,
    Account,
    Department,
    Location,
    Description,
    Comment,
}

impl Field {
    /// All fields in form order.
    pub const fn all() -> [Field; 18] {
        [
            Field::VendorName,
            Field::VendorNumber,
            Field::VendorDate,
            Field::VendorDescription,
            Field::PoNumber,
            Field::InvoiceNumber,
            Field::TotalAmount,
            Field::InvoiceDate,
            Field::PaymentTerms,
            Field::DueDate,
            Field::GlPostDate,
            Field::InvoiceDescription,
            Field::LineAmount,
            Field::Account,
            Field::Department,
            Field::Location,
            Field::Description,
            Field::Comment,
        ]
    }

    /// Serialized key, matching the persisted payload exactly.
    pub const fn key(self) -> &'static str {
        match self {
            Field::VendorName => "vendorName",
            Field::VendorNumber => "vendorNumber",
            Field::VendorDate => "vendorDate",
            Field::VendorDescription => "vendorDescription",
            Field::PoNumber => "poNumber",
            Field::InvoiceNumber => "invoiceNumber",
            Field::TotalAmount => "totalAmount",
            Field::InvoiceDate => "invoiceDate",
            Field::PaymentTerms => "paymentTerms",
            Field::DueDate => "dueDate",
            Field::GlPostDate => "glPostDate",
            Field::InvoiceDescription => "invoiceDescription",
            Field::LineAmount => "lineAmount",
            Field::Account => "account",
            Field::Department => "department",
            Field::Location => "location",
            Field::Description => "description",
            Field::Comment => "comment",
        }
    }

    /// Human label, as shown next to the input and inside error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Field::VendorName => "Vendor Name",
            Field::VendorNumber => "Vendor Number",
            Field::VendorDate => "Vendor Date",
            Field::VendorDescription => "Vendor Description",
            Field::PoNumber => "PO Number",
            Field::InvoiceNumber => "Invoice Number",
            Field::TotalAmount => "Total Amount",
            Field::InvoiceDate => "Invoice Date",
            Field::PaymentTerms => "Payment Terms",
            Field::DueDate => "Due Date",
            Field::GlPostDate => "GL Post Date",
            Field::InvoiceDescription => "Invoice Description",
            Field::LineAmount => "Line Amount",
            Field::Account => "Account",
            Field::Department => "Department",
            Field::Location => "Location",
            Field::Description => "Description",
            Field::Comment => "Comment",
        }
    }

    /// The section that owns this field.
    pub const fn section(self) -> Tab {
        match self {
            Field::VendorName
            | Field::VendorNumber
            | Field::VendorDate
            | Field::VendorDescription => Tab::VendorDetails,
            Field::PoNumber
            | Field::InvoiceNumber
            | Field::TotalAmount
            | Field::InvoiceDate
            | Field::PaymentTerms
            | Field::DueDate
            | Field::GlPostDate
            | Field::InvoiceDescription => Tab::InvoiceDetails,
            Field::LineAmount
            | Field::Account
            | Field::Department
            | Field::Location
            | Field::Description => Tab::ExpenseDetails,
            Field::Comment => Tab::CommentsDetails,
        }
    }
}

/// The four form sections. Switching tabs only repositions the view; all
/// sections stay mounted and editable regardless of which one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    VendorDetails,
    InvoiceDetails,
    ExpenseDetails,
    CommentsDetails,
}

impl Tab {
    /// All tabs in display order.
    pub const fn all() -> [Tab; 4] {
        [
            Tab::VendorDetails,
            Tab::InvoiceDetails,
            Tab::ExpenseDetails,
            Tab::CommentsDetails,
        ]
    }

    /// Stable identifier, used in logs and selection handling.
    pub const fn id(self) -> &'static str {
        match self {
            Tab::VendorDetails => "VENDOR_DETAILS",
            Tab::InvoiceDetails => "INVOICE_DETAILS",
            Tab::ExpenseDetails => "EXPENSE_DETAILS",
            Tab::CommentsDetails => "COMMENTS_DETAILS",
        }
    }

    /// Label shown in the tab strip.
    pub const fn label(self) -> &'static str {
        match self {
            Tab::VendorDetails => "Vendor Details",
            Tab::InvoiceDetails => "Invoice Details",
            Tab::ExpenseDetails => "Expense Details",
            Tab::CommentsDetails => "Comments",
        }
    }

    /// Anchor the view scrolls to when the tab is selected.
    pub const fn anchor(self) -> &'static str {
        match self {
            Tab::VendorDetails => "vendor-details",
            Tab::InvoiceDetails => "invoice-details",
            Tab::ExpenseDetails => "expense-details",
            Tab::CommentsDetails => "comments-details",
        }
    }

    /// Fields belonging to this section, in form order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Tab::VendorDetails => &[
                Field::VendorName,
                Field::VendorNumber,
                Field::VendorDate,
                Field::VendorDescription,
            ],
            Tab::InvoiceDetails => &[
                Field::PoNumber,
                Field::InvoiceNumber,
                Field::TotalAmount,
                Field::InvoiceDate,
                Field::PaymentTerms,
                Field::DueDate,
                Field::GlPostDate,
                Field::InvoiceDescription,
            ],
            Tab::ExpenseDetails => &[
                Field::LineAmount,
                Field::Account,
                Field::Department,
                Field::Location,
                Field::Description,
            ],
            Tab::CommentsDetails => &[Field::Comment],
        }
    }
}
