//! Invoice entity: supplier, amount, date, payment status and an optional
//! attached document

use crate::core::error::FormError;
use crate::core::form::{self, FormModel};
use crate::core::record::RecordId;
use crate::core::validation::{FormSchema, filters, validators};
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Pagada")]
    Paid,
}

impl InvoiceStatus {
    /// Labels accepted by the invoice form
    pub const LABELS: &'static [&'static str] = &["Pendiente", "Pagada"];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pendiente",
            InvoiceStatus::Paid => "Pagada",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendiente" => Ok(InvoiceStatus::Pending),
            "Pagada" => Ok(InvoiceStatus::Paid),
            other => Err(format!("estado desconocido: {}", other)),
        }
    }
}

/// A document attached to an invoice.
///
/// The payload is held by reference: cloning an attachment (or the invoice
/// carrying it) never copies the bytes. The token backs an ephemeral viewing
/// link; nothing is ever written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    token: Uuid,
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    bytes: Arc<Vec<u8>>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Size of the payload in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Ephemeral viewing link for this attachment.
    ///
    /// Valid only for the lifetime of the process, like an object URL.
    pub fn url(&self) -> String {
        format!("blob:{}", self.token)
    }
}

/// One supplier invoice.
///
/// The supplier is a free-text name; no relationship to the supplier
/// collection is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: RecordId,
    pub supplier: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Invoice {
    /// Create an invoice candidate; the store assigns the identifier
    pub fn new(
        supplier: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            id: 0,
            supplier: supplier.into(),
            amount,
            date,
            status,
            attachment: None,
        }
    }

    /// Attach a document, replacing any existing one
    pub fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }
}

impl_record!(Invoice, "invoice", "invoices", [supplier, amount, date, status]);

impl FormModel for Invoice {
    fn form_schema() -> FormSchema {
        FormSchema::new("invoice")
            .filter("supplier", filters::trim())
            .validator("supplier", validators::required())
            .validator("amount", validators::required())
            .validator("amount", validators::numeric())
            .validator("amount", validators::non_negative())
            .validator("date", validators::required())
            .validator("date", validators::iso_date())
            .validator("status", validators::required())
            .validator("status", validators::one_of(InvoiceStatus::LABELS))
    }

    fn from_form(fields: &Map<String, Value>, existing: Option<&Self>) -> Result<Self, FormError> {
        Ok(Self {
            id: 0,
            supplier: form::text(fields, "supplier")?,
            amount: form::number(fields, "amount")?,
            date: form::date(fields, "date")?,
            status: form::parsed(fields, "status")?,
            // The attachment is not a form field: an edited invoice keeps
            // its current document.
            attachment: existing.and_then(|invoice| invoice.attachment.clone()),
        })
    }
}

/// Demo invoices the console starts with
pub fn seed() -> Vec<Invoice> {
    vec![
        Invoice::new(
            "TechCorp",
            5000.0,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            InvoiceStatus::Pending,
        ),
        Invoice::new(
            "SoftwareSolutions",
            7500.0,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            InvoiceStatus::Paid,
        ),
        Invoice::new(
            "NetworkPro",
            3000.0,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            InvoiceStatus::Pending,
        ),
    ]
}
