//! Payment entity: a payment recorded against an invoice identifier

use crate::core::error::FormError;
use crate::core::form::{self, FormModel};
use crate::core::record::RecordId;
use crate::core::validation::{FormSchema, validators};
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Transferencia")]
    Transfer,
    #[serde(rename = "Tarjeta de Crédito")]
    CreditCard,
    #[serde(rename = "Cheque")]
    Check,
}

impl PaymentMethod {
    /// Labels accepted by the payment form
    pub const LABELS: &'static [&'static str] = &["Transferencia", "Tarjeta de Crédito", "Cheque"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::CreditCard => "Tarjeta de Crédito",
            PaymentMethod::Check => "Cheque",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Transferencia" => Ok(PaymentMethod::Transfer),
            "Tarjeta de Crédito" => Ok(PaymentMethod::CreditCard),
            "Cheque" => Ok(PaymentMethod::Check),
            other => Err(format!("método de pago desconocido: {}", other)),
        }
    }
}

/// One recorded payment.
///
/// `invoice_id` is taken as submitted; it is never checked against the
/// invoice collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: RecordId,
    pub invoice_id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
}

impl Payment {
    /// Create a payment candidate; the store assigns the identifier
    pub fn new(invoice_id: RecordId, amount: f64, date: NaiveDate, method: PaymentMethod) -> Self {
        Self {
            id: 0,
            invoice_id,
            amount,
            date,
            method,
        }
    }
}

impl_record!(Payment, "payment", "payments", [invoice_id, amount, date, method]);

impl FormModel for Payment {
    fn form_schema() -> FormSchema {
        FormSchema::new("payment")
            .validator("invoice_id", validators::required())
            .validator("invoice_id", validators::integer())
            .validator("amount", validators::required())
            .validator("amount", validators::numeric())
            .validator("amount", validators::non_negative())
            .validator("date", validators::required())
            .validator("date", validators::iso_date())
            .validator("method", validators::required())
            .validator("method", validators::one_of(PaymentMethod::LABELS))
    }

    fn from_form(fields: &Map<String, Value>, _existing: Option<&Self>) -> Result<Self, FormError> {
        Ok(Self {
            id: 0,
            invoice_id: form::integer(fields, "invoice_id")?,
            amount: form::number(fields, "amount")?,
            date: form::date(fields, "date")?,
            method: form::parsed(fields, "method")?,
        })
    }
}

/// Demo payments the console starts with
pub fn seed() -> Vec<Payment> {
    vec![
        Payment::new(
            2,
            7500.0,
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            PaymentMethod::Transfer,
        ),
        Payment::new(
            3,
            3000.0,
            NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            PaymentMethod::CreditCard,
        ),
        Payment::new(
            1,
            5000.0,
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            PaymentMethod::Check,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::bind;
    use crate::core::record::Record;
    use serde_json::json;

    #[test]
    fn test_method_labels_roundtrip() {
        for label in PaymentMethod::LABELS {
            let method: PaymentMethod = label.parse().unwrap();
            assert_eq!(&method.to_string(), label);
        }
        assert!("Efectivo".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_bind_accepts_unknown_invoice_reference() {
        // No cross-entity check: invoice 999 does not need to exist.
        let submission = json!({
            "invoice_id": 999,
            "amount": 100,
            "date": "2024-04-02",
            "method": "Cheque",
        });
        let payment = bind::<Payment>(&submission, None).unwrap();
        assert_eq!(payment.invoice_id, 999);
    }

    #[test]
    fn test_bind_rejects_non_integer_invoice_reference() {
        let submission = json!({
            "invoice_id": "dos",
            "amount": 100,
            "date": "2024-04-02",
            "method": "Cheque",
        });
        assert!(bind::<Payment>(&submission, None).is_err());
    }

    #[test]
    fn test_searchable_projection_includes_invoice_id() {
        let payment = &seed()[0];
        assert!(payment.matches("2"));
        assert!(payment.matches("transferencia"));
        assert!(!payment.matches("cheque"));
    }
}
