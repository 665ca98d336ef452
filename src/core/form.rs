//! Form binding: from a submitted JSON object to a validated candidate record

use crate::core::error::FormError;
use crate::core::record::Record;
use crate::core::validation::FormSchema;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Trait for records that can be built from a form submission.
///
/// The same schema and constructor serve both create and edit; edit mode is
/// distinguished only by the presence of an existing record, whose identifier
/// the candidate inherits.
pub trait FormModel: Record {
    /// The validation and filtering rules for this entity's form
    fn form_schema() -> FormSchema;

    /// Build a candidate record from validated fields.
    ///
    /// Runs after [`FormSchema::validate`] has passed, so shape errors here
    /// are exceptional. `existing` carries the record being edited, for
    /// fields that live outside the form (e.g. an invoice attachment).
    fn from_form(fields: &Map<String, Value>, existing: Option<&Self>) -> Result<Self, FormError>;
}

/// Map a form submission into a validated candidate record.
///
/// Filters normalize the submitted fields, validators accumulate inline
/// errors, and on success the candidate is built. With `existing` set (edit
/// mode) the candidate inherits that record's identifier; otherwise the
/// identifier is left for the collection store to assign.
///
/// A validation failure never mutates any store: the caller keeps the form
/// open and shows the field errors inline.
pub fn bind<T: FormModel>(submission: &Value, existing: Option<&T>) -> Result<T, FormError> {
    let Some(object) = submission.as_object() else {
        return Err(FormError::InvalidSubmission {
            message: "the submission must be a JSON object".to_string(),
        });
    };
    let mut fields = object.clone();
    let schema = T::form_schema();
    schema.apply_filters(&mut fields);
    schema.validate(&fields)?;

    let mut record = T::from_form(&fields, existing)?;
    if let Some(previous) = existing {
        record.set_id(previous.id());
    }
    Ok(record)
}

fn invalid(field: &str, message: impl Into<String>) -> FormError {
    FormError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Extract a required text field
pub fn text(fields: &Map<String, Value>, field: &str) -> Result<String, FormError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid(field, "se esperaba un texto"))
}

/// Extract a numeric field, accepting a JSON number or a numeric string
pub fn number(fields: &Map<String, Value>, field: &str) -> Result<f64, FormError> {
    match fields.get(field) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(field, "se esperaba un número")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(field, "se esperaba un número")),
        _ => Err(invalid(field, "se esperaba un número")),
    }
}

/// Extract a non-negative integer field
pub fn integer(fields: &Map<String, Value>, field: &str) -> Result<u32, FormError> {
    match fields.get(field) {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| invalid(field, "se esperaba un número entero")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid(field, "se esperaba un número entero")),
        _ => Err(invalid(field, "se esperaba un número entero")),
    }
}

/// Extract an `AAAA-MM-DD` calendar date field
pub fn date(fields: &Map<String, Value>, field: &str) -> Result<NaiveDate, FormError> {
    let raw = text(fields, field)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| invalid(field, "se esperaba una fecha AAAA-MM-DD"))
}

/// Extract a field whose type parses from its display label (enums)
pub fn parsed<T>(fields: &Map<String, Value>, field: &str) -> Result<T, FormError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = text(fields, field)?;
    raw.parse::<T>().map_err(|e| invalid(field, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test value is an object")
    }

    #[test]
    fn test_number_accepts_json_number_and_string() {
        let f = fields(json!({"amount": 5000, "other": "7500.5"}));
        assert_eq!(number(&f, "amount").unwrap(), 5000.0);
        assert_eq!(number(&f, "other").unwrap(), 7500.5);
    }

    #[test]
    fn test_number_rejects_text() {
        let f = fields(json!({"amount": "mucho"}));
        assert!(matches!(
            number(&f, "amount").unwrap_err(),
            FormError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let f = fields(json!({"invoice_id": 2.5}));
        assert!(integer(&f, "invoice_id").is_err());
    }

    #[test]
    fn test_date_parses_iso() {
        let f = fields(json!({"date": "2024-04-01"}));
        let parsed = date(&f, "date").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn test_bind_rejects_non_object_submission() {
        use crate::entities::invoice::Invoice;
        let err = bind::<Invoice>(&json!([1, 2, 3]), None).unwrap_err();
        assert!(matches!(err, FormError::InvalidSubmission { .. }));
    }
}
