//! Reusable field validators
//!
//! Validators receive the field name and the submitted JSON value and report
//! the user-facing message shown inline on the form. Messages are written in
//! the console's locale.
//!
//! Except for [`required`], every validator passes `null` through: presence
//! is the job of `required`, everything else checks shape.

use crate::core::field::FieldFormat;
use serde_json::Value;

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Validator: field must be present and non-empty
pub fn required() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match value {
        Value::Null => Err(format!("El campo '{}' es obligatorio", field)),
        Value::String(s) if s.trim().is_empty() => {
            Err(format!("El campo '{}' es obligatorio", field))
        }
        _ => Ok(()),
    }
}

/// Validator: value must parse as a number
pub fn numeric() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        if as_number(value).is_some() {
            Ok(())
        } else {
            Err(format!("El campo '{}' debe ser numérico", field))
        }
    }
}

/// Validator: number must not be negative
pub fn non_negative() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| match as_number(value) {
        Some(num) if num < 0.0 => Err(format!(
            "El campo '{}' no puede ser negativo (valor: {})",
            field, num
        )),
        _ => Ok(()),
    }
}

/// Validator: value must parse as a non-negative integer
pub fn integer() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            return Ok(());
        }
        let ok = match value {
            Value::Number(n) => n.as_u64().is_some(),
            Value::String(s) => s.trim().parse::<u32>().is_ok(),
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(format!("El campo '{}' debe ser un número entero", field))
        }
    }
}

/// Validator: value must be one of the allowed labels
pub fn one_of(
    allowed: &'static [&'static str],
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !allowed.contains(&s) {
                return Err(format!(
                    "El campo '{}' debe ser uno de: {} (valor actual: {})",
                    field,
                    allowed.join(", "),
                    s
                ));
            }
        }
        Ok(())
    }
}

/// Validator: value must be a calendar date in `AAAA-MM-DD` form
pub fn iso_date() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !FieldFormat::IsoDate.check(s) {
                return Err(format!(
                    "El campo '{}' debe ser una fecha AAAA-MM-DD (valor actual: {})",
                    field, s
                ));
            }
        }
        Ok(())
    }
}

/// Validator: value must look like an email address
pub fn email() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !FieldFormat::Email.check(s) {
                return Err(format!("'{}' no es un correo válido", field));
            }
        }
        Ok(())
    }
}

/// Validator: value must look like a phone number
pub fn phone() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if let Some(s) = value.as_str() {
            if !FieldFormat::Phone.check(s) {
                return Err(format!("'{}' no es un teléfono válido", field));
            }
        }
        Ok(())
    }
}
