//! Declarative per-entity form schemas

use crate::core::error::{FieldError, FormError};
use serde_json::{Map, Value};

type ValidatorFn = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type FilterFn = Box<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// Validation and filtering rules for one entity's form.
///
/// Filters run first and normalize values in place; validators run next, in
/// registration order, and accumulate inline field errors so the form can
/// show every problem at once.
pub struct FormSchema {
    entity: &'static str,
    filters: Vec<(&'static str, FilterFn)>,
    validators: Vec<(&'static str, ValidatorFn)>,
}

impl FormSchema {
    /// Create an empty schema for the named entity
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// The entity this schema validates
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Register a filter for a field
    pub fn filter(
        mut self,
        field: &'static str,
        filter: impl Fn(&str, Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.filters.push((field, Box::new(filter)));
        self
    }

    /// Register a validator for a field.
    ///
    /// A field may carry several validators; call this once per rule.
    pub fn validator(
        mut self,
        field: &'static str,
        validator: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validators.push((field, Box::new(validator)));
        self
    }

    /// Normalize submitted fields in place
    pub fn apply_filters(&self, fields: &mut Map<String, Value>) {
        for (field, filter) in &self.filters {
            if let Some(value) = fields.get(*field) {
                let filtered = filter(field, value.clone());
                fields.insert((*field).to_string(), filtered);
            }
        }
    }

    /// Run every validator, accumulating inline field errors.
    ///
    /// Missing fields are validated as `null` so that `required` rules fire.
    pub fn validate(&self, fields: &Map<String, Value>) -> Result<(), FormError> {
        let mut errors = Vec::new();
        for (field, validator) in &self.validators {
            let value = fields.get(*field).unwrap_or(&Value::Null);
            if let Err(message) = validator(field, value) {
                errors.push(FieldError {
                    field: (*field).to_string(),
                    message,
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::FieldErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{filters, validators};
    use serde_json::json;

    fn schema() -> FormSchema {
        FormSchema::new("invoice")
            .filter("supplier", filters::trim())
            .validator("supplier", validators::required())
            .validator("amount", validators::required())
            .validator("amount", validators::numeric())
    }

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test value is an object")
    }

    #[test]
    fn test_valid_submission_passes() {
        let mut f = fields(json!({"supplier": "  TechCorp ", "amount": "5000"}));
        let s = schema();
        s.apply_filters(&mut f);
        assert_eq!(f["supplier"], json!("TechCorp"));
        assert!(s.validate(&f).is_ok());
    }

    #[test]
    fn test_missing_field_is_validated_as_null() {
        let f = fields(json!({"amount": 10}));
        let err = schema().validate(&f).unwrap_err();
        match err {
            FormError::FieldErrors(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "supplier");
            }
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let f = fields(json!({"supplier": "", "amount": "mucho"}));
        let err = schema().validate(&f).unwrap_err();
        match err {
            FormError::FieldErrors(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["supplier", "amount"]);
            }
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_trim_runs_before_required() {
        // A whitespace-only value is trimmed to empty and then rejected.
        let mut f = fields(json!({"supplier": "   ", "amount": 1}));
        let s = schema();
        s.apply_filters(&mut f);
        assert!(s.validate(&f).is_err());
    }
}
