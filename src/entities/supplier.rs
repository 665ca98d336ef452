//! Supplier entity: name and contact details

use crate::core::error::FormError;
use crate::core::form::{self, FormModel};
use crate::core::record::RecordId;
use crate::core::validation::{FormSchema, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One supplier directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
}

impl Supplier {
    /// Create a supplier candidate; the store assigns the identifier
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl_record!(Supplier, "supplier", "suppliers", [name, contact, email, phone]);

impl FormModel for Supplier {
    fn form_schema() -> FormSchema {
        FormSchema::new("supplier")
            .filter("name", filters::trim())
            .filter("contact", filters::trim())
            .filter("email", filters::trim())
            .filter("email", filters::lowercase())
            .filter("phone", filters::trim())
            .validator("name", validators::required())
            .validator("contact", validators::required())
            .validator("email", validators::required())
            .validator("email", validators::email())
            .validator("phone", validators::required())
            .validator("phone", validators::phone())
    }

    fn from_form(fields: &Map<String, Value>, _existing: Option<&Self>) -> Result<Self, FormError> {
        Ok(Self {
            id: 0,
            name: form::text(fields, "name")?,
            contact: form::text(fields, "contact")?,
            email: form::text(fields, "email")?,
            phone: form::text(fields, "phone")?,
        })
    }
}

/// Demo suppliers the console starts with
pub fn seed() -> Vec<Supplier> {
    vec![
        Supplier::new("TechCorp", "John Doe", "john@techcorp.com", "+1 234-567-8901"),
        Supplier::new(
            "SoftwareSolutions",
            "Jane Smith",
            "jane@softwaresolutions.com",
            "+1 987-654-3210",
        ),
        Supplier::new("NetworkPro", "Bob Johnson", "bob@networkpro.com", "+1 456-789-0123"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::bind;
    use crate::core::record::Record;
    use serde_json::json;

    #[test]
    fn test_seed_passes_its_own_form_validation() {
        // The demo data must satisfy the format validators it ships with.
        for supplier in seed() {
            let submission = json!({
                "name": supplier.name,
                "contact": supplier.contact,
                "email": supplier.email,
                "phone": supplier.phone,
            });
            assert!(bind::<Supplier>(&submission, None).is_ok());
        }
    }

    #[test]
    fn test_email_is_normalized_to_lowercase() {
        let submission = json!({
            "name": "Acme",
            "contact": "Ana",
            "email": "Ana@Acme.COM",
            "phone": "+34 600 111 222",
        });
        let supplier = bind::<Supplier>(&submission, None).unwrap();
        assert_eq!(supplier.email, "ana@acme.com");
    }

    #[test]
    fn test_invalid_email_and_phone_are_rejected() {
        let submission = json!({
            "name": "Acme",
            "contact": "Ana",
            "email": "not-an-email",
            "phone": "abc",
        });
        let err = bind::<Supplier>(&submission, None).unwrap_err();
        match err {
            FormError::FieldErrors(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected FieldErrors, got {:?}", other),
        }
    }

    #[test]
    fn test_searchable_projection() {
        let supplier = &seed()[1];
        assert!(supplier.matches("jane"));
        assert!(supplier.matches("987"));
        assert!(!supplier.matches("techcorp.com "));
    }
}
