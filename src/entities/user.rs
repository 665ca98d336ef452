//! User account entity, managed from the admin-only users screen
//!
//! Accounts carry no password: they exist for access gating only.

use crate::core::error::FormError;
use crate::core::form::{self, FormModel};
use crate::core::record::RecordId;
use crate::core::session::Role;
use crate::core::validation::{FormSchema, filters, validators};
use crate::impl_record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One console user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: RecordId,
    pub username: String,
    pub role: Role,
}

impl UserAccount {
    /// Create an account candidate; the store assigns the identifier
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            id: 0,
            username: username.into(),
            role,
        }
    }
}

impl_record!(UserAccount, "user", "users", [username, role]);

impl FormModel for UserAccount {
    fn form_schema() -> FormSchema {
        FormSchema::new("user")
            .filter("username", filters::trim())
            .validator("username", validators::required())
            .validator("role", validators::required())
            .validator("role", validators::one_of(Role::LABELS))
    }

    fn from_form(fields: &Map<String, Value>, _existing: Option<&Self>) -> Result<Self, FormError> {
        Ok(Self {
            id: 0,
            username: form::text(fields, "username")?,
            role: form::parsed(fields, "role")?,
        })
    }
}

/// Demo accounts the console starts with
pub fn seed() -> Vec<UserAccount> {
    vec![
        UserAccount::new("admin", Role::Admin),
        UserAccount::new("user", Role::User),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::bind;
    use crate::core::record::Record;
    use serde_json::json;

    #[test]
    fn test_bind_create() {
        let submission = json!({"username": "carla", "role": "admin"});
        let account = bind::<UserAccount>(&submission, None).unwrap();
        assert_eq!(account.username, "carla");
        assert_eq!(account.role, Role::Admin);
    }

    #[test]
    fn test_bind_rejects_unknown_role() {
        let submission = json!({"username": "carla", "role": "root"});
        assert!(bind::<UserAccount>(&submission, None).is_err());
    }

    #[test]
    fn test_bind_edit_inherits_id() {
        let mut existing = UserAccount::new("user", Role::User);
        existing.id = 2;
        let submission = json!({"username": "user", "role": "admin"});
        let updated = bind::<UserAccount>(&submission, Some(&existing)).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.role, Role::Admin);
    }

    #[test]
    fn test_searchable_projection() {
        let account = &seed()[0];
        assert!(account.matches("admin"));
        assert!(!account.matches("carla"));
    }
}
