//! Session gate: current identity, role, and the access policies derived
//! from it
//!
//! Login accepts any username with a declared role and unconditionally
//! succeeds; there is no credential verification anywhere in this crate. The
//! gate is a navigation guard, not a security boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role attached to a user account and to the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Labels accepted by user forms
    pub const LABELS: &'static [&'static str] = &["user", "admin"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("rol desconocido: {}", other)),
        }
    }
}

/// The identity held by an active session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

/// Holder of the at-most-one current session
#[derive(Debug, Default)]
pub struct SessionGate {
    current: Option<CurrentUser>,
}

impl SessionGate {
    /// Create a gate with no active session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, replacing any existing one.
    ///
    /// Always succeeds: any username is accepted and the role is taken as
    /// declared.
    pub fn login(&mut self, username: impl Into<String>, role: Role) -> &CurrentUser {
        let user = CurrentUser {
            username: username.into(),
            role,
        };
        tracing::info!(username = %user.username, role = %user.role, "session started");
        self.current.insert(user)
    }

    /// Clear the current session, if any
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(username = %user.username, "session ended");
        }
    }

    /// The current user, if a session is active
    pub fn current(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }

    /// The current role: `None` when unauthenticated
    pub fn current_role(&self) -> Option<Role> {
        self.current.as_ref().map(|user| user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_role() == Some(Role::Admin)
    }
}

/// Access policy for a destination or screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// No session required
    Public,

    /// Any authenticated user
    Authenticated,

    /// Admin role required
    AdminOnly,
}

impl AccessPolicy {
    /// Check whether the current session satisfies this policy
    pub fn check(&self, gate: &SessionGate) -> bool {
        match self {
            AccessPolicy::Public => true,
            AccessPolicy::Authenticated => gate.is_authenticated(),
            AccessPolicy::AdminOnly => gate.is_admin(),
        }
    }
}
