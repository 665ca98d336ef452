//! Navigation destinations and the session-driven routing guard

use crate::core::session::{AccessPolicy, SessionGate};

/// The console's named destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Invoices,
    Suppliers,
    Payments,
    Users,
    Login,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/",
            Destination::Invoices => "/invoices",
            Destination::Suppliers => "/suppliers",
            Destination::Payments => "/payments",
            Destination::Users => "/users",
            Destination::Login => "/login",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Destination::Dashboard),
            "/invoices" => Some(Destination::Invoices),
            "/suppliers" => Some(Destination::Suppliers),
            "/payments" => Some(Destination::Payments),
            "/users" => Some(Destination::Users),
            "/login" => Some(Destination::Login),
            _ => None,
        }
    }

    /// The access policy guarding this destination
    pub fn policy(&self) -> AccessPolicy {
        match self {
            Destination::Login => AccessPolicy::Public,
            Destination::Users => AccessPolicy::AdminOnly,
            _ => AccessPolicy::Authenticated,
        }
    }
}

/// Outcome of resolving a navigation request against the session gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Allow(Destination),
    Redirect(Destination),
}

/// Resolve a navigation request.
///
/// Unauthenticated requests for any gated destination redirect to login;
/// authenticated requests that fail a stricter policy (the admin-only users
/// screen) redirect to the dashboard.
pub fn resolve(destination: Destination, gate: &SessionGate) -> Resolution {
    if destination.policy().check(gate) {
        Resolution::Allow(destination)
    } else if gate.is_authenticated() {
        Resolution::Redirect(Destination::Dashboard)
    } else {
        Resolution::Redirect(Destination::Login)
    }
}

/// Resolve a raw path, with the catch-all for unknown paths: dashboard when
/// authenticated, login otherwise.
pub fn resolve_path(path: &str, gate: &SessionGate) -> Resolution {
    match Destination::from_path(path) {
        Some(destination) => resolve(destination, gate),
        None if gate.is_authenticated() => Resolution::Redirect(Destination::Dashboard),
        None => Resolution::Redirect(Destination::Login),
    }
}
