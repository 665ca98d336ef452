//! Console assembly: builder and top-level application state

use crate::config::ConsoleConfig;
use crate::console::dashboard::DashboardSummary;
use crate::console::nav::{Destination, Resolution, resolve, resolve_path};
use crate::console::screen::Screen;
use crate::core::error::{ConsoleResult, SessionError};
use crate::core::session::{AccessPolicy, CurrentUser, Role, SessionGate};
use crate::core::store::CollectionStore;
use crate::entities::invoice::{self, Invoice};
use crate::entities::payment::{self, Payment};
use crate::entities::supplier::{self, Supplier};
use crate::entities::user::{self, UserAccount};
use crate::search::{SearchBackend, SearchCategory, SearchQuery, SearchScope, TracingSearchBackend};
use std::sync::Arc;

/// Builder for a [`Console`]
///
/// ```rust,ignore
/// let console = Console::builder()
///     .with_config(ConsoleConfig::from_yaml_file("finconsole.yaml")?)
///     .with_search_backend(Arc::new(TracingSearchBackend))
///     .build()?;
/// ```
pub struct ConsoleBuilder {
    config: ConsoleConfig,
    backend: Arc<dyn SearchBackend>,
}

impl ConsoleBuilder {
    pub fn new() -> Self {
        Self {
            config: ConsoleConfig::default(),
            backend: Arc::new(TracingSearchBackend),
        }
    }

    /// Use the given configuration instead of the defaults
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom search backend collaborator
    pub fn with_search_backend(mut self, backend: Arc<dyn SearchBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Assemble the console, seeding the collections when configured to
    pub fn build(self) -> ConsoleResult<Console> {
        let (invoices, suppliers, payments, users) = if self.config.seed_demo_data {
            (
                CollectionStore::seeded(invoice::seed())?,
                CollectionStore::seeded(supplier::seed())?,
                CollectionStore::seeded(payment::seed())?,
                CollectionStore::seeded(user::seed())?,
            )
        } else {
            (
                CollectionStore::new(),
                CollectionStore::new(),
                CollectionStore::new(),
                CollectionStore::new(),
            )
        };

        tracing::debug!(
            seeded = self.config.seed_demo_data,
            budget = self.config.budget,
            "console assembled"
        );

        Ok(Console {
            config: self.config,
            session: SessionGate::new(),
            invoices: Screen::new(invoices),
            suppliers: Screen::new(suppliers),
            payments: Screen::new(payments),
            users: Screen::new(users),
            search_term: String::new(),
            search_scope: SearchScope::all(),
            backend: self.backend,
        })
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state: session gate, the four CRUD screens, the
/// dashboard and the global search intent.
///
/// All state is process-local and discarded at process end.
pub struct Console {
    config: ConsoleConfig,
    session: SessionGate,
    invoices: Screen<Invoice>,
    suppliers: Screen<Supplier>,
    payments: Screen<Payment>,
    users: Screen<UserAccount>,
    search_term: String,
    search_scope: SearchScope,
    backend: Arc<dyn SearchBackend>,
}

impl Console {
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    // === Session ===

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    /// Start a session; always succeeds and replaces any existing session
    pub fn login(&mut self, username: impl Into<String>, role: Role) -> &CurrentUser {
        self.session.login(username, role)
    }

    pub fn logout(&mut self) {
        self.session.logout()
    }

    // === Navigation ===

    pub fn navigate(&self, destination: Destination) -> Resolution {
        resolve(destination, &self.session)
    }

    pub fn navigate_path(&self, path: &str) -> Resolution {
        resolve_path(path, &self.session)
    }

    fn guard(&self, policy: AccessPolicy, resource: &'static str) -> ConsoleResult<()> {
        if policy.check(&self.session) {
            return Ok(());
        }
        if self.session.is_authenticated() {
            Err(SessionError::AdminRequired { resource }.into())
        } else {
            Err(SessionError::NotAuthenticated.into())
        }
    }

    // === Screens ===

    pub fn invoices(&mut self) -> ConsoleResult<&mut Screen<Invoice>> {
        self.guard(AccessPolicy::Authenticated, "invoices")?;
        Ok(&mut self.invoices)
    }

    pub fn suppliers(&mut self) -> ConsoleResult<&mut Screen<Supplier>> {
        self.guard(AccessPolicy::Authenticated, "suppliers")?;
        Ok(&mut self.suppliers)
    }

    pub fn payments(&mut self) -> ConsoleResult<&mut Screen<Payment>> {
        self.guard(AccessPolicy::Authenticated, "payments")?;
        Ok(&mut self.payments)
    }

    /// The users screen; admin only
    pub fn users(&mut self) -> ConsoleResult<&mut Screen<UserAccount>> {
        self.guard(AccessPolicy::AdminOnly, "users")?;
        Ok(&mut self.users)
    }

    // === Dashboard ===

    pub fn dashboard(&self) -> ConsoleResult<DashboardSummary> {
        self.guard(AccessPolicy::Authenticated, "dashboard")?;
        DashboardSummary::compute(
            self.invoices.store(),
            self.suppliers.store(),
            self.config.budget,
        )
    }

    // === Global search ===

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_scope(&self) -> &SearchScope {
        &self.search_scope
    }

    /// Toggle one category of the search scope
    pub fn toggle_search_category(&mut self, category: SearchCategory) {
        self.search_scope.toggle(category);
    }

    /// Reset the search scope to `all`
    pub fn select_all_search_categories(&mut self) {
        self.search_scope.select_all();
    }

    /// Forward the current search intent to the backend collaborator.
    ///
    /// No query is executed here; the console only captures intent.
    pub async fn submit_search(&self) -> ConsoleResult<()> {
        self.guard(AccessPolicy::Authenticated, "search")?;
        let query = SearchQuery {
            term: self.search_term.clone(),
            scope: self.search_scope.clone(),
        };
        self.backend.dispatch(&query).await
    }
}
