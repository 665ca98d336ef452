//! # finconsole
//!
//! In-memory entity, session and navigation core for a finance
//! administration console.
//!
//! ## Features
//!
//! - **Generic CRUD screens**: one parametric store/filter/form abstraction
//!   instantiated for invoices, suppliers, payments and users
//! - **Insertion-ordered stores**: identifiers from a monotonic counter,
//!   never reused after deletion
//! - **Declarative form validation**: per-entity schemas with inline field
//!   errors, required/numeric/date/format rules
//! - **Session gating**: trivial login flow driving navigation access
//!   policies (admin-only users screen, login redirects)
//! - **Computed dashboard**: totals derived from the live collections
//! - **Global search stub**: query intent captured and forwarded to an
//!   external backend collaborator
//!
//! All state is process-local: populated with seed data at startup, mutated
//! in memory, discarded at process end.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finconsole::prelude::*;
//!
//! let mut console = Console::builder().build()?;
//! console.login("admin", Role::Admin);
//!
//! let invoices = console.invoices()?;
//! invoices.open_create();
//! invoices.submit(&json!({
//!     "supplier": "Acme",
//!     "amount": "100",
//!     "date": "2024-04-01",
//!     "status": "Pendiente",
//! }))?;
//!
//! invoices.set_query("acme");
//! for invoice in invoices.rows()? {
//!     println!("{} — {}", invoice.supplier, invoice.amount);
//! }
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod entities;
pub mod search;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConsoleError, ConsoleResult, FieldError},
        filter::filter_records,
        form::{FormModel, bind},
        record::{Record, RecordId},
        session::{AccessPolicy, CurrentUser, Role, SessionGate},
        store::CollectionStore,
        validation::FormSchema,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{
        Attachment, Invoice, InvoiceStatus, Payment, PaymentMethod, Supplier, UserAccount,
    };

    // === Console ===
    pub use crate::console::{
        Console, ConsoleBuilder, DashboardSummary, Destination, FormState, Resolution, Screen,
    };

    // === Search ===
    pub use crate::search::{
        SearchBackend, SearchCategory, SearchQuery, SearchScope, TracingSearchBackend,
    };

    // === Config ===
    pub use crate::config::ConsoleConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
