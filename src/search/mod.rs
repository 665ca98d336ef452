//! Global search: query intent capture and dispatch
//!
//! The console never executes a cross-entity query itself. It captures the
//! query text plus a category toggle set and forwards the intent to an
//! external [`SearchBackend`] collaborator; the default backend only records
//! the intent through `tracing`.

use crate::core::error::ConsoleResult;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// A searchable entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Invoices,
    Suppliers,
    Payments,
}

impl SearchCategory {
    /// Every category, in display order
    pub const ALL: &'static [SearchCategory] = &[
        SearchCategory::Invoices,
        SearchCategory::Suppliers,
        SearchCategory::Payments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::Invoices => "facturas",
            SearchCategory::Suppliers => "proveedores",
            SearchCategory::Payments => "pagos",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facturas" => Ok(SearchCategory::Invoices),
            "proveedores" => Ok(SearchCategory::Suppliers),
            "pagos" => Ok(SearchCategory::Payments),
            other => Err(format!("categoría desconocida: {}", other)),
        }
    }
}

/// The set of categories a search targets.
///
/// Either `all`, or a non-empty subset of the specific categories; the two
/// are exclusive. Deselecting the last specific category collapses the scope
/// back to `all`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchScope {
    // Empty means "all".
    selected: Vec<SearchCategory>,
}

impl SearchScope {
    /// The `all` scope
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected specific categories; empty when the scope is `all`
    pub fn selected(&self) -> &[SearchCategory] {
        &self.selected
    }

    pub fn contains(&self, category: SearchCategory) -> bool {
        self.selected.contains(&category)
    }

    /// Reset the scope to `all`
    pub fn select_all(&mut self) {
        self.selected.clear();
    }

    /// Toggle one specific category.
    ///
    /// Selecting a category leaves the `all` state; deselecting the last one
    /// returns to it.
    pub fn toggle(&mut self, category: SearchCategory) {
        if let Some(position) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(position);
        } else {
            self.selected.push(category);
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        let labels: Vec<&str> = self.selected.iter().map(|c| c.as_str()).collect();
        f.write_str(&labels.join(","))
    }
}

/// A captured search intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub scope: SearchScope,
}

/// External collaborator that receives search intents.
///
/// The actual search execution lives behind this boundary and is not part of
/// the console.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Forward one search intent to the backend
    async fn dispatch(&self, query: &SearchQuery) -> ConsoleResult<()>;
}

/// Default backend: records the intent through `tracing` and does nothing
/// else
pub struct TracingSearchBackend;

#[async_trait]
impl SearchBackend for TracingSearchBackend {
    async fn dispatch(&self, query: &SearchQuery) -> ConsoleResult<()> {
        tracing::info!(term = %query.term, scope = %query.scope, "global search dispatched");
        Ok(())
    }
}
