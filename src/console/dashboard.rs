//! Dashboard summary computed from the live collections

use crate::core::error::ConsoleResult;
use crate::core::store::CollectionStore;
use crate::entities::invoice::{Invoice, InvoiceStatus};
use crate::entities::supplier::Supplier;
use serde::Serialize;

/// The four dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Total amount across all invoices
    pub invoice_total: f64,

    /// Number of suppliers on record
    pub supplier_count: usize,

    /// Total amount of invoices still pending payment
    pub pending_total: f64,

    /// Configured budget minus the invoice total
    pub budget_remaining: f64,
}

impl DashboardSummary {
    /// Compute the summary from the current collections
    pub fn compute(
        invoices: &CollectionStore<Invoice>,
        suppliers: &CollectionStore<Supplier>,
        budget: f64,
    ) -> ConsoleResult<Self> {
        let all = invoices.list()?;
        let invoice_total: f64 = all.iter().map(|invoice| invoice.amount).sum();
        let pending_total: f64 = all
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Pending)
            .map(|invoice| invoice.amount)
            .sum();

        Ok(Self {
            invoice_total,
            supplier_count: suppliers.len()?,
            pending_total,
            budget_remaining: budget - invoice_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{invoice, supplier};

    #[test]
    fn test_summary_over_seed_data() {
        let invoices = CollectionStore::seeded(invoice::seed()).unwrap();
        let suppliers = CollectionStore::seeded(supplier::seed()).unwrap();

        let summary = DashboardSummary::compute(&invoices, &suppliers, 100_000.0).unwrap();
        assert_eq!(summary.invoice_total, 15_500.0);
        assert_eq!(summary.supplier_count, 3);
        assert_eq!(summary.pending_total, 8_000.0);
        assert_eq!(summary.budget_remaining, 84_500.0);
    }

    #[test]
    fn test_summary_over_empty_collections() {
        let invoices: CollectionStore<Invoice> = CollectionStore::new();
        let suppliers: CollectionStore<Supplier> = CollectionStore::new();

        let summary = DashboardSummary::compute(&invoices, &suppliers, 1_000.0).unwrap();
        assert_eq!(summary.invoice_total, 0.0);
        assert_eq!(summary.supplier_count, 0);
        assert_eq!(summary.pending_total, 0.0);
        assert_eq!(summary.budget_remaining, 1_000.0);
    }

    #[test]
    fn test_summary_follows_status_changes() {
        let invoices = CollectionStore::seeded(invoice::seed()).unwrap();
        let suppliers = CollectionStore::seeded(supplier::seed()).unwrap();

        let mut first = invoices.get(1).unwrap().unwrap();
        first.status = InvoiceStatus::Paid;
        invoices.update(1, first).unwrap();

        let summary = DashboardSummary::compute(&invoices, &suppliers, 100_000.0).unwrap();
        assert_eq!(summary.pending_total, 3_000.0);
    }
}
