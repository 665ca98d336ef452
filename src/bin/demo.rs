//! Walks the console's main flows against the seeded demo data.
//!
//! Run with `RUST_LOG=debug` to see store mutations and search dispatches.

use anyhow::Result;
use finconsole::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut console = Console::builder().build()?;

    // Any credentials are accepted; the role is declared, not verified.
    console.login("admin", Role::Admin);

    let summary = console.dashboard()?;
    println!("Total facturas:        {:>10.2}", summary.invoice_total);
    println!("Proveedores:           {:>10}", summary.supplier_count);
    println!("Pagos pendientes:      {:>10.2}", summary.pending_total);
    println!("Presupuesto restante:  {:>10.2}", summary.budget_remaining);
    println!();

    let invoices = console.invoices()?;
    invoices.open_create();
    let created = invoices.submit(&json!({
        "supplier": "Acme",
        "amount": "1250.50",
        "date": "2024-04-01",
        "status": "Pendiente",
    }))?;
    println!("Factura creada: #{} {}", created.id, created.supplier);

    invoices.set_query("pendiente");
    println!("Facturas pendientes:");
    for invoice in invoices.rows()? {
        println!(
            "  #{} {} — {} ({})",
            invoice.id, invoice.supplier, invoice.amount, invoice.date
        );
    }

    console.set_search_term("TechCorp");
    console.toggle_search_category(SearchCategory::Invoices);
    console.toggle_search_category(SearchCategory::Payments);
    console.submit_search().await?;

    match console.navigate(Destination::Users) {
        Resolution::Allow(destination) => println!("Acceso permitido a {}", destination.path()),
        Resolution::Redirect(destination) => println!("Redirigido a {}", destination.path()),
    }

    console.logout();
    Ok(())
}
