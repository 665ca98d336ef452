//! Domain entities managed by the console screens

pub mod invoice;
pub mod macros;
pub mod payment;
pub mod supplier;
pub mod user;

pub use invoice::{Attachment, Invoice, InvoiceStatus};
pub use payment::{Payment, PaymentMethod};
pub use supplier::Supplier;
pub use user::UserAccount;
