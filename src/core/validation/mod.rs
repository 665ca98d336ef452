//! Validation and filtering system
//!
//! A declarative approach to normalizing and validating form submissions
//! before they become candidate records. Each entity describes its rules once
//! in a [`FormSchema`]; the binding layer in [`crate::core::form`] runs them.

pub mod filters;
pub mod schema;
pub mod validators;

pub use schema::FormSchema;
