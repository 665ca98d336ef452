//! Typed error handling for the finconsole crate
//!
//! Every fallible operation returns a [`ConsoleError`] so that callers can
//! handle failures specifically rather than dealing with opaque strings.
//!
//! # Error Categories
//!
//! - [`StoreError`]: collection store operations (CRUD)
//! - [`FormError`]: form binding and validation
//! - [`SessionError`]: session gating and navigation guards
//! - [`ConfigError`]: configuration parsing and loading
//!
//! Validation failures never mutate a store; the worst outcome of any
//! operation in this crate is a rejected submission that leaves the form
//! open for correction.

use crate::core::record::RecordId;
use serde::Serialize;
use std::fmt;

/// The main error type for the finconsole crate
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug)]
pub enum ConsoleError {
    /// Collection store errors (CRUD operations)
    Store(StoreError),

    /// Form binding and validation errors
    Form(FormError),

    /// Session gating errors
    Session(SessionError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Store(e) => write!(f, "{}", e),
            ConsoleError::Form(e) => write!(f, "{}", e),
            ConsoleError::Session(e) => write!(f, "{}", e),
            ConsoleError::Config(e) => write!(f, "{}", e),
            ConsoleError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Store(e) => Some(e),
            ConsoleError::Form(e) => Some(e),
            ConsoleError::Session(e) => Some(e),
            ConsoleError::Config(e) => Some(e),
            ConsoleError::Internal(_) => None,
        }
    }
}

impl ConsoleError {
    /// Get the machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Store(e) => e.error_code(),
            ConsoleError::Form(e) => e.error_code(),
            ConsoleError::Session(e) => e.error_code(),
            ConsoleError::Config(e) => e.error_code(),
            ConsoleError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors related to collection store operations
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given identifier exists.
    ///
    /// Raised on update and on edit-mode lookups. Deleting an absent record
    /// is tolerated silently and never produces this error.
    NotFound {
        entity_type: &'static str,
        id: RecordId,
    },

    /// The store lock was poisoned by a panicking writer
    LockPoisoned {
        entity_type: &'static str,
        operation: &'static str,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
            StoreError::LockPoisoned {
                entity_type,
                operation,
            } => {
                write!(
                    f,
                    "Failed to acquire {} store lock during {}",
                    entity_type, operation
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "RECORD_NOT_FOUND",
            StoreError::LockPoisoned { .. } => "STORE_LOCK_POISONED",
        }
    }
}

impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        ConsoleError::Store(err)
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// A single field validation error, surfaced inline on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors related to form binding and validation
#[derive(Debug)]
pub enum FormError {
    /// One or more fields failed validation
    FieldErrors(Vec<FieldError>),

    /// A field passed validation but could not be converted to its record type
    InvalidValue { field: String, message: String },

    /// The submission was not a JSON object
    InvalidSubmission { message: String },

    /// Submit was called while no create or edit form was open
    NoActiveForm { entity_type: &'static str },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            FormError::InvalidValue { field, message } => {
                write!(f, "Invalid value for field '{}': {}", field, message)
            }
            FormError::InvalidSubmission { message } => {
                write!(f, "Invalid submission: {}", message)
            }
            FormError::NoActiveForm { entity_type } => {
                write!(f, "No {} form is open", entity_type)
            }
        }
    }
}

impl std::error::Error for FormError {}

impl FormError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::FieldErrors(_) => "FORM_VALIDATION_FAILED",
            FormError::InvalidValue { .. } => "FORM_INVALID_VALUE",
            FormError::InvalidSubmission { .. } => "FORM_INVALID_SUBMISSION",
            FormError::NoActiveForm { .. } => "FORM_NOT_OPEN",
        }
    }
}

impl From<FormError> for ConsoleError {
    fn from(err: FormError) -> Self {
        ConsoleError::Form(err)
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors related to session gating
///
/// These mirror the navigation guard: they gate access to screens, they do
/// not constitute authentication or authorization in any security sense.
#[derive(Debug)]
pub enum SessionError {
    /// No user is logged in
    NotAuthenticated,

    /// The current user lacks the admin role
    AdminRequired { resource: &'static str },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotAuthenticated => {
                write!(f, "No user is logged in")
            }
            SessionError::AdminRequired { resource } => {
                write!(f, "Access to {} requires the admin role", resource)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::NotAuthenticated => "NOT_AUTHENTICATED",
            SessionError::AdminRequired { .. } => "ADMIN_REQUIRED",
        }
    }
}

impl From<SessionError> for ConsoleError {
    fn from(err: SessionError) -> Self {
        ConsoleError::Session(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration content
    ParseError { message: String },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { message } => {
                write!(f, "Failed to parse config: {}", message)
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(err: ConfigError) -> Self {
        ConsoleError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for ConsoleError {
    fn from(err: serde_yaml::Error) -> Self {
        ConsoleError::Config(ConfigError::ParseError {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for finconsole operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// =============================================================================
// Tests
// =============================================================================
