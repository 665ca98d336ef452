//! Field format checks backed by cached regular expressions

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Format checks for text form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
    IsoDate,
}

impl FieldFormat {
    /// Check a raw field value against this format
    pub fn check(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Phone => Self::is_valid_phone(value),
            FieldFormat::IsoDate => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        // Digits with optional leading +, allowing spaces, dots, dashes and
        // parentheses as separators; 7 to 19 characters after the first digit.
        let regex =
            PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 ().\-]{6,18}$").unwrap());
        regex.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.check("john@techcorp.com"));
        assert!(format.check("user.name+tag@example.co.uk"));
        assert!(!format.check("invalid-email"));
        assert!(!format.check("@example.com"));
    }

    #[test]
    fn test_phone_validation_accepts_separators() {
        let format = FieldFormat::Phone;

        assert!(format.check("+1 234-567-8901"));
        assert!(format.check("33612345678"));
        assert!(format.check("+1 (456) 789-0123"));
        assert!(!format.check("123"));
        assert!(!format.check("no phone"));
    }

    #[test]
    fn test_iso_date_validation() {
        let format = FieldFormat::IsoDate;

        assert!(format.check("2024-03-15"));
        assert!(!format.check("15/03/2024"));
        assert!(!format.check("2024-13-01"));
        assert!(!format.check("not-a-date"));
    }
}
