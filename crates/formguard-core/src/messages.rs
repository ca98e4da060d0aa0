//! # Default Message Catalog
//!
//! One default message per rule kind. Messages are phrased to read after a
//! field label ("Username must contain at least one digit"), since the
//! engine can prefix them with the label on request.

/// Message for an empty value in a required field.
pub const REQUIRED: &str = "is required";

/// Message when the value lacks a digit.
pub const DIGIT: &str = "must contain at least one digit";

/// Message when the value lacks a symbol.
pub const SYMBOL: &str = "must contain at least one symbol";

/// Message when the value lacks an uppercase letter.
pub const UPPERCASE: &str = "must contain at least one uppercase letter";

/// Message when the value lacks a lowercase letter.
pub const LOWERCASE: &str = "must contain at least one lowercase letter";

/// Message when the value is not email-shaped.
pub const EMAIL: &str = "must be a valid email address";

/// Message when the value does not match a custom pattern.
pub const PATTERN: &str = "does not match the required pattern";

/// Templated message for a minimum length bound.
pub fn min_length(n: usize) -> String {
    format!("must be at least {n} characters long")
}

/// Templated message for a maximum length bound.
pub fn max_length(n: usize) -> String {
    format!("must be at most {n} characters long")
}

/// Templated message for a matching-property rule.
pub fn matches(property: &str) -> String {
    format!("must match {property}")
}
