//! # Error Types — Configuration Errors
//!
//! Defines the error raised when a schema, a form schema, or the shape of
//! the input handed to the engine is wrong. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Configuration errors are raised at build or finalize time and are never
//!   recovered silently.
//! - A rule rejecting a user value is NOT an error. It is reported as data
//!   in the validation result (see [`crate::rule::RuleOutcome`]).
//! - Every variant carries the offending field, bound, or value so the
//!   developer can locate the broken declaration without a debugger.

use thiserror::Error;

/// Which length bound an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The `min` bound.
    Minimum,
    /// The `max` bound.
    Maximum,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimum => f.write_str("min"),
            Self::Maximum => f.write_str("max"),
        }
    }
}

/// A schema or form configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An argument had the wrong type (e.g. a non-numeric length).
    #[error("{option} must be {expected}, got {actual}")]
    InvalidType {
        /// Name of the builder option.
        option: String,
        /// Expected type description.
        expected: &'static str,
        /// Rendering of the value that was supplied.
        actual: String,
    },

    /// A length bound was negative.
    #[error("{bound} length must not be negative, got {value}")]
    NegativeLength {
        /// The bound being configured.
        bound: Bound,
        /// The rejected value.
        value: i64,
    },

    /// A label or matching field name was empty.
    #[error("{option} must not be empty")]
    EmptyName {
        /// Name of the builder option.
        option: &'static str,
    },

    /// The configured minimum exceeds the configured maximum.
    #[error("min greater than max: min {min} > max {max}")]
    MinGreaterThanMax {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A length bound cannot fit the required character classes.
    #[error("{bound} too small for required characters: {bound} {value} < {required} required character classes")]
    BoundTooSmall {
        /// The bound that is too small.
        bound: Bound,
        /// Its configured value.
        value: usize,
        /// Number of active character-class rules.
        required: usize,
    },

    /// A custom pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A form value names a field the form schema does not declare.
    #[error("form field '{field}' has no entry in the form schema")]
    UnknownField {
        /// The undeclared field.
        field: String,
    },

    /// The field a matching rule refers to has no value in the form.
    #[error("field '{field}' must match '{property}', but '{property}' has no value in the form")]
    MissingMatchValue {
        /// The field declaring the matching rule.
        field: String,
        /// The referenced field.
        property: String,
    },

    /// A matching rule was evaluated on its own, outside any form, so there
    /// is no value to compare against.
    #[error("matching rule on '{property}' needs a form to supply the value it compares against")]
    UnboundMatching {
        /// The referenced field.
        property: String,
    },

    /// The field a matching rule refers to holds a non-string value.
    #[error("field '{field}' must match '{property}', but '{property}' is not a string")]
    NonStringMatchValue {
        /// The field declaring the matching rule.
        field: String,
        /// The referenced field.
        property: String,
    },

    /// A form value is not a string.
    #[error("value of field '{field}' must be a string")]
    NonStringValue {
        /// The offending field.
        field: String,
    },

    /// The value handed to `validate` is neither a string nor a form mapping,
    /// or does not fit the kind of schema it was paired with.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
