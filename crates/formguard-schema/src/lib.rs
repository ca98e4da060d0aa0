//! # formguard-schema — Schema Builder and Validation Engine
//!
//! Describes per-field constraints with a fluent [`Schema`] builder, checks
//! them once with [`Schema::finalize`], and evaluates single values or whole
//! forms with [`validate`].
//!
//! ## Data flow
//!
//! ```text
//! Schema (builder) ──finalize──▶ Descriptor ──┐
//!                                             ├──▶ validate ──▶ ValidationResult
//! FormSchema ──FormValidator::new─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`builder`] — the fluent builder for one field.
//! - [`descriptor`] — invariant checks and the immutable rule set.
//! - [`form`] — the field-name to schema mapping and its back-reference index.
//! - [`engine`] — options, result types, single-value and form evaluation.
//! - [`document`] — YAML/JSON schema documents.
//!
//! ## Crate Policy
//!
//! - Depends only on `formguard-core` internally.
//! - Configuration errors are returned before any value is evaluated; rule
//!   failures are always returned as data.
//! - Evaluation is synchronous and holds no state between calls.

pub mod builder;
pub mod descriptor;
pub mod document;
pub mod engine;
pub mod form;

pub use builder::{PatternSource, Schema};
pub use descriptor::{Descriptor, DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
pub use document::{DocumentError, FieldDocument, FormDocument};
pub use engine::{
    validate, validate_form, validate_value, FailedRules, FieldReport, FormReport, FormValidator,
    SchemaTarget, ValidateOptions, ValidationResult,
};
pub use form::FormSchema;
