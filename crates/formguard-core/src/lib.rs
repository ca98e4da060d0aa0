//! # formguard-core — Rule Library and Error Taxonomy
//!
//! The leaf of the formguard crate graph. Defines the predicates that field
//! descriptors run, the fixed built-in patterns they use, the default
//! message catalog, and the configuration error type shared by every other
//! crate.
//!
//! ## Key Design Principles
//!
//! 1. **Two-case outcomes.** A rule returns [`RuleOutcome::Pass`] or
//!    [`RuleOutcome::Fail`] carrying its message. There is no truthiness
//!    convention to misread.
//!
//! 2. **Failures are data, misconfiguration is an error.** Rule failures are
//!    returned to the caller as values. [`ConfigError`] is reserved for
//!    broken schemas and mismatched inputs.
//!
//! 3. **Literal matching.** Cross-field equality compares the two values
//!    as plain strings. User input is never interpreted as a pattern, and
//!    binding to it cannot fail.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod messages;
pub mod patterns;
pub mod rule;

// Re-export primary types for ergonomic imports.
pub use error::{Bound, ConfigError};
pub use rule::{MatchingRule, Rule, RuleName, RuleOutcome};
