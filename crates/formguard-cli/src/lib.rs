//! # formguard-cli — Command-Line Interface
//!
//! Runs the validation engine over schema and value documents and prints
//! results as JSON, for CI checks and for exercising schemas by hand.
//!
//! ## Subcommands
//!
//! - `check` — finalize every field of a schema document and list its rules
//! - `validate` — validate a form value document, or re-check one field
//! - `value` — validate a single string against one field
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `formguard-schema`; no rule logic here.
//! - Results go to stdout as JSON; logs go to stderr.

pub mod check;
pub mod options;
pub mod validate;
pub mod value;
