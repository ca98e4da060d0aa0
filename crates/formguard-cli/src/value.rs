//! # Value Subcommand
//!
//! Validates one string against one field of a schema document, without a
//! surrounding form.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use formguard_schema::{validate, FormDocument, ValidateOptions, ValidationResult};

use crate::options::OptionFlags;

/// Arguments for the value subcommand.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Schema document (`.yaml`, `.yml`, or `.json`).
    #[arg(long)]
    pub schema: PathBuf,

    /// Field whose rules apply.
    #[arg(long)]
    pub field: String,

    /// The value to check.
    pub value: String,

    #[command(flatten)]
    pub flags: OptionFlags,
}

/// Run the value subcommand.
///
/// # Errors
///
/// Fails if the document cannot be loaded, the field is not declared, or
/// its schema is invalid.
pub fn run_value(args: &ValueArgs) -> anyhow::Result<ValidationResult> {
    let document = FormDocument::load(&args.schema)?;
    let options = args.flags.merge(document.options);
    check_value(&document, &args.field, &args.value, options)
}

/// Validate `value` against `field` of a loaded document.
///
/// # Errors
///
/// Fails if the field is not declared or its schema is invalid.
pub fn check_value(
    document: &FormDocument,
    field: &str,
    value: &str,
    options: ValidateOptions,
) -> anyhow::Result<ValidationResult> {
    let field_doc = document
        .fields
        .get(field)
        .with_context(|| format!("field '{field}' is not declared in the schema"))?;
    let schema = field_doc.to_schema()?;
    let result = validate(&Value::String(value.to_string()), &schema, &options)?;
    Ok(result)
}
