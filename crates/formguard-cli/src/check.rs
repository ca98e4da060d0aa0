//! # Check Subcommand
//!
//! Finalizes every field of a schema document and lists the rules each
//! field will run, so configuration errors surface before any form is
//! served.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::{json, Value};

use formguard_schema::{FormDocument, FormSchema};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema document (`.yaml`, `.yml`, or `.json`).
    #[arg(long)]
    pub schema: PathBuf,
}

/// Run the check subcommand, returning a per-field rule summary.
///
/// # Errors
///
/// Fails on the first field whose schema does not finalize.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<Value> {
    let document = FormDocument::load(&args.schema)?;
    summarize(&document.to_form_schema()?)
}

/// Finalize every field and describe its rules.
///
/// # Errors
///
/// Fails on the first field whose schema does not finalize.
pub fn summarize(form: &FormSchema) -> anyhow::Result<Value> {
    let mut fields = serde_json::Map::new();
    for (name, schema) in form.iter() {
        let descriptor = schema
            .finalize()
            .with_context(|| format!("field '{name}'"))?;
        let rules: Vec<&str> = match descriptor.matching_property() {
            Some(_) => vec!["matches"],
            None => descriptor.rules().iter().map(|r| r.name().as_str()).collect(),
        };
        tracing::debug!(field = name, rules = rules.len(), "field finalized");
        fields.insert(
            name.to_string(),
            json!({
                "label": descriptor.label(),
                "required": descriptor.required().is_some(),
                "matches": descriptor.matching_property(),
                "rules": rules,
            }),
        );
    }
    Ok(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_schema::Schema;

    #[test]
    fn test_summary_lists_rules_in_order() {
        let form = FormSchema::new()
            .field(
                "password",
                Schema::new()
                    .has_symbol(None)
                    .min(6, None)
                    .unwrap()
                    .is_required(None),
            )
            .field("confirm", Schema::new().matches("password", None).unwrap());
        let summary = summarize(&form).unwrap();
        assert_eq!(summary["password"]["rules"], json!(["minLength", "symbol"]));
        assert_eq!(summary["password"]["required"], json!(true));
        assert_eq!(summary["confirm"]["rules"], json!(["matches"]));
        assert_eq!(summary["confirm"]["matches"], json!("password"));
    }

    #[test]
    fn test_invalid_field_named_in_error() {
        let form = FormSchema::new().field(
            "pin",
            Schema::new().min(4, None).unwrap().max(2, None).unwrap(),
        );
        let err = summarize(&form).unwrap_err();
        assert_eq!(err.to_string(), "field 'pin'");
        assert!(format!("{err:#}").contains("min greater than max"));
    }
}
