//! # Validate Subcommand
//!
//! Validates a value document (a JSON/YAML mapping of field name to string)
//! against a schema document and renders the result as JSON.
//!
//! With `--field`, only that field and its matching counterparts are
//! evaluated, the way a form re-checks a field on edit.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde_json::{Map, Value};

use formguard_schema::document::read_document;
use formguard_schema::{FormDocument, FormValidator, ValidateOptions, ValidationResult};

use crate::options::OptionFlags;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema document (`.yaml`, `.yml`, or `.json`).
    #[arg(long)]
    pub schema: PathBuf,

    /// Value document: a mapping of field name to string value.
    #[arg(long)]
    pub values: PathBuf,

    /// Re-check one field and its counterparts instead of the whole form.
    #[arg(long)]
    pub field: Option<String>,

    #[command(flatten)]
    pub flags: OptionFlags,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the validate subcommand, returning the result.
///
/// # Errors
///
/// Fails if either document cannot be loaded or the schema is invalid for
/// the supplied values.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidationResult> {
    let document = FormDocument::load(&args.schema)?;
    let values = load_values(&args.values)?;
    let options = args.flags.merge(document.options);
    validate_values(&document, &values, args.field.as_deref(), options)
}

/// Validate `values` against a loaded schema document.
///
/// # Errors
///
/// Fails if the schema is invalid or does not fit `values`.
pub fn validate_values(
    document: &FormDocument,
    values: &Map<String, Value>,
    field: Option<&str>,
    options: ValidateOptions,
) -> anyhow::Result<ValidationResult> {
    let form = document.to_form_schema()?;
    let validator = FormValidator::new(&form, options)?;
    let report = match field {
        Some(field) => validator
            .validate_field(field, values)
            .with_context(|| format!("re-checking field '{field}'"))?,
        None => validator.validate(values)?,
    };
    tracing::info!(
        fields = report.errors.len(),
        valid = report.is_valid,
        "validation complete"
    );
    Ok(ValidationResult::Form(report))
}

fn load_values(path: &Path) -> anyhow::Result<Map<String, Value>> {
    match read_document::<Value>(path)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!(
            "value document {} must be a mapping of field name to string, got {other}",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &str = r#"
fields:
  password:
    label: Password
    min: 5
    digit: true
  confirmPassword:
    label: Confirmation
    matches: password
"#;

    fn values(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_validate_values_reports_mismatch() {
        let doc = FormDocument::from_yaml_str(SCHEMA).unwrap();
        let result = validate_values(
            &doc,
            &values(json!({"password": "abc12", "confirmPassword": "abc"})),
            None,
            ValidateOptions::default().include_label(true),
        )
        .unwrap();
        assert!(!result.is_valid());
        let report = result.as_form().unwrap();
        assert_eq!(
            report.field_errors("confirmPassword"),
            &["Confirmation must match password".to_string()]
        );
    }

    #[test]
    fn test_validate_values_single_field() {
        let doc = FormDocument::from_yaml_str(SCHEMA).unwrap();
        let result = validate_values(
            &doc,
            &values(json!({"password": "abc12", "confirmPassword": "abc12"})),
            Some("password"),
            ValidateOptions::default(),
        )
        .unwrap();
        assert!(result.is_valid());
        assert_eq!(result.as_form().unwrap().errors.len(), 2);
    }

    #[test]
    fn test_unknown_field_is_error() {
        let doc = FormDocument::from_yaml_str(SCHEMA).unwrap();
        let err = validate_values(
            &doc,
            &values(json!({"nickname": "x"})),
            None,
            ValidateOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("nickname"));
    }
}
