//! # Validation Engine
//!
//! Evaluates a single value against a field schema, or a whole form mapping
//! against a [`FormSchema`], and reports the result as data.
//!
//! ## Field evaluation
//!
//! - Optional field, empty value: valid, no rule runs.
//! - Required field, empty value: invalid with the required message only.
//! - Otherwise each rule runs in descriptor order. A failure appends the
//!   rule's message (label-prefixed when requested) and, when requested,
//!   records the rule name. With `abort_early` evaluation stops at the
//!   first failure.
//!
//! ## Form evaluation
//!
//! Every key in the value mapping must be declared by the form schema.
//! Matching rules are bound to the referenced field's value as read from
//! the mapping. The form is valid when every evaluated field is valid.
//! Every evaluated field appears in `errors`, with an empty list when it
//! passed.
//!
//! ## Error boundary
//!
//! Rule failures are returned inside [`ValidationResult`]. A
//! [`ConfigError`] means the schema or the shape of the input is wrong and
//! no result is produced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use formguard_core::{ConfigError, RuleName, RuleOutcome};

use crate::builder::Schema;
use crate::descriptor::Descriptor;
use crate::form::FormSchema;

// ─── Options ─────────────────────────────────────────────────────────

/// Evaluation options. Every option defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValidateOptions {
    /// Stop evaluating a field's rules after its first failure.
    pub abort_early: bool,
    /// Prefix messages with the field's label, when one is configured.
    pub include_label: bool,
    /// Report which named rules failed.
    pub include_rules: bool,
}

impl ValidateOptions {
    /// Options with `abort_early` set.
    pub fn abort_early(mut self, on: bool) -> Self {
        self.abort_early = on;
        self
    }

    /// Options with `include_label` set.
    pub fn include_label(mut self, on: bool) -> Self {
        self.include_label = on;
        self
    }

    /// Options with `include_rules` set.
    pub fn include_rules(mut self, on: bool) -> Self {
        self.include_rules = on;
        self
    }
}

// ─── Results ─────────────────────────────────────────────────────────

/// Failed rule names. Only failures are recorded, each mapped to `true`.
pub type FailedRules = BTreeMap<RuleName, bool>;

/// Result of evaluating one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    /// Whether every rule passed.
    pub is_valid: bool,
    /// Failure messages in rule order.
    pub errors: Vec<String>,
    /// Failed rule names, present when `include_rules` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_rules: Option<FailedRules>,
}

/// Result of evaluating a form mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    /// Whether every evaluated field is valid.
    pub is_valid: bool,
    /// Failure messages per evaluated field; empty for passing fields.
    pub errors: BTreeMap<String, Vec<String>>,
    /// Failed rule names per evaluated field, present when `include_rules`
    /// is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_rules: Option<BTreeMap<String, FailedRules>>,
}

impl FormReport {
    fn new(include_rules: bool) -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
            failed_rules: include_rules.then(BTreeMap::new),
        }
    }

    fn record(&mut self, field: &str, report: FieldReport) {
        self.is_valid &= report.is_valid;
        if let (Some(all), Some(failed)) = (self.failed_rules.as_mut(), report.failed_rules) {
            all.insert(field.to_string(), failed);
        }
        self.errors.insert(field.to_string(), report.errors);
    }

    /// Error messages for one field. Empty when the field passed or was
    /// not evaluated.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The result of [`validate`]: a field report for a single value, a form
/// report for a form mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidationResult {
    /// Single-value result.
    Field(FieldReport),
    /// Whole-form result.
    Form(FormReport),
}

impl ValidationResult {
    /// Whether the input passed.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Field(r) => r.is_valid,
            Self::Form(r) => r.is_valid,
        }
    }

    /// The single-value report, if this is one.
    pub fn as_field(&self) -> Option<&FieldReport> {
        match self {
            Self::Field(r) => Some(r),
            Self::Form(_) => None,
        }
    }

    /// The form report, if this is one.
    pub fn as_form(&self) -> Option<&FormReport> {
        match self {
            Self::Form(r) => Some(r),
            Self::Field(_) => None,
        }
    }
}

// ─── Entry Points ────────────────────────────────────────────────────

/// What a value is validated against.
#[derive(Debug, Clone, Copy)]
pub enum SchemaTarget<'a> {
    /// A field schema, finalized on use.
    Field(&'a Schema),
    /// An already finalized field descriptor.
    Descriptor(&'a Descriptor),
    /// A whole-form schema.
    Form(&'a FormSchema),
}

impl<'a> From<&'a Schema> for SchemaTarget<'a> {
    fn from(s: &'a Schema) -> Self {
        Self::Field(s)
    }
}

impl<'a> From<&'a Descriptor> for SchemaTarget<'a> {
    fn from(d: &'a Descriptor) -> Self {
        Self::Descriptor(d)
    }
}

impl<'a> From<&'a FormSchema> for SchemaTarget<'a> {
    fn from(f: &'a FormSchema) -> Self {
        Self::Form(f)
    }
}

/// Validate a string against a field schema, or a form mapping against a
/// form schema.
///
/// # Errors
///
/// - [`ConfigError::InvalidInput`] if `value` is neither a string nor an
///   object, or if its kind does not fit `target`.
/// - Any error from [`validate_value`], [`Descriptor::evaluate`], or
///   [`validate_form`].
pub fn validate<'a>(
    value: &Value,
    target: impl Into<SchemaTarget<'a>>,
    options: &ValidateOptions,
) -> Result<ValidationResult, ConfigError> {
    match (value, target.into()) {
        (Value::String(s), SchemaTarget::Field(schema)) => {
            validate_value(s, schema, options).map(ValidationResult::Field)
        }
        (Value::String(s), SchemaTarget::Descriptor(descriptor)) => {
            descriptor.evaluate(s, options).map(ValidationResult::Field)
        }
        (Value::Object(values), SchemaTarget::Form(form)) => {
            validate_form(values, form, options).map(ValidationResult::Form)
        }
        (Value::String(_), SchemaTarget::Form(_)) => Err(ConfigError::InvalidInput(
            "a single string value needs a field schema, got a form schema".to_string(),
        )),
        (Value::Object(_), _) => Err(ConfigError::InvalidInput(
            "a form mapping needs a form schema, got a field schema".to_string(),
        )),
        (other, _) => Err(ConfigError::InvalidInput(format!(
            "value must be string or form mapping, got {}",
            kind_of(other)
        ))),
    }
}

/// Finalize `schema` and evaluate `value` against it.
///
/// # Errors
///
/// Finalize errors, or [`ConfigError::UnboundMatching`] if the schema
/// declares a matching rule, which needs a form to resolve.
pub fn validate_value(
    value: &str,
    schema: &Schema,
    options: &ValidateOptions,
) -> Result<FieldReport, ConfigError> {
    schema.finalize()?.evaluate(value, options)
}

/// Evaluate every field of `values` against `form`.
///
/// # Errors
///
/// See [`FormValidator::new`] and [`FormValidator::validate`].
pub fn validate_form(
    values: &Map<String, Value>,
    form: &FormSchema,
    options: &ValidateOptions,
) -> Result<FormReport, ConfigError> {
    FormValidator::new(form, *options)?.validate(values)
}

impl Descriptor {
    /// Evaluate a single value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnboundMatching`] if the descriptor still
    /// carries an unbound matching rule. Bind it first with
    /// [`Descriptor::bind_matching`] or validate through a form.
    pub fn evaluate(&self, value: &str, options: &ValidateOptions) -> Result<FieldReport, ConfigError> {
        if let Some(property) = self.matching_property() {
            return Err(ConfigError::UnboundMatching {
                property: property.to_string(),
            });
        }
        Ok(evaluate_rules(self, value, options))
    }
}

fn evaluate_rules(descriptor: &Descriptor, value: &str, options: &ValidateOptions) -> FieldReport {
    let mut errors = Vec::new();
    let mut failed = options.include_rules.then(FailedRules::new);
    let label = descriptor.label().filter(|_| options.include_label);

    if value.is_empty() {
        if let Some(message) = descriptor.required() {
            errors.push(format_message(label, message));
            if let Some(failed) = failed.as_mut() {
                failed.insert(RuleName::Required, true);
            }
        }
        return FieldReport {
            is_valid: errors.is_empty(),
            errors,
            failed_rules: failed,
        };
    }

    for rule in descriptor.rules() {
        if let RuleOutcome::Fail(message) = rule.check(value) {
            errors.push(format_message(label, &message));
            if let Some(failed) = failed.as_mut() {
                failed.insert(rule.name(), true);
            }
            if options.abort_early {
                break;
            }
        }
    }

    FieldReport {
        is_valid: errors.is_empty(),
        errors,
        failed_rules: failed,
    }
}

fn format_message(label: Option<&str>, message: &str) -> String {
    match label {
        Some(label) => format!("{label} {message}"),
        None => message.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─── Form Validator ──────────────────────────────────────────────────

/// A form schema compiled for one round of validation.
///
/// Construction finalizes every declared field and builds the
/// back-reference index once, so a field's counterparts are found without
/// rescanning the schema.
#[derive(Debug)]
pub struct FormValidator<'a> {
    descriptors: BTreeMap<&'a str, Descriptor>,
    back_references: BTreeMap<&'a str, Vec<&'a str>>,
    options: ValidateOptions,
}

impl<'a> FormValidator<'a> {
    /// Finalize every field of `form`.
    ///
    /// # Errors
    ///
    /// - Any finalize error of any field.
    /// - [`ConfigError::UnknownField`] if a matching rule names a field the
    ///   form does not declare.
    pub fn new(form: &'a FormSchema, options: ValidateOptions) -> Result<Self, ConfigError> {
        let mut descriptors = BTreeMap::new();
        for (name, schema) in form.iter() {
            let descriptor = schema.finalize()?;
            if let Some(property) = descriptor.matching_property() {
                if !form.contains(property) {
                    return Err(ConfigError::UnknownField {
                        field: property.to_string(),
                    });
                }
            }
            descriptors.insert(name, descriptor);
        }
        Ok(Self {
            descriptors,
            back_references: form.back_references(),
            options,
        })
    }

    /// Evaluate every field present in `values`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownField`] if `values` has a key the form does
    ///   not declare.
    /// - [`ConfigError::NonStringValue`] if a field's value is not a string.
    /// - [`ConfigError::MissingMatchValue`] or
    ///   [`ConfigError::NonStringMatchValue`] if a matching rule's
    ///   referenced value is absent or not a string.
    pub fn validate(&self, values: &Map<String, Value>) -> Result<FormReport, ConfigError> {
        self.check_known(values)?;
        let mut report = FormReport::new(self.options.include_rules);
        for field in values.keys() {
            report.record(field, self.evaluate_field(field, values)?);
        }
        debug!(
            fields = values.len(),
            valid = report.is_valid,
            "validated form"
        );
        Ok(report)
    }

    /// Re-evaluate one edited field together with its counterparts.
    ///
    /// Counterparts are the field `field` must match and every field that
    /// must match `field`. A counterpart is evaluated only when its value is
    /// present in `values`. Editing `password` re-checks `confirmPassword`,
    /// and editing `confirmPassword` re-checks `password`.
    ///
    /// # Errors
    ///
    /// As [`FormValidator::validate`], plus [`ConfigError::UnknownField`] if
    /// `field` is not declared and [`ConfigError::InvalidInput`] if `values`
    /// has no value for it.
    pub fn validate_field(&self, field: &str, values: &Map<String, Value>) -> Result<FormReport, ConfigError> {
        self.check_known(values)?;
        if !self.descriptors.contains_key(field) {
            return Err(ConfigError::UnknownField {
                field: field.to_string(),
            });
        }

        let mut report = FormReport::new(self.options.include_rules);
        report.record(field, self.evaluate_field(field, values)?);
        for counterpart in self.counterparts(field) {
            if values.contains_key(counterpart) {
                report.record(counterpart, self.evaluate_field(counterpart, values)?);
            }
        }
        debug!(
            field,
            evaluated = report.errors.len(),
            valid = report.is_valid,
            "revalidated field"
        );
        Ok(report)
    }

    /// The fields linked to `field` by a matching rule in either direction.
    pub fn counterparts(&self, field: &str) -> Vec<&'a str> {
        let forward = self
            .descriptors
            .get(field)
            .and_then(Descriptor::matching_property)
            .and_then(|p| self.descriptors.get_key_value(p))
            .map(|(name, _)| *name);
        let backward = self
            .back_references
            .get(field)
            .into_iter()
            .flatten()
            .copied();

        let mut linked: Vec<&'a str> = Vec::new();
        for name in forward.into_iter().chain(backward) {
            if name != field && !linked.contains(&name) {
                linked.push(name);
            }
        }
        linked
    }

    fn check_known(&self, values: &Map<String, Value>) -> Result<(), ConfigError> {
        match values.keys().find(|k| !self.descriptors.contains_key(k.as_str())) {
            Some(unknown) => Err(ConfigError::UnknownField {
                field: unknown.clone(),
            }),
            None => Ok(()),
        }
    }

    fn evaluate_field(&self, field: &str, values: &Map<String, Value>) -> Result<FieldReport, ConfigError> {
        let descriptor = self
            .descriptors
            .get(field)
            .ok_or_else(|| ConfigError::UnknownField {
                field: field.to_string(),
            })?;
        let value = match values.get(field) {
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(ConfigError::NonStringValue {
                    field: field.to_string(),
                })
            }
            None => {
                return Err(ConfigError::InvalidInput(format!(
                    "no value for field '{field}'"
                )))
            }
        };

        let Some(property) = descriptor.matching_property() else {
            return Ok(evaluate_rules(descriptor, value, &self.options));
        };
        let other = match values.get(property) {
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(ConfigError::NonStringMatchValue {
                    field: field.to_string(),
                    property: property.to_string(),
                })
            }
            None => {
                return Err(ConfigError::MissingMatchValue {
                    field: field.to_string(),
                    property: property.to_string(),
                })
            }
        };
        let bound = descriptor.bind_matching(other);
        Ok(evaluate_rules(&bound, value, &self.options))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_core::messages;
    use serde_json::json;

    fn password_schema() -> Schema {
        Schema::new()
            .min(5, None)
            .unwrap()
            .max(10, None)
            .unwrap()
            .has_digit(None)
            .has_symbol(None)
    }

    fn signup_form() -> FormSchema {
        FormSchema::new()
            .field("password", password_schema().is_required(None))
            .field(
                "confirmPassword",
                Schema::new().matches("password", None).unwrap(),
            )
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    // ---- single value ----

    #[test]
    fn test_valid_value() {
        let report = validate_value("Abc123!", &password_schema(), &ValidateOptions::default()).unwrap();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.failed_rules, None);
    }

    #[test]
    fn test_short_value_reports_min_length() {
        let report = validate_value("abc", &password_schema(), &ValidateOptions::default()).unwrap();
        assert!(!report.is_valid);
        assert!(report.errors.contains(&messages::min_length(5)));
    }

    #[test]
    fn test_all_failures_in_rule_order() {
        let report = validate_value("abc", &password_schema(), &ValidateOptions::default()).unwrap();
        assert_eq!(
            report.errors,
            vec![
                messages::min_length(5),
                messages::DIGIT.to_string(),
                messages::SYMBOL.to_string(),
            ]
        );
    }

    #[test]
    fn test_abort_early_stops_after_first_failure() {
        let options = ValidateOptions::default().abort_early(true);
        let report = validate_value("abc", &password_schema(), &options).unwrap();
        assert_eq!(report.errors, vec![messages::min_length(5)]);
    }

    #[test]
    fn test_include_rules_reports_failed_names() {
        let options = ValidateOptions::default().include_rules(true);
        let report = validate_value("abcdef", &password_schema(), &options).unwrap();
        let failed = report.failed_rules.unwrap();
        assert_eq!(failed.len(), 2);
        assert_eq!(failed.get(&RuleName::Digit), Some(&true));
        assert_eq!(failed.get(&RuleName::Symbol), Some(&true));
        assert!(!failed.contains_key(&RuleName::MinLength));
    }

    #[test]
    fn test_include_label_prefixes_messages() {
        let schema = password_schema().label("Username").unwrap();
        let options = ValidateOptions::default().include_label(true);
        let report = validate_value("abc", &schema, &options).unwrap();
        assert!(!report.errors.is_empty());
        for error in &report.errors {
            assert!(error.starts_with("Username "), "{error}");
        }
    }

    #[test]
    fn test_label_ignored_without_option() {
        let schema = password_schema().label("Username").unwrap();
        let report = validate_value("abc", &schema, &ValidateOptions::default()).unwrap();
        assert!(report.errors.iter().all(|e| !e.starts_with("Username")));
    }

    #[test]
    fn test_include_label_without_label_keeps_messages_bare() {
        let options = ValidateOptions::default().include_label(true);
        let report = validate_value("abc", &password_schema(), &options).unwrap();
        assert_eq!(report.errors[0], messages::min_length(5));
    }

    #[test]
    fn test_required_empty_reports_only_required() {
        let options = ValidateOptions::default().include_rules(true);
        let schema = password_schema().is_required(None);
        let report = validate_value("", &schema, &options).unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![messages::REQUIRED.to_string()]);
        let failed = report.failed_rules.unwrap();
        assert_eq!(failed.keys().copied().collect::<Vec<_>>(), vec![RuleName::Required]);
    }

    #[test]
    fn test_optional_empty_is_valid() {
        let report = validate_value("", &password_schema(), &ValidateOptions::default()).unwrap();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_empty_custom_message_is_still_invalid() {
        let schema = Schema::new().has_digit(Some(""));
        let report = validate_value("abc", &schema, &ValidateOptions::default()).unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![String::new()]);
    }

    #[test]
    fn test_matching_schema_alone_is_config_error() {
        let schema = Schema::new().matches("password", None).unwrap();
        let err = validate_value("x", &schema, &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnboundMatching {
                property: "password".into()
            }
        );
    }

    #[test]
    fn test_finalize_error_surfaces() {
        let schema = Schema::new().min(3, None).unwrap().max(2, None).unwrap();
        let err = validate_value("abc", &schema, &ValidateOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MinGreaterThanMax { .. }));
    }

    // ---- dispatch ----

    #[test]
    fn test_validate_dispatches_on_string() {
        let schema = password_schema();
        let result = validate(&json!("Abc123!"), &schema, &ValidateOptions::default()).unwrap();
        assert!(result.is_valid());
        assert!(result.as_field().is_some());
    }

    #[test]
    fn test_validate_accepts_descriptor() {
        let descriptor = password_schema().finalize().unwrap();
        let result = validate(&json!("abc"), &descriptor, &ValidateOptions::default()).unwrap();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_dispatches_on_object() {
        let form = signup_form();
        let values = json!({"password": "Abc123!", "confirmPassword": "Abc123!"});
        let result = validate(&values, &form, &ValidateOptions::default()).unwrap();
        assert!(result.is_valid());
        assert!(result.as_form().is_some());
    }

    #[test]
    fn test_validate_rejects_other_values() {
        let schema = password_schema();
        for value in [json!(42), json!(null), json!(["a"]), json!(true)] {
            let err = validate(&value, &schema, &ValidateOptions::default()).unwrap_err();
            match err {
                ConfigError::InvalidInput(msg) => {
                    assert!(msg.starts_with("value must be string or form mapping"), "{msg}")
                }
                other => panic!("expected InvalidInput, got {other}"),
            }
        }
    }

    #[test]
    fn test_validate_rejects_mismatched_target() {
        let form = signup_form();
        let schema = password_schema();
        assert!(matches!(
            validate(&json!("x"), &form, &ValidateOptions::default()),
            Err(ConfigError::InvalidInput(_))
        ));
        assert!(matches!(
            validate(&json!({"a": "b"}), &schema, &ValidateOptions::default()),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    // ---- form ----

    #[test]
    fn test_form_matching_passes() {
        let values = object(json!({"password": "Abc123!", "confirmPassword": "Abc123!"}));
        let report = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap();
        assert!(report.is_valid);
        assert!(report.field_errors("password").is_empty());
        assert!(report.field_errors("confirmPassword").is_empty());
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_form_matching_failure_attributed_to_confirmation() {
        let values = object(json!({"password": "Abc123!", "confirmPassword": "X"}));
        let report = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap();
        assert!(!report.is_valid);
        assert!(report.field_errors("password").is_empty());
        assert_eq!(
            report.field_errors("confirmPassword"),
            &[messages::matches("password")]
        );
    }

    #[test]
    fn test_form_matching_very_long_values() {
        let form = FormSchema::new()
            .field("password", Schema::new())
            .field("confirm", Schema::new().matches("password", None).unwrap());
        let long = "a".repeat(1_000_000);

        let values = object(json!({"password": long, "confirm": long}));
        let report = validate_form(&values, &form, &ValidateOptions::default()).unwrap();
        assert!(report.is_valid);

        let values = object(json!({"password": long, "confirm": format!("{long}b")}));
        let report = validate_form(&values, &form, &ValidateOptions::default()).unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.field_errors("confirm"), &[messages::matches("password")]);
    }

    #[test]
    fn test_form_matching_is_literal() {
        let form = FormSchema::new()
            .field("a", Schema::new())
            .field("b", Schema::new().matches("a", None).unwrap());
        let values = object(json!({"a": "x.*", "b": "xyz"}));
        let report = validate_form(&values, &form, &ValidateOptions::default()).unwrap();
        assert!(!report.is_valid);
    }

    #[test]
    fn test_form_unknown_field_is_config_error() {
        let values = object(json!({"password": "Abc123!", "nickname": "x"}));
        let err = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownField {
                field: "nickname".into()
            }
        );
    }

    #[test]
    fn test_form_missing_match_value() {
        let values = object(json!({"confirmPassword": "Abc123!"}));
        let err = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingMatchValue {
                field: "confirmPassword".into(),
                property: "password".into()
            }
        );
    }

    #[test]
    fn test_form_non_string_match_value() {
        let values = object(json!({"password": 12345, "confirmPassword": "12345"}));
        let err = FormValidator::new(&signup_form(), ValidateOptions::default())
            .unwrap()
            .validate_field("confirmPassword", &values)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonStringMatchValue { .. }));
    }

    #[test]
    fn test_form_non_string_value() {
        let values = object(json!({"password": 12345}));
        let err = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonStringValue {
                field: "password".into()
            }
        );
    }

    #[test]
    fn test_form_matching_unknown_property_rejected() {
        let form = FormSchema::new().field("b", Schema::new().matches("ghost", None).unwrap());
        let err = FormValidator::new(&form, ValidateOptions::default()).unwrap_err();
        assert_eq!(err, ConfigError::UnknownField { field: "ghost".into() });
    }

    #[test]
    fn test_form_include_rules_per_field() {
        let values = object(json!({"password": "abc", "confirmPassword": "abc"}));
        let options = ValidateOptions::default().include_rules(true);
        let report = validate_form(&values, &signup_form(), &options).unwrap();
        let failed = report.failed_rules.unwrap();
        assert!(failed["password"].contains_key(&RuleName::MinLength));
        assert!(failed["confirmPassword"].is_empty());
    }

    #[test]
    fn test_counterparts_are_symmetric() {
        let form = signup_form();
        let validator = FormValidator::new(&form, ValidateOptions::default()).unwrap();
        assert_eq!(validator.counterparts("password"), vec!["confirmPassword"]);
        assert_eq!(validator.counterparts("confirmPassword"), vec!["password"]);
    }

    #[test]
    fn test_editing_password_rechecks_confirmation() {
        let form = signup_form();
        let validator = FormValidator::new(&form, ValidateOptions::default()).unwrap();
        let values = object(json!({"password": "Xyz789?", "confirmPassword": "Abc123!"}));
        let report = validator.validate_field("password", &values).unwrap();
        assert!(!report.is_valid);
        assert!(report.field_errors("password").is_empty());
        assert_eq!(report.field_errors("confirmPassword").len(), 1);
    }

    #[test]
    fn test_editing_password_without_confirmation_value() {
        let form = signup_form();
        let validator = FormValidator::new(&form, ValidateOptions::default()).unwrap();
        let values = object(json!({"password": "Xyz789?"}));
        let report = validator.validate_field("password", &values).unwrap();
        assert!(report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_validate_field_unknown_field() {
        let form = signup_form();
        let validator = FormValidator::new(&form, ValidateOptions::default()).unwrap();
        let values = object(json!({"password": "Xyz789?"}));
        assert!(matches!(
            validator.validate_field("email", &values),
            Err(ConfigError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_result_json_shape() {
        let values = object(json!({"password": "Abc123!", "confirmPassword": "X"}));
        let report = validate_form(&values, &signup_form(), &ValidateOptions::default()).unwrap();
        let rendered = serde_json::to_value(ValidationResult::Form(report)).unwrap();
        assert_eq!(
            rendered,
            json!({
                "isValid": false,
                "errors": {
                    "confirmPassword": ["must match password"],
                    "password": []
                }
            })
        );
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: ValidateOptions =
            serde_json::from_value(json!({"abortEarly": true, "includeRules": true})).unwrap();
        assert!(options.abort_early);
        assert!(!options.include_label);
        assert!(options.include_rules);
    }
}
