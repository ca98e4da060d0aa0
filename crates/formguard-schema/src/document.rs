//! # Schema Documents
//!
//! Declarative form schemas loaded from YAML or JSON, for callers that keep
//! their field rules in configuration rather than code:
//!
//! ```yaml
//! options:
//!   includeLabel: true
//! fields:
//!   username:
//!     label: Username
//!     required: true
//!     min: 4
//!     max: 12
//!     lowercase: true
//!     messages:
//!       minLength: "is too short"
//!   email:
//!     email: "must look like name@example.com"
//!   confirmPassword:
//!     matches: password
//! ```
//!
//! `min`, `max`, `label`, and `matches` are read untyped so that a value of
//! the wrong type is reported as [`ConfigError::InvalidType`] naming the
//! option, rather than as a parser error. Every field document is turned
//! into a [`Schema`] through the same builder methods code would call.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use formguard_core::{ConfigError, RuleName};

use crate::builder::Schema;
use crate::engine::ValidateOptions;
use crate::form::FormSchema;

/// Error loading a schema or value document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    Load {
        /// Path to the document.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The document parsed but describes an invalid schema.
    #[error("invalid schema: {0}")]
    Config(#[from] ConfigError),
}

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (anything else).
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Parse `content` in this format.
    ///
    /// # Errors
    ///
    /// Returns the parser's message on malformed input.
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}")),
            Self::Json => serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}")),
        }
    }
}

/// Read and parse a document, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`DocumentError::Load`] if the file cannot be read or parsed.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let load_error = |reason: String| DocumentError::Load {
        path: path.display().to_string(),
        reason,
    };
    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;
    DocumentFormat::from_path(path).parse(&content).map_err(load_error)
}

/// A rule switch: `true` enables it with the default message, a string
/// enables it with that message, `false` leaves it off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    /// Enabled or disabled.
    Flag(bool),
    /// Enabled with a custom message.
    Message(String),
}

impl Toggle {
    fn enabled(&self) -> bool {
        !matches!(self, Self::Flag(false))
    }

    fn message(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Message(msg) => Some(msg.as_str()),
        }
    }
}

/// One field's declarative rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldDocument {
    /// Display label.
    #[serde(default)]
    pub label: Option<Value>,
    /// Required switch.
    #[serde(default)]
    pub required: Option<Toggle>,
    /// Minimum length.
    #[serde(default)]
    pub min: Option<Value>,
    /// Maximum length.
    #[serde(default)]
    pub max: Option<Value>,
    /// Digit switch.
    #[serde(default)]
    pub digit: Option<Toggle>,
    /// Symbol switch.
    #[serde(default)]
    pub symbol: Option<Toggle>,
    /// Uppercase switch.
    #[serde(default)]
    pub uppercase: Option<Toggle>,
    /// Lowercase switch.
    #[serde(default)]
    pub lowercase: Option<Toggle>,
    /// Email switch.
    #[serde(default)]
    pub email: Option<Toggle>,
    /// Custom pattern source.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Name of the field this one must match.
    #[serde(default)]
    pub matches: Option<Value>,
    /// Per-rule custom messages. A message given on a switch wins.
    #[serde(default)]
    pub messages: BTreeMap<RuleName, String>,
}

impl FieldDocument {
    /// Build the field's [`Schema`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidType`] for a mistyped `min`, `max`, `label`, or
    /// `matches`, and any error the builder raises for the value itself.
    pub fn to_schema(&self) -> Result<Schema, ConfigError> {
        let mut schema = Schema::new();

        if let Some(label) = &self.label {
            schema = schema.label(expect_str("label", label)?)?;
        }
        if let Some(min) = &self.min {
            schema = schema.min(expect_int("min", min)?, self.message_for(RuleName::MinLength, None))?;
        }
        if let Some(max) = &self.max {
            schema = schema.max(expect_int("max", max)?, self.message_for(RuleName::MaxLength, None))?;
        }

        let switches: [(&Option<Toggle>, RuleName, fn(Schema, Option<&str>) -> Schema); 6] = [
            (&self.digit, RuleName::Digit, Schema::has_digit),
            (&self.symbol, RuleName::Symbol, Schema::has_symbol),
            (&self.uppercase, RuleName::Uppercase, Schema::has_uppercase),
            (&self.lowercase, RuleName::Lowercase, Schema::has_lowercase),
            (&self.email, RuleName::Email, Schema::is_email),
            (&self.required, RuleName::Required, Schema::is_required),
        ];
        for (toggle, name, enable) in switches {
            if let Some(toggle) = toggle.as_ref().filter(|t| t.enabled()) {
                schema = enable(schema, self.message_for(name, toggle.message()));
            }
        }

        if let Some(pattern) = &self.pattern {
            schema = schema.has_pattern(pattern.as_str(), self.message_for(RuleName::Pattern, None))?;
        }
        if let Some(matches) = &self.matches {
            schema = schema.matches(
                expect_str("matches", matches)?,
                self.message_for(RuleName::Matches, None),
            )?;
        }
        Ok(schema)
    }

    fn message_for<'a>(&'a self, rule: RuleName, inline: Option<&'a str>) -> Option<&'a str> {
        inline.or_else(|| self.messages.get(&rule).map(String::as_str))
    }
}

/// A whole form: default options plus field documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDocument {
    /// Options applied when the caller supplies none.
    #[serde(default)]
    pub options: ValidateOptions,
    /// Field name to field rules.
    pub fields: BTreeMap<String, FieldDocument>,
}

impl FormDocument {
    /// Load a form document from a `.yaml`/`.yml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Load`] on I/O or parse failure.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        read_document(path)
    }

    /// Parse a form document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Load`] on malformed YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        DocumentFormat::Yaml
            .parse(content)
            .map_err(|reason| DocumentError::Load {
                path: "<inline>".to_string(),
                reason,
            })
    }

    /// Build the [`FormSchema`].
    ///
    /// # Errors
    ///
    /// The first field error, as [`FieldDocument::to_schema`].
    pub fn to_form_schema(&self) -> Result<FormSchema, ConfigError> {
        self.fields
            .iter()
            .map(|(name, field)| field.to_schema().map(|schema| (name.clone(), schema)))
            .collect()
    }
}

fn expect_str<'a>(option: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidType {
        option: option.to_string(),
        expected: "a string",
        actual: value.to_string(),
    })
}

fn expect_int(option: &str, value: &Value) -> Result<i64, ConfigError> {
    value.as_i64().ok_or_else(|| ConfigError::InvalidType {
        option: option.to_string(),
        expected: "an integer",
        actual: value.to_string(),
    })
}
