//! # Schema Builder
//!
//! A fluent, owned builder describing one field's rules. Every method
//! consumes the builder and hands it back, so a schema is configured by a
//! single chain owned by the caller:
//!
//! ```
//! use formguard_schema::Schema;
//!
//! let password = Schema::new()
//!     .label("Password")?
//!     .min(8, None)?
//!     .max(64, None)?
//!     .has_digit(None)
//!     .has_uppercase(Some("needs a capital letter"))
//!     .is_required(None);
//! # Ok::<(), formguard_core::ConfigError>(())
//! ```
//!
//! Methods whose arguments can be wrong (`min`, `max`, `label`, `matches`,
//! `has_pattern`) return `Result` and fail at the call, before any value is
//! validated. Cross-option invariants (bounds versus required character
//! classes) are checked by [`Schema::finalize`].
//!
//! ## Exclusive rules
//!
//! `matches`, `has_pattern`, and `is_email` each replace the length and
//! character-class rules when the schema is finalized. If more than one is
//! configured, `matches` wins over `has_pattern`, which wins over
//! `is_email`.

use regex::Regex;

use formguard_core::rule::compile_pattern;
use formguard_core::{Bound, ConfigError};

/// A pattern given either as source text or as a compiled expression.
#[derive(Debug, Clone)]
pub enum PatternSource {
    /// Pattern source, compiled when handed to the builder.
    Text(String),
    /// An already compiled expression.
    Compiled(Regex),
}

impl From<&str> for PatternSource {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PatternSource {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Regex> for PatternSource {
    fn from(re: Regex) -> Self {
        Self::Compiled(re)
    }
}

/// A configured rule toggle with its optional custom message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Toggle {
    pub(crate) message: Option<String>,
}

impl Toggle {
    fn new(custom: Option<&str>) -> Self {
        Self {
            message: custom.map(str::to_owned),
        }
    }
}

/// A configured length bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LengthBound {
    pub(crate) value: usize,
    pub(crate) message: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct PatternRule {
    pub(crate) re: Regex,
    pub(crate) message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchingConfig {
    pub(crate) property: String,
    pub(crate) message: Option<String>,
}

/// Builder state for one field's rules.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) label: Option<String>,
    pub(crate) minimum: Option<LengthBound>,
    pub(crate) maximum: Option<LengthBound>,
    pub(crate) digit: Option<Toggle>,
    pub(crate) symbol: Option<Toggle>,
    pub(crate) uppercase: Option<Toggle>,
    pub(crate) lowercase: Option<Toggle>,
    pub(crate) email: Option<Toggle>,
    pub(crate) pattern: Option<PatternRule>,
    pub(crate) required: Option<Toggle>,
    pub(crate) matching: Option<MatchingConfig>,
}

impl Schema {
    /// An empty schema: optional, no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeLength`] if `length` is negative.
    pub fn min(mut self, length: i64, custom_error: Option<&str>) -> Result<Self, ConfigError> {
        self.minimum = Some(length_bound(Bound::Minimum, length, custom_error)?);
        Ok(self)
    }

    /// Allow at most `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeLength`] if `length` is negative.
    pub fn max(mut self, length: i64, custom_error: Option<&str>) -> Result<Self, ConfigError> {
        self.maximum = Some(length_bound(Bound::Maximum, length, custom_error)?);
        Ok(self)
    }

    /// Require at least one decimal digit.
    pub fn has_digit(mut self, custom_error: Option<&str>) -> Self {
        self.digit = Some(Toggle::new(custom_error));
        self
    }

    /// Require at least one symbol.
    pub fn has_symbol(mut self, custom_error: Option<&str>) -> Self {
        self.symbol = Some(Toggle::new(custom_error));
        self
    }

    /// Require at least one uppercase letter.
    pub fn has_uppercase(mut self, custom_error: Option<&str>) -> Self {
        self.uppercase = Some(Toggle::new(custom_error));
        self
    }

    /// Require at least one lowercase letter.
    pub fn has_lowercase(mut self, custom_error: Option<&str>) -> Self {
        self.lowercase = Some(Toggle::new(custom_error));
        self
    }

    /// Require the value to match a custom pattern. Exclusive: replaces the
    /// length and character-class rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if a pattern given as text
    /// does not compile.
    pub fn has_pattern(
        mut self,
        pattern: impl Into<PatternSource>,
        custom_error: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let re = match pattern.into() {
            PatternSource::Text(source) => compile_pattern(&source)?,
            PatternSource::Compiled(re) => re,
        };
        self.pattern = Some(PatternRule {
            re,
            message: custom_error.map(str::to_owned),
        });
        Ok(self)
    }

    /// Require an email-shaped value. Exclusive: replaces the length and
    /// character-class rules.
    pub fn is_email(mut self, custom_error: Option<&str>) -> Self {
        self.email = Some(Toggle::new(custom_error));
        self
    }

    /// Mark the field mandatory. An empty value fails with the required
    /// message alone; no other rule runs.
    pub fn is_required(mut self, custom_error: Option<&str>) -> Self {
        self.required = Some(Toggle::new(custom_error));
        self
    }

    /// Require the value to equal the current value of `field_name` in the
    /// same form. Exclusive: replaces every other value rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] if `field_name` is empty.
    pub fn matches(mut self, field_name: &str, custom_error: Option<&str>) -> Result<Self, ConfigError> {
        self.matching = Some(MatchingConfig {
            property: non_empty("matches", field_name)?,
            message: custom_error.map(str::to_owned),
        });
        Ok(self)
    }

    /// Set the display name prefixed to messages when labels are requested.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] if `name` is empty.
    pub fn label(mut self, name: &str) -> Result<Self, ConfigError> {
        self.label = Some(non_empty("label", name)?);
        Ok(self)
    }

    /// The configured label, if any.
    pub fn label_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the field is mandatory.
    pub fn required(&self) -> bool {
        self.required.is_some()
    }

    /// The field this schema must match, if any.
    pub fn matching_property(&self) -> Option<&str> {
        self.matching.as_ref().map(|m| m.property.as_str())
    }

    /// Number of active character-class rules.
    pub fn required_chars(&self) -> usize {
        [&self.digit, &self.symbol, &self.uppercase, &self.lowercase]
            .iter()
            .filter(|t| t.is_some())
            .count()
    }
}

fn length_bound(bound: Bound, length: i64, custom: Option<&str>) -> Result<LengthBound, ConfigError> {
    let value =
        usize::try_from(length).map_err(|_| ConfigError::NegativeLength { bound, value: length })?;
    Ok(LengthBound {
        value,
        message: custom.map(str::to_owned),
    })
}

fn non_empty(option: &'static str, name: &str) -> Result<String, ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName { option });
    }
    Ok(name.to_string())
}
