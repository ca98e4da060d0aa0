//! # Rule Library
//!
//! Stateless factories for the named predicates a field descriptor runs.
//! Each [`Rule`] captures its error message at construction time and tests
//! a single string, yielding [`RuleOutcome::Pass`] or
//! [`RuleOutcome::Fail`] with that message.
//!
//! ## Rule semantics
//!
//! - Length rules bound the whole value, inclusive, counted in Unicode
//!   scalar values.
//! - Character-class rules (`digit`, `symbol`, `uppercase`, `lowercase`)
//!   pass when the value *contains* at least one character of the class.
//! - `email` tests the fixed, anchored email shape.
//! - `pattern` tests the caller's expression as given; anchoring is up to
//!   the caller.
//! - `matches` is two-stage. [`matches`] returns an unbound
//!   [`MatchingRule`] that only knows the name of the other field; the
//!   engine binds it to that field's current value at form-validation time.
//!   The bound rule compares strings directly, so the comparison is literal
//!   equality (as if the value were passed through `regex::escape` and
//!   anchored) and never pattern semantics. Binding cannot fail, whatever
//!   the length of the other value.
//!
//! ## Outcome
//!
//! The outcome is an explicit two-case enum. A failure with an empty custom
//! message is still a failure.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::messages;
use crate::patterns::{DIGIT_RE, EMAIL_RE, LOWERCASE_RE, SYMBOL_RE, UPPERCASE_RE};

// ─── Rule Names ──────────────────────────────────────────────────────

/// Name of a rule kind, as reported in `failedRules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleName {
    /// Empty value in a required field.
    Required,
    /// Minimum length bound.
    MinLength,
    /// Maximum length bound.
    MaxLength,
    /// At least one decimal digit.
    Digit,
    /// At least one symbol.
    Symbol,
    /// At least one uppercase letter.
    Uppercase,
    /// At least one lowercase letter.
    Lowercase,
    /// Email shape.
    Email,
    /// Custom pattern.
    Pattern,
    /// Equality with another field.
    Matches,
}

impl RuleName {
    /// The camelCase wire name of this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Email => "email",
            Self::Pattern => "pattern",
            Self::Matches => "matches",
        }
    }

    /// Whether this rule counts towards `requiredChars`.
    pub fn is_character_class(&self) -> bool {
        matches!(
            self,
            Self::Digit | Self::Symbol | Self::Uppercase | Self::Lowercase
        )
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────

/// Result of testing one value against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule; carries the rule's message.
    Fail(String),
}

impl RuleOutcome {
    /// Whether the value satisfied the rule.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The failure message, if the rule failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(msg) => Some(msg.as_str()),
        }
    }
}

// ─── Rule ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Check {
    MinLength(usize),
    MaxLength(usize),
    Contains(&'static Regex),
    Email,
    Pattern(Regex),
    Equals(String),
}

/// A named predicate over a single string value.
#[derive(Debug, Clone)]
pub struct Rule {
    name: RuleName,
    check: Check,
    message: String,
}

impl Rule {
    fn new(name: RuleName, check: Check, message: String) -> Self {
        Self { name, check, message }
    }

    /// The rule's name.
    pub fn name(&self) -> RuleName {
        self.name
    }

    /// The message reported when the rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Test `value` against the rule.
    pub fn check(&self, value: &str) -> RuleOutcome {
        let ok = match &self.check {
            Check::MinLength(n) => value.chars().count() >= *n,
            Check::MaxLength(n) => value.chars().count() <= *n,
            Check::Contains(re) => re.is_match(value),
            Check::Email => EMAIL_RE.is_match(value),
            Check::Pattern(re) => re.is_match(value),
            Check::Equals(other) => value == other,
        };
        if ok {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail(self.message.clone())
        }
    }
}

fn message_or(custom: Option<&str>, default: impl FnOnce() -> String) -> String {
    custom.map_or_else(default, str::to_owned)
}

/// Value must be at least `n` characters long.
pub fn min_length(n: usize, custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::MinLength,
        Check::MinLength(n),
        message_or(custom, || messages::min_length(n)),
    )
}

/// Value must be at most `n` characters long.
pub fn max_length(n: usize, custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::MaxLength,
        Check::MaxLength(n),
        message_or(custom, || messages::max_length(n)),
    )
}

/// Value must contain a decimal digit.
pub fn digit(custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Digit,
        Check::Contains(&DIGIT_RE),
        message_or(custom, || messages::DIGIT.to_owned()),
    )
}

/// Value must contain a symbol.
pub fn symbol(custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Symbol,
        Check::Contains(&SYMBOL_RE),
        message_or(custom, || messages::SYMBOL.to_owned()),
    )
}

/// Value must contain an uppercase letter.
pub fn uppercase(custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Uppercase,
        Check::Contains(&UPPERCASE_RE),
        message_or(custom, || messages::UPPERCASE.to_owned()),
    )
}

/// Value must contain a lowercase letter.
pub fn lowercase(custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Lowercase,
        Check::Contains(&LOWERCASE_RE),
        message_or(custom, || messages::LOWERCASE.to_owned()),
    )
}

/// Value must be email-shaped.
pub fn email(custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Email,
        Check::Email,
        message_or(custom, || messages::EMAIL.to_owned()),
    )
}

/// Value must match `re`.
pub fn pattern(re: Regex, custom: Option<&str>) -> Rule {
    Rule::new(
        RuleName::Pattern,
        Check::Pattern(re),
        message_or(custom, || messages::PATTERN.to_owned()),
    )
}

/// Compile a pattern string for use with [`pattern`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPattern`] if `source` is not a valid
/// regular expression.
pub fn compile_pattern(source: &str) -> Result<Regex, ConfigError> {
    Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
        pattern: source.to_string(),
        reason: e.to_string(),
    })
}

/// First stage of the matching rule: value must equal `property`'s value.
pub fn matches(property: &str, custom: Option<&str>) -> MatchingRule {
    MatchingRule {
        property: property.to_string(),
        message: message_or(custom, || messages::matches(property)),
    }
}

// ─── Matching Rule ───────────────────────────────────────────────────

/// A matching rule not yet bound to the other field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingRule {
    property: String,
    message: String,
}

impl MatchingRule {
    /// Name of the field whose value must be matched.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The message reported when the bound rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Bind to the other field's current value, producing a rule that
    /// passes only on exact string equality.
    pub fn bind(&self, other_value: &str) -> Rule {
        Rule::new(
            RuleName::Matches,
            Check::Equals(other_value.to_string()),
            self.message.clone(),
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
