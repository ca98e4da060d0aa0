//! # Finalizer and Descriptor
//!
//! [`Schema::finalize`] checks a builder's invariants and produces an
//! immutable [`Descriptor`]: the label, the required message, and the
//! ordered rules the engine runs.
//!
//! ## Rule selection
//!
//! ```text
//! matches set?  ──yes──▶ [matches]         (bound at form-validation time)
//!      │no
//! pattern set?  ──yes──▶ [pattern]
//!      │no
//! email set?    ──yes──▶ [email]
//!      │no
//!      ▼
//! [minLength, maxLength, digit, symbol, uppercase, lowercase]  (configured ones only)
//! ```
//!
//! ## Invariants
//!
//! - `min <= max` whenever both are configured. This is checked before rule
//!   selection, so contradictory bounds fail even when an exclusive rule
//!   would discard them.
//! - On the length/character path, the number of configured character
//!   classes may not exceed either configured bound. When neither bound is
//!   configured the check runs against [`DEFAULT_MINIMUM`] and
//!   [`DEFAULT_MAXIMUM`]. The defaults never become rules.
//!
//! Finalizing does not touch the builder. It can be called any number of
//! times and always yields an equivalent descriptor.

use tracing::{debug, warn};

use formguard_core::rule::{self, MatchingRule, Rule};
use formguard_core::{messages, Bound, ConfigError};

use crate::builder::{LengthBound, Schema, Toggle};

/// Minimum length assumed for the invariant check when no bound is configured.
pub const DEFAULT_MINIMUM: usize = 4;

/// Maximum length assumed for the invariant check when no bound is configured.
pub const DEFAULT_MAXIMUM: usize = 9;

/// The finalized, immutable rule set of one field.
#[derive(Debug, Clone)]
pub struct Descriptor {
    label: Option<String>,
    required: Option<String>,
    matching: Option<MatchingRule>,
    rules: Vec<Rule>,
}

impl Descriptor {
    /// The field's display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The required message, if the field is mandatory.
    pub fn required(&self) -> Option<&str> {
        self.required.as_deref()
    }

    /// The field whose value this field must equal, while still unbound.
    pub fn matching_property(&self) -> Option<&str> {
        self.matching.as_ref().map(MatchingRule::property)
    }

    /// The unbound matching rule, if any.
    pub fn matching_rule(&self) -> Option<&MatchingRule> {
        self.matching.as_ref()
    }

    /// The rules to run, in evaluation order. Empty for an unbound
    /// matching descriptor.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Bind the matching rule to the referenced field's current value.
    ///
    /// Returns a descriptor whose single rule is the bound equality check.
    /// A descriptor without a matching rule is returned unchanged.
    pub fn bind_matching(&self, other_value: &str) -> Descriptor {
        let Some(matching) = &self.matching else {
            return self.clone();
        };
        Descriptor {
            label: self.label.clone(),
            required: self.required.clone(),
            matching: None,
            rules: vec![matching.bind(other_value)],
        }
    }
}

impl Schema {
    /// Check the schema's invariants and produce its [`Descriptor`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MinGreaterThanMax`] if both bounds are set and
    ///   `min > max`.
    /// - [`ConfigError::BoundTooSmall`] if a bound cannot hold one character
    ///   of every configured character class.
    pub fn finalize(&self) -> Result<Descriptor, ConfigError> {
        if let (Some(min), Some(max)) = (&self.minimum, &self.maximum) {
            if min.value > max.value {
                return Err(ConfigError::MinGreaterThanMax {
                    min: min.value,
                    max: max.value,
                });
            }
        }

        self.warn_on_overrides();

        let mut descriptor = Descriptor {
            label: self.label.clone(),
            required: self
                .required
                .as_ref()
                .map(|t| message_or_default(t, messages::REQUIRED)),
            matching: None,
            rules: Vec::new(),
        };

        if let Some(m) = &self.matching {
            debug!(property = %m.property, "finalized matching schema");
            descriptor.matching = Some(rule::matches(&m.property, m.message.as_deref()));
            return Ok(descriptor);
        }

        if let Some(p) = &self.pattern {
            debug!(pattern = %p.re.as_str(), "finalized pattern schema");
            descriptor.rules = vec![rule::pattern(p.re.clone(), p.message.as_deref())];
            return Ok(descriptor);
        }

        if let Some(e) = &self.email {
            debug!("finalized email schema");
            descriptor.rules = vec![rule::email(e.message.as_deref())];
            return Ok(descriptor);
        }

        self.check_required_chars()?;
        descriptor.rules = self.generic_rules();
        debug!(rules = descriptor.rules.len(), "finalized length/character schema");
        Ok(descriptor)
    }

    fn check_required_chars(&self) -> Result<(), ConfigError> {
        let required = self.required_chars();
        let (min, max) = match (&self.minimum, &self.maximum) {
            (None, None) => (Some(DEFAULT_MINIMUM), Some(DEFAULT_MAXIMUM)),
            (min, max) => (min.as_ref().map(|b| b.value), max.as_ref().map(|b| b.value)),
        };

        for (bound, value) in [(Bound::Minimum, min), (Bound::Maximum, max)] {
            if let Some(value) = value {
                if required > value {
                    return Err(ConfigError::BoundTooSmall {
                        bound,
                        value,
                        required,
                    });
                }
            }
        }
        Ok(())
    }

    fn generic_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        if let Some(LengthBound { value, message }) = &self.minimum {
            rules.push(rule::min_length(*value, message.as_deref()));
        }
        if let Some(LengthBound { value, message }) = &self.maximum {
            rules.push(rule::max_length(*value, message.as_deref()));
        }
        let classes: [(&Option<Toggle>, fn(Option<&str>) -> Rule); 4] = [
            (&self.digit, rule::digit),
            (&self.symbol, rule::symbol),
            (&self.uppercase, rule::uppercase),
            (&self.lowercase, rule::lowercase),
        ];
        for (toggle, factory) in classes {
            if let Some(t) = toggle {
                rules.push(factory(t.message.as_deref()));
            }
        }
        rules
    }

    fn warn_on_overrides(&self) {
        let exclusive = [
            ("matches", self.matching.is_some()),
            ("pattern", self.pattern.is_some()),
            ("email", self.email.is_some()),
        ];
        let active: Vec<&str> = exclusive
            .iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| *name)
            .collect();
        let Some(winner) = active.first() else {
            return;
        };
        if active.len() > 1 {
            warn!(
                used = *winner,
                configured = ?active,
                "multiple exclusive rules configured; only the first applies"
            );
        }
        let generic = usize::from(self.minimum.is_some())
            + usize::from(self.maximum.is_some())
            + self.required_chars();
        if generic > 0 {
            warn!(
                used = *winner,
                ignored = generic,
                "exclusive rule overrides configured length/character rules"
            );
        }
    }
}

fn message_or_default(toggle: &Toggle, default: &str) -> String {
    toggle.message.clone().unwrap_or_else(|| default.to_string())
}
