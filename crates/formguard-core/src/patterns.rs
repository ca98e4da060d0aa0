//! # Built-in Patterns
//!
//! The fixed character-class and email expressions used by the rule
//! library. They are not configurable; callers needing a different class
//! supply their own pattern rule.
//!
//! Character-class patterns are unanchored: a value passes when it contains
//! at least one character of the class anywhere. The email pattern is
//! anchored and deliberately simplified to a `local@domain.tld` shape. It
//! is not RFC 5322 complete.

use std::sync::LazyLock;

use regex::Regex;

/// Any ASCII decimal digit.
pub const DIGIT_PATTERN: &str = r"[0-9]";

/// Any ASCII punctuation or symbol character (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub const SYMBOL_PATTERN: &str = r"[[:punct:]]";

/// Any ASCII uppercase letter.
pub const UPPERCASE_PATTERN: &str = r"[A-Z]";

/// Any ASCII lowercase letter.
pub const LOWERCASE_PATTERN: &str = r"[a-z]";

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub(crate) static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIGIT_PATTERN).expect("valid regex"));

pub(crate) static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SYMBOL_PATTERN).expect("valid regex"));

pub(crate) static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UPPERCASE_PATTERN).expect("valid regex"));

pub(crate) static LOWERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOWERCASE_PATTERN).expect("valid regex"));

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
