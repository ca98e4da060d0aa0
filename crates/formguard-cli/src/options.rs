//! # Option Flags
//!
//! Command-line switches shared by the `validate` and `value` subcommands.
//! They are OR'ed with the schema document's `options` block, so a flag can
//! turn an option on but never off.

use clap::Args;

use formguard_schema::ValidateOptions;

/// Evaluation switches accepted by every validating subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OptionFlags {
    /// Stop at each field's first failing rule.
    #[arg(long)]
    pub abort_early: bool,

    /// Prefix messages with field labels.
    #[arg(long)]
    pub include_label: bool,

    /// Report which named rules failed.
    #[arg(long)]
    pub include_rules: bool,
}

impl OptionFlags {
    /// Merge the switches over the document's defaults.
    pub fn merge(&self, defaults: ValidateOptions) -> ValidateOptions {
        defaults
            .abort_early(defaults.abort_early || self.abort_early)
            .include_label(defaults.include_label || self.include_label)
            .include_rules(defaults.include_rules || self.include_rules)
    }
}
