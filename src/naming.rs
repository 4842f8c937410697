//! Naming policy for published variables.

use crate::config::PrefixPolicy;

/// The prefix applied to GAV field names unless a custom policy is active.
pub const DEFAULT_VARIABLE_PREFIX: &str = "maven.";

/// Computes the full variable name for a GAV field.
///
/// A custom prefix is used verbatim; an empty custom prefix collapses to
/// the bare field name. Custom extraction mode bypasses this entirely and
/// uses the caller-supplied variable name.
pub fn variable_name(field: &str, prefix: &PrefixPolicy) -> String {
    match prefix {
        PrefixPolicy::Default => format!("{}{}", DEFAULT_VARIABLE_PREFIX, field),
        PrefixPolicy::Custom(prefix) => format!("{}{}", prefix, field),
    }
}
