//! Option sets: declared groups of mutually-exclusive or required CLI options.
//!
//! Each command declares zero or more sets; the resolver checks how many of
//! the named options were actually supplied and produces a single usage
//! message on the first violation. Evaluation is pure; sets are checked in
//! declaration order.

use std::collections::BTreeSet;

/// A group of option names of which exactly one must be supplied.
///
/// With `required` unset the group only enforces mutual exclusivity:
/// supplying none of the options is fine, supplying two or more is not.
#[derive(Debug, Clone, Copy)]
pub struct OptionSet {
    pub options: &'static [&'static str],
    pub required: bool,
}

impl OptionSet {
    /// Exactly one of the named options must be present.
    pub fn required(options: &'static [&'static str]) -> Self {
        Self {
            options,
            required: true,
        }
    }

    /// At most one of the named options may be present.
    pub fn exclusive(options: &'static [&'static str]) -> Self {
        Self {
            options,
            required: false,
        }
    }
}

/// Check every declared set against the options the user supplied.
///
/// The first failing set aborts with its message; later sets are not
/// evaluated. Returns `Err` with a user-facing usage message.
pub fn resolve_option_sets(
    sets: &[OptionSet],
    provided: &BTreeSet<&'static str>,
) -> Result<(), String> {
    for set in sets {
        let count = set
            .options
            .iter()
            .filter(|name| provided.contains(*name))
            .count();

        if count == 0 && set.required {
            return Err(format!("Specify one of: {}", set.options.join(", ")));
        }
        if count > 1 {
            return Err(format!("Specify only one of: {}", set.options.join(", ")));
        }
    }

    Ok(())
}
