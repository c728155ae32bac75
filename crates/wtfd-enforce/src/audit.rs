use std::collections::BTreeSet;

use wtfd_core::types::{Declaration, Violation};

use crate::policy::is_checkable;

/// Violations for one file: every checkable declaration without a
/// docstring, in declaration order.
pub fn audit(
    file: &str,
    declarations: &[Declaration],
    excluded_names: &BTreeSet<String>,
) -> Vec<Violation> {
    declarations
        .iter()
        .filter(|d| is_checkable(d, excluded_names))
        .filter(|d| !d.has_docstring())
        .map(|d| Violation::new(d, file))
        .collect()
}
