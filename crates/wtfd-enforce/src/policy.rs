use std::collections::BTreeSet;

use wtfd_core::types::Declaration;

/// `__name__` style names reserved for the Python data model.
pub fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

/// Whether `declaration` is subject to the docstring audit.
///
/// `excluded_names` holds lowercased names; the comparison is
/// case-insensitive. Nesting depth and leading single underscores do not
/// matter.
pub fn is_checkable(declaration: &Declaration, excluded_names: &BTreeSet<String>) -> bool {
    !is_dunder(&declaration.name) && !excluded_names.contains(&declaration.name.to_lowercase())
}
