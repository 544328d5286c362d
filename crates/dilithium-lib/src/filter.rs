//! Removes patterns that would extract two neighbouring deposits.

use crate::pattern::SelectionPattern;

/// Returns true when `pattern` selects two neighbouring deposits.
pub fn has_neighbor(pattern: &SelectionPattern) -> bool {
	pattern.has_adjacent_selection()
}

/// Returns the patterns from `patterns` that don't select neighbours, preserving order.
///
/// The input is left untouched, a new vector is built.
pub fn remove_neighbors(patterns: &[SelectionPattern]) -> Vec<SelectionPattern> {
	let valid: Vec<_> = patterns.iter()
		.filter(|p| !has_neighbor(p))
		.cloned()
		.collect();
	log::debug!("Removed {} of {} patterns with neighbouring selections", patterns.len() - valid.len(), patterns.len());
	valid
}
