use serde::{Serialize, Deserialize};

use crate::pattern::MAX_PATTERN_BITS;

/// How the selector finds the most profitable selections.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
	/// Enumerate, filter and score all 2^N patterns.
	#[default] Exhaustive,
	/// Linear best-suffix recurrence, backtracked over every tied branch.
	/// Gives the same selections in the same order as `Exhaustive`.
	DynamicProgramming,
}

/// Options for a [`MineSelector`](crate::MineSelector).
///
/// Can be read from and written to a JSON file, any missing field takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
	strategy: Strategy,
	max_exhaustive_deposits: usize,
	max_selections: usize,
	placeholder: String,
	separator: String,
}

impl Default for SelectorOptions {
	fn default() -> Self {
		Self {
			strategy: Strategy::Exhaustive,
			/* 2^20 patterns is about a million, past this memory use climbs quickly */
			max_exhaustive_deposits: 20,
			max_selections: 1_000_000,
			placeholder: crate::profit::DEFAULT_PLACEHOLDER.to_string(),
			separator: crate::profit::DEFAULT_SEPARATOR.to_string(),
		}
	}
}

impl SelectorOptions {
	/// Reads options from a JSON file.
	///
	/// Values that fail validation are replaced by their defaults with a warning.
	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Loading selector options from {}", path.display());
		let file = std::fs::File::open(path)?;
		let loaded: SelectorOptions = serde_json::from_reader(std::io::BufReader::new(file))?;

		let mut options = SelectorOptions::default();
		options.set_strategy(loaded.strategy);
		if !options.set_max_exhaustive_deposits(loaded.max_exhaustive_deposits) {
			log::warn!("max_exhaustive_deposits {} is above {}, using {}", loaded.max_exhaustive_deposits, MAX_PATTERN_BITS, options.max_exhaustive_deposits);
		}
		if !options.set_max_selections(loaded.max_selections) {
			log::warn!("max_selections can't be zero, using {}", options.max_selections);
		}
		if !options.set_placeholder(loaded.placeholder) {
			log::warn!("placeholder can't be empty, using \"{}\"", options.placeholder);
		}
		options.set_separator(loaded.separator);
		Ok(options)
	}

	pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
		let file = std::fs::File::create(path)?;
		serde_json::to_writer_pretty(file, self)?;
		Ok(())
	}

	pub fn strategy(&self) -> Strategy {
		self.strategy
	}
	pub fn set_strategy(&mut self, strategy: Strategy) {
		self.strategy = strategy;
	}

	/// Largest deposit list the exhaustive strategy will accept.
	pub fn max_exhaustive_deposits(&self) -> usize {
		self.max_exhaustive_deposits
	}
	/// returns if the limit is valid or not, it can't exceed [`MAX_PATTERN_BITS`].
	pub fn set_max_exhaustive_deposits(&mut self, limit: usize) -> bool {
		if limit <= MAX_PATTERN_BITS {
			self.max_exhaustive_deposits = limit;
			true
		} else {
			false
		}
	}

	/// Largest number of tied selections a run may return.
	pub fn max_selections(&self) -> usize {
		self.max_selections
	}
	/// returns if the limit is valid or not, every run has at least one selection so it can't be zero.
	pub fn set_max_selections(&mut self, limit: usize) -> bool {
		if limit == 0 {
			false
		} else {
			self.max_selections = limit;
			true
		}
	}

	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}
	/// returns if the placeholder is valid or not.
	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> bool {
		let placeholder = placeholder.into();
		if placeholder.is_empty() {
			false
		} else {
			self.placeholder = placeholder;
			true
		}
	}

	pub fn separator(&self) -> &str {
		&self.separator
	}
	pub fn set_separator(&mut self, separator: impl Into<String>) {
		self.separator = separator.into();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test] fn default_is_exhaustive() { assert_eq!(SelectorOptions::default().strategy(), Strategy::Exhaustive) }
	#[test] fn limit_above_pattern_width_rejected() { assert!(!SelectorOptions::default().set_max_exhaustive_deposits(64)) }
	#[test] fn zero_selection_limit_rejected() { assert!(!SelectorOptions::default().set_max_selections(0)) }
	#[test] fn empty_placeholder_rejected() { assert!(!SelectorOptions::default().set_placeholder("")) }

	#[test]
	fn missing_fields_take_defaults() {
		let options: SelectorOptions = serde_json::from_str(r#"{ "strategy": "DynamicProgramming" }"#).unwrap();
		assert_eq!(options.strategy(), Strategy::DynamicProgramming);
		assert_eq!(options.max_exhaustive_deposits(), 20);
		assert_eq!(options.max_selections(), 1_000_000);
		assert_eq!(options.placeholder(), "x");
		assert_eq!(options.separator(), ", ");
	}
}
