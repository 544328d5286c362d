//! Scoring of patterns and selection of the most profitable ones.

use std::collections::HashSet;

use crate::deposit::DepositValue;
use crate::pattern::SelectionPattern;

pub const DEFAULT_PLACEHOLDER: &str = "x";
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Sums the deposits selected by `pattern`.
///
/// A pattern selecting nothing scores zero.
///
/// # Errors
/// - [`InvariantViolation`](crate::Error::InvariantViolation) if the pattern and deposits differ in length.
/// Patterns handed out by this crate always match so this is never a caller error.
/// - [`ProfitOverflow`](crate::Error::ProfitOverflow) if the sum isn't representable.
pub fn score<T: DepositValue>(pattern: &SelectionPattern, deposits: &[T]) -> crate::Result<T> {
	T::narrow(wide_score(pattern, deposits)?).ok_or(crate::Error::ProfitOverflow)
}

/// [`score()`] without converting back to `T`.
pub(crate) fn wide_score<T: DepositValue>(pattern: &SelectionPattern, deposits: &[T]) -> crate::Result<T::Wide> {
	if pattern.len() != deposits.len() {
		return Err(crate::Error::InvariantViolation(format!(
			"pattern {} has {} positions but there are {} deposits", pattern, pattern.len(), deposits.len()
		)));
	}

	pattern.selected_indices().try_fold(<T::Wide as DepositValue>::zero(), |total, i| {
		total.checked_add(deposits[i].widen()).ok_or(crate::Error::ProfitOverflow)
	})
}

/// Scores every pattern and keeps all those sharing the highest profit.
///
/// Ties are not broken, every maximal pattern is returned in the order it was given.
/// Repeated patterns are only reported once.
///
/// # Errors
/// - [`EmptyInput`](crate::Error::EmptyInput) when `valid_patterns` is empty.
/// - [`ProfitOverflow`](crate::Error::ProfitOverflow) when the highest profit doesn't fit in `T`.
/// Losing patterns are summed in [`DepositValue::Wide`] so they never cause this.
/// - [`InvariantViolation`](crate::Error::InvariantViolation) as for [`score()`].
pub fn select_max<T: DepositValue>(valid_patterns: &[SelectionPattern], deposits: &[T]) -> crate::Result<Recommendation<T>> {
	if valid_patterns.is_empty() {
		return Err(crate::Error::EmptyInput);
	}

	let mut scored = Vec::<(&SelectionPattern, T::Wide)>::with_capacity(valid_patterns.len());
	for pattern in valid_patterns {
		let profit = wide_score(pattern, deposits)?;
		log::trace!("{} = {}", pattern, profit);
		scored.push((pattern, profit));
	}

	let mut max_profit = scored[0].1;
	for (_, profit) in &scored[1..] {
		if *profit > max_profit {
			max_profit = *profit;
		}
	}

	let mut seen = HashSet::<&SelectionPattern>::new();
	let patterns = scored.into_iter()
		.filter(|(_, profit)| *profit == max_profit)
		.filter(|(pattern, _)| seen.insert(*pattern))
		.map(|(pattern, _)| pattern.clone())
		.collect();

	let max_profit = T::narrow(max_profit).ok_or(crate::Error::ProfitOverflow)?;
	Ok(Recommendation::new(deposits.to_vec(), patterns, max_profit))
}

/// Every selection achieving the highest profit for one list of deposits.
///
/// Holds its own copy of the deposits so selections can be rendered after the caller's list is gone.
/// Selections are identified by their [`SelectionPattern`], the text form is only built on request.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<T> {
	deposits: Vec<T>,
	patterns: Vec<SelectionPattern>,
	max_profit: T,
	placeholder: String,
	separator: String,
}

impl<T: DepositValue> Recommendation<T> {
	pub(crate) fn new(deposits: Vec<T>, patterns: Vec<SelectionPattern>, max_profit: T) -> Self {
		Self {
			deposits,
			patterns,
			max_profit,
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			separator: DEFAULT_SEPARATOR.to_string(),
		}
	}

	/// Changes how unselected deposits and the gaps between deposits are rendered.
	pub fn with_formatting(mut self, placeholder: impl Into<String>, separator: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self.separator = separator.into();
		self
	}

	/* Fields */

	pub fn deposits(&self) -> &[T] {
		&self.deposits
	}

	/// Profit shared by every selection.
	pub fn max_profit(&self) -> T {
		self.max_profit
	}

	pub fn patterns(&self) -> &[SelectionPattern] {
		&self.patterns
	}

	/// Number of tied selections, at least one for a recommendation built by this crate.
	pub fn len(&self) -> usize {
		self.patterns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.patterns.is_empty()
	}

	pub fn contains(&self, pattern: &SelectionPattern) -> bool {
		self.patterns.contains(pattern)
	}

	/* Views */

	pub fn selections(&self) -> impl Iterator<Item = Selection<'_, T>> {
		self.patterns.iter().map(move |pattern| Selection { recommendation: self, pattern })
	}

	/// Text form of every selection, see [`Selection`]'s `Display`.
	pub fn renderings(&self) -> Vec<String> {
		self.selections().map(|s| s.to_string()).collect()
	}

	pub fn contains_rendering(&self, rendering: &str) -> bool {
		self.selections().any(|s| s.to_string() == rendering)
	}
}

/// A single maximal selection borrowed from a [`Recommendation`].
///
/// Displays as the deposit values in position order with unselected positions replaced by the
/// placeholder, e.g. `206, x, 300, x, 107`.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'r, T> {
	recommendation: &'r Recommendation<T>,
	pattern: &'r SelectionPattern,
}

impl<'r, T: DepositValue> Selection<'r, T> {
	pub fn pattern(&self) -> &'r SelectionPattern {
		self.pattern
	}

	pub fn profit(&self) -> T {
		self.recommendation.max_profit
	}

	/// The deposit value at each selected position, `None` where unselected.
	pub fn values(&self) -> Vec<Option<T>> {
		self.recommendation.deposits.iter()
			.zip(self.pattern.flags())
			.map(|(v, selected)| if *selected { Some(*v) } else { None })
			.collect()
	}
}

impl<T: DepositValue> std::fmt::Display for Selection<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (i, value) in self.values().iter().enumerate() {
			if i > 0 {
				f.write_str(&self.recommendation.separator)?;
			}
			match value {
				Some(v) => write!(f, "{}", v)?,
				None => f.write_str(&self.recommendation.placeholder)?,
			}
		}
		Ok(())
	}
}
