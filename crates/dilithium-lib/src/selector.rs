//! Picks which deposits to extract so that no two neighbours are mined and profit is highest.
//!
//! # Usage
//! For a one off run with default options use [`compute_max_profit_selections()`].
//!
//! Otherwise create a [`MineSelector`] with [`SelectorOptions`] and call
//! [`MineSelector::generate_recommendation()`] for each list of deposits. The selector keeps no state
//! between calls so one instance can be reused, or shared between threads, for any number of lists.
//!
//! # Strategies
//! [`Strategy::Exhaustive`] builds every pattern, drops the ones extracting neighbours and scores the
//! rest. It is exponential in the number of deposits and refuses lists longer than
//! [`SelectorOptions::max_exhaustive_deposits()`].
//!
//! [`Strategy::DynamicProgramming`] finds the best profit of every suffix in a single pass then walks
//! back through every branch that reaches that profit, so ties are reported exactly as the exhaustive
//! search reports them. With float deposits the two strategies sum in a different order and may
//! disagree on selections that differ only by rounding.
//!
//! # Practical limits
//! Both strategies sum profits in [`DepositValue::Wide`] so only the winning profit has to fit in the
//! deposit type.
//!
//! The dynamic programming strategy takes linear time to find the best profit but every tied selection
//! still has to be built. When many deposits are worth nothing the number of ties grows like the
//! Fibonacci sequence, 60 zero deposits tie about 4e12 ways. The number of ties is counted before any
//! selection is built and runs tying more than [`SelectorOptions::max_selections()`] ways are refused.

use crate::config::{SelectorOptions, Strategy};
use crate::deposit::DepositValue;
use crate::pattern::{self, SelectionPattern};
use crate::profit::{self, Recommendation};
use crate::filter;

/// Computes every selection with the highest profit using default options.
///
/// An empty list of deposits has one selection, the empty one, with zero profit.
pub fn compute_max_profit_selections<T: DepositValue>(deposits: &[T]) -> crate::Result<Recommendation<T>> {
	MineSelector::default().generate_recommendation(deposits)
}

#[derive(Debug, Default, Clone)]
pub struct MineSelector {
	options: SelectorOptions,
}

impl MineSelector {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: SelectorOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &SelectorOptions {
		&self.options
	}

	/// Finds all selections of `deposits` sharing the highest profit.
	///
	/// # Errors
	/// - [`TooManyDeposits`](crate::Error::TooManyDeposits) when using the exhaustive strategy on more deposits
	/// than the options allow.
	/// - [`TooManySelections`](crate::Error::TooManySelections) when more selections tie than the options allow.
	/// - [`ProfitOverflow`](crate::Error::ProfitOverflow) when the highest profit isn't representable by `T`.
	pub fn generate_recommendation<T: DepositValue>(&self, deposits: &[T]) -> crate::Result<Recommendation<T>> {
		log::debug!("Generating recommendation for {} deposits using {:?}", deposits.len(), self.options.strategy());

		let recommendation = match self.options.strategy() {
			Strategy::Exhaustive => self.exhaustive(deposits)?,
			Strategy::DynamicProgramming => dynamic_programming(deposits, self.options.max_selections())?,
		}.with_formatting(self.options.placeholder(), self.options.separator());

		for selection in recommendation.selections() {
			log::debug!("{} = {}", selection, selection.profit());
		}

		Ok(recommendation)
	}

	fn exhaustive<T: DepositValue>(&self, deposits: &[T]) -> crate::Result<Recommendation<T>> {
		let limit = self.options.max_exhaustive_deposits();
		if deposits.len() > limit {
			return Err(crate::Error::TooManyDeposits { count: deposits.len(), limit });
		}

		let candidates = pattern::enumerate_patterns(deposits.len())?;
		/* Extracting neighbouring deposits makes them explode */
		let valid = filter::remove_neighbors(&candidates);
		let recommendation = profit::select_max(&valid, deposits)?;

		let max_selections = self.options.max_selections();
		if recommendation.len() > max_selections {
			return Err(crate::Error::TooManySelections { count: recommendation.len() as u128, limit: max_selections });
		}
		Ok(recommendation)
	}
}

fn dynamic_programming<T: DepositValue>(deposits: &[T], max_selections: usize) -> crate::Result<Recommendation<T>> {
	let n = deposits.len();
	let zero = <T::Wide as DepositValue>::zero();
	let take_profit = |i: usize, best: &[T::Wide]| {
		deposits[i].widen().checked_add(best[i + 2]).ok_or(crate::Error::ProfitOverflow)
	};

	/* best[i] is the highest profit using only deposits i.., ways[i] how many selections reach it */
	let mut best = vec![zero; n + 2];
	let mut ways = vec![1u128; n + 2];
	for i in (0..n).rev() {
		let take = take_profit(i, &best)?;
		let skip = best[i + 1];
		best[i] = if take > skip { take } else { skip };

		let mut w = 0u128;
		if skip == best[i] { w = w.saturating_add(ways[i + 1]); }
		if take == best[i] { w = w.saturating_add(ways[i + 2]); }
		ways[i] = w;
	}

	let max_profit = T::narrow(best[0]).ok_or(crate::Error::ProfitOverflow)?;
	if ways[0] > max_selections as u128 {
		return Err(crate::Error::TooManySelections { count: ways[0], limit: max_selections });
	}

	/* Depth first, skipping before taking, gives the same order as the enumeration */
	let mut patterns = Vec::<SelectionPattern>::with_capacity(ways[0] as usize);
	let mut stack = vec![(0usize, vec![false; n])];
	while let Some((i, mut flags)) = stack.pop() {
		if i >= n {
			patterns.push(SelectionPattern::new(flags));
			continue;
		}

		let can_skip = best[i + 1] == best[i];
		let can_take = take_profit(i, &best)? == best[i];

		match (can_skip, can_take) {
			(true, true) => {
				let skipped = flags.clone();
				flags[i] = true;
				stack.push((i + 2, flags));
				stack.push((i + 1, skipped));
			},
			(true, false) => stack.push((i + 1, flags)),
			(false, true) => {
				flags[i] = true;
				stack.push((i + 2, flags));
			},
			(false, false) => {
				return Err(crate::Error::InvariantViolation(format!("no branch at position {} reaches profit {}", i, best[i])));
			},
		}
	}

	Ok(Recommendation::new(deposits.to_vec(), patterns, max_profit))
}
