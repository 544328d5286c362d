//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/* A negative deposit count can't be expressed with a slice so there is no variant for it. */

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("parsing error: {0}")]
	Parse(String),
	#[error("validation error: {0}")]
	Validation(String),
	/// [`select_max()`](crate::profit::select_max()) was given no patterns to choose from.
	#[error("no valid patterns to select from")]
	EmptyInput,
	/// Too many deposits for an exhaustive search under the current options.
	#[error("{count} deposits exceeds the exhaustive search limit of {limit}")]
	TooManyDeposits { count: usize, limit: usize },
	/// More selections tie for the highest profit than the options allow.
	#[error("{count} tied selections exceeds the limit of {limit}")]
	TooManySelections { count: u128, limit: usize },
	/// The highest profit can't be represented by the deposit value type.
	#[error("highest profit is not representable by the deposit value type")]
	ProfitOverflow,
	/// Internal inconsistency, always a bug in this crate rather than bad input.
	#[error("invariant violated: {0}")]
	InvariantViolation(String),
}
