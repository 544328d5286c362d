//! Selection patterns and their enumeration.
//!
//! A [`SelectionPattern`] holds one flag per deposit, `true` meaning the deposit is extracted.
//! Patterns are produced by [`enumerate_patterns()`] which builds every N-bit value by repeatedly
//! doubling the set `{0, 1}` and reading each value back as N flags, most significant bit first.

/// The widest pattern [`enumerate_patterns()`] can build from a `u64`.
pub const MAX_PATTERN_BITS: usize = 63;

/// One inclusion flag per deposit position.
///
/// # Eq & Ord
///
/// Patterns compare flag by flag in position order with `false < true`, which for patterns of equal
/// length is the same order [`enumerate_patterns()`] produces them in.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionPattern {
	flags: Vec<bool>,
}

impl SelectionPattern {
	pub fn new(flags: Vec<bool>) -> Self {
		Self { flags }
	}

	/// Reads the low `len` bits of `bits` as flags, position 0 being the most significant.
	///
	/// # Errors
	/// [`TooManyDeposits`](crate::Error::TooManyDeposits) when `len` is above [`MAX_PATTERN_BITS`].
	pub fn from_bits(bits: u64, len: usize) -> crate::Result<Self> {
		if len > MAX_PATTERN_BITS {
			return Err(crate::Error::TooManyDeposits { count: len, limit: MAX_PATTERN_BITS });
		}
		let flags = (0..len)
			.map(|i| (bits >> (len - 1 - i)) & 1 == 1)
			.collect();
		Ok(Self { flags })
	}

	pub fn len(&self) -> usize {
		self.flags.len()
	}

	pub fn is_empty(&self) -> bool {
		self.flags.is_empty()
	}

	pub fn flags(&self) -> &[bool] {
		&self.flags
	}

	pub fn is_selected(&self, position: usize) -> bool {
		self.flags.get(position).copied().unwrap_or(false)
	}

	pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.flags.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| i)
	}

	/// Returns true when two neighbouring positions are both selected.
	///
	/// Patterns of length 0 or 1 never conflict.
	pub fn has_adjacent_selection(&self) -> bool {
		self.flags.windows(2).any(|w| w[0] && w[1])
	}
}

impl From<Vec<bool>> for SelectionPattern {
	fn from(flags: Vec<bool>) -> Self {
		Self::new(flags)
	}
}

impl std::fmt::Display for SelectionPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for flag in &self.flags {
			write!(f, "{}", if *flag { '1' } else { '0' })?;
		}
		Ok(())
	}
}

impl std::str::FromStr for SelectionPattern {
	type Err = crate::Error;

	/// Parses a bit string such as `"10101"`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let flags = s.chars()
			.map(|c| match c {
				'0' => Ok(false),
				'1' => Ok(true),
				_ => Err(crate::Error::Parse(format!("unexpected character '{}' in pattern \"{}\"", c, s))),
			})
			.collect::<crate::Result<Vec<_>>>()?;
		Ok(Self { flags })
	}
}

/// Creates every pattern of length `n`, 2^n in total.
///
/// The result is in ascending numeric order when read as binary. `n == 0` gives a single empty pattern,
/// not an empty list, so a run over no deposits still has one (trivial) candidate.
///
/// # Errors
/// [`TooManyDeposits`](crate::Error::TooManyDeposits) when `n` is above [`MAX_PATTERN_BITS`].
pub fn enumerate_patterns(n: usize) -> crate::Result<Vec<SelectionPattern>> {
	if n == 0 {
		return Ok(vec![SelectionPattern::default()]);
	}
	if n > MAX_PATTERN_BITS {
		return Err(crate::Error::TooManyDeposits { count: n, limit: MAX_PATTERN_BITS });
	}

	let mut possible: Vec<u64> = vec![0, 1];
	for _ in 1..n {
		let mut permutation = Vec::<u64>::with_capacity(possible.len() * 2);
		for value in &possible {
			permutation.push(value << 1);
			permutation.push(value << 1 | 1);
		}
		possible = permutation;
	}

	log::trace!("Enumerated {} patterns of length {}", possible.len(), n);

	possible.into_iter().map(|bits| SelectionPattern::from_bits(bits, n)).collect()
}
