//! Numeric types usable as deposit values.

/// A value that can be summed into a profit.
///
/// Profits are accumulated in [`Wide`](DepositValue::Wide) and only converted back to `Self` for the
/// reported maximum, so losing selections whose totals don't fit in `Self` don't fail a run.
/// Every integer type up to 64 bits widens to `i128`, which can't overflow for any pattern the
/// enumerator can build. `i128` and `f64` accumulate in themselves.
///
/// Float sums may run to negative infinity, such a selection simply loses. A positive infinite or
/// NaN sum is treated as not representable.
pub trait DepositValue: Copy + PartialEq + PartialOrd + std::fmt::Display + std::fmt::Debug {
	type Wide: DepositValue;

	fn zero() -> Self;

	/// Returns `None` when the sum isn't representable.
	fn checked_add(self, other: Self) -> Option<Self>;

	fn widen(self) -> Self::Wide;

	/// Returns `None` when `wide` doesn't fit in `Self`.
	fn narrow(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_deposit_value_int {
	($($t:ty => $w:ty),*) => {
		$(
			impl DepositValue for $t {
				type Wide = $w;
				fn zero() -> Self { 0 }
				fn checked_add(self, other: Self) -> Option<Self> { <$t>::checked_add(self, other) }
				fn widen(self) -> $w { <$w>::from(self) }
				fn narrow(wide: $w) -> Option<Self> { <$t>::try_from(wide).ok() }
			}
		)*
	};
}

macro_rules! impl_deposit_value_float {
	($($t:ty => $w:ty),*) => {
		$(
			impl DepositValue for $t {
				type Wide = $w;
				fn zero() -> Self { 0.0 }
				fn checked_add(self, other: Self) -> Option<Self> {
					let sum = self + other;
					if sum.is_nan() || sum == <$t>::INFINITY { None } else { Some(sum) }
				}
				fn widen(self) -> $w { <$w>::from(self) }
				fn narrow(wide: $w) -> Option<Self> {
					let v = wide as $t;
					if v.is_finite() { Some(v) } else { None }
				}
			}
		)*
	};
}

impl_deposit_value_int!(i32 => i128, i64 => i128, i128 => i128, u32 => i128, u64 => i128);
impl_deposit_value_float!(f32 => f64, f64 => f64);
