//! Return on investment estimates for each kind of mine.
//!
//! Unrelated to deposit selection, it only shares the namespace.

use serde::{Serialize, Deserialize};

/// Universal rate of return coefficient.
pub const ROI_COEFFICIENT: f64 = 1.67e-11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MineType {
	Dilithium,
	Coal,
	NaturalGas,
	Gold,
	Oil,
	Analytics,
}

impl MineType {
	pub const ALL: [MineType; 6] = [
		MineType::Dilithium,
		MineType::Coal,
		MineType::NaturalGas,
		MineType::Gold,
		MineType::Oil,
		MineType::Analytics,
	];

	/// Extraction method.
	pub fn method(&self) -> &'static str {
		match self {
			MineType::Dilithium => "Special",
			MineType::Coal => "Hard Rock",
			MineType::NaturalGas => "Fracturing",
			MineType::Gold => "Panning",
			MineType::Oil => "Hydraulic",
			MineType::Analytics => "Data",
		}
	}

	/// Startup capital estimate as of 2015.
	pub fn capital(&self) -> f64 {
		match self {
			MineType::Dilithium => 2.4e8,
			MineType::Coal => 6.0e6,
			MineType::NaturalGas => 6.3e6,
			MineType::Gold => 3.3e6,
			MineType::Oil => 7.1e6,
			MineType::Analytics => 9.0e7,
		}
	}

	/// Estimated return on investment given total assets and liabilities.
	///
	/// # Errors
	/// [`Validation`](crate::Error::Validation) when a quarter of `assets` equals the startup capital,
	/// which would divide by zero.
	pub fn roi(&self, assets: f64, liabilities: f64) -> crate::Result<f64> {
		let denominator = self.capital() - assets / 4.0;
		if denominator == 0.0 {
			return Err(crate::Error::Validation(format!("assets of {} cancel out the {} startup capital of {}", assets, self, self.capital())));
		}
		Ok(ROI_COEFFICIENT * liabilities / denominator)
	}

	fn name(&self) -> &'static str {
		match self {
			MineType::Dilithium => "DILITHIUM",
			MineType::Coal => "COAL",
			MineType::NaturalGas => "NATURAL_GAS",
			MineType::Gold => "GOLD",
			MineType::Oil => "OIL",
			MineType::Analytics => "ANALYTICS",
		}
	}
}

impl std::fmt::Display for MineType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl std::str::FromStr for MineType {
	type Err = crate::Error;

	/// Case insensitive, accepts `natural_gas` as well as `naturalgas`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.to_uppercase().replace('_', "");
		MineType::ALL.iter()
			.find(|t| t.name().replace('_', "") == wanted)
			.copied()
			.ok_or_else(|| crate::Error::Parse(format!("unknown mine type \"{}\"", s)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool { (a - b).abs() <= b.abs() * 1e-12 }

	#[test] fn display_is_upper_snake() { assert_eq!(MineType::NaturalGas.to_string(), "NATURAL_GAS") }
	#[test] fn parse_ignores_case() { assert_eq!("natural_gas".parse::<MineType>().unwrap(), MineType::NaturalGas) }
	#[test] fn parse_without_underscore() { assert_eq!("NaturalGas".parse::<MineType>().unwrap(), MineType::NaturalGas) }
	#[test] fn parse_unknown_fails() { assert!("uranium".parse::<MineType>().is_err()) }
	#[test] fn display_parse_all() { assert!(MineType::ALL.iter().all(|t| t.to_string().parse::<MineType>().unwrap() == *t)) }
	#[test] fn coal_method() { assert_eq!(MineType::Coal.method(), "Hard Rock") }
	#[test] fn roi_without_assets() { assert!(close(MineType::Gold.roi(0.0, 3.3e6).unwrap(), 1.67e-11)) }
	#[test] fn roi_with_assets() { assert!(close(MineType::Coal.roi(4.0e6, 5.0e6).unwrap(), 1.67e-11 * 5.0e6 / 5.0e6)) }
	#[test] fn roi_zero_denominator() { assert!(matches!(MineType::Oil.roi(2.84e7, 1.0), Err(crate::Error::Validation(_)))) }
}
