//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use dilithium::SelectorOptions;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("dilithium error: {0}")]
	Dilithium(#[from] dilithium::Error),
}

/// A list of deposits with the single selection expected to be recommended for it.
pub struct Scenario {
	pub deposits: &'static [i64],
	pub expected_rendering: &'static str,
	pub expected_profit: i64,
}

/// Deposit lists with a unique best selection.
pub fn scenarios() -> Vec<Scenario> {
	vec![
		Scenario { deposits: &[206, 140, 300, 52, 107], expected_rendering: "206, x, 300, x, 107", expected_profit: 613 }, /* single neighbour */
		Scenario { deposits: &[147, 206, 52, 240, 300], expected_rendering: "x, 206, x, x, 300",   expected_profit: 506 }, /* mixed neighbour */
		Scenario { deposits: &[145, 145, 145, 145, 145], expected_rendering: "145, x, 145, x, 145", expected_profit: 435 },
		Scenario { deposits: &[206, 140, 300, 52],       expected_rendering: "206, x, 300, x",      expected_profit: 506 },
		Scenario { deposits: &[206, 140],                expected_rendering: "206, x",              expected_profit: 206 },
		Scenario { deposits: &[206],                     expected_rendering: "206",                 expected_profit: 206 },
	]
}

/// Highest profit and every index set reaching it, found by plain recursion over include/exclude.
///
/// Shares no code with the library so it can be used to check it.
pub fn reference_best(deposits: &[i64]) -> (i64, Vec<Vec<usize>>) {
	fn walk(deposits: &[i64], i: usize, chosen: &mut Vec<usize>, total: i64, best: &mut (i64, Vec<Vec<usize>>)) {
		if i >= deposits.len() {
			if total > best.0 {
				*best = (total, vec![chosen.clone()]);
			} else if total == best.0 {
				best.1.push(chosen.clone());
			}
			return;
		}
		walk(deposits, i + 1, chosen, total, best);
		chosen.push(i);
		walk(deposits, i + 2, chosen, total + deposits[i], best);
		chosen.pop();
	}

	let mut best = (i64::MIN, Vec::new());
	walk(deposits, 0, &mut Vec::new(), 0, &mut best);
	best
}

/// Every list of `len` deposits drawn from `alphabet`.
pub fn all_deposit_lists(alphabet: &[i64], len: usize) -> Vec<Vec<i64>> {
	let mut lists = vec![Vec::new()];
	for _ in 0..len {
		lists = lists.into_iter()
			.flat_map(|list| alphabet.iter().map(move |v| {
				let mut next = list.clone();
				next.push(*v);
				next
			}))
			.collect();
	}
	lists
}

/// Writes `options` as JSON into a fresh temporary directory.
///
/// # Returns
/// The directory, which is deleted when dropped, and the path of the written file.
pub fn write_options(options: &SelectorOptions) -> Result<(tempfile::TempDir, std::path::PathBuf), Error> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("options.json");
	options.save_to_file(&path)?;
	Ok((dir, path))
}

/// Writes raw text into a fresh temporary directory, for options files that can't be built with [`SelectorOptions`].
pub fn write_raw_options(contents: &str) -> Result<(tempfile::TempDir, std::path::PathBuf), Error> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("options.json");
	std::fs::write(&path, contents)?;
	Ok((dir, path))
}
