use dilithium::*;

#[test]
fn known_mine_strips() {
	let _ = env_logger::builder().is_test(true).try_init();

	for scenario in dilithium_test_utils::scenarios() {
		let rec = compute_max_profit_selections(scenario.deposits).expect("selection failed");
		assert_eq!(rec.len(), 1, "incorrect count of patterns found for {:?}", scenario.deposits);
		assert!(rec.contains_rendering(scenario.expected_rendering), "incorrect mine strip pattern for {:?}: {:?}", scenario.deposits, rec.renderings());
		assert_eq!(rec.max_profit(), scenario.expected_profit, "incorrect max profit for {:?}", scenario.deposits);
	}
}

#[test]
fn no_deposits() {
	let rec = compute_max_profit_selections::<i64>(&[]).unwrap();
	assert_eq!(rec.len(), 1);
	assert_eq!(rec.max_profit(), 0);
	assert_eq!(rec.patterns(), &[SelectionPattern::default()]);
	assert_eq!(rec.renderings(), vec![String::new()]);
}

#[test]
fn single_deposit() {
	let rec = compute_max_profit_selections(&[42]).unwrap();
	assert_eq!(rec.renderings(), vec!["42".to_string()]);
	assert_eq!(rec.max_profit(), 42);
}

#[test]
fn duplicate_max_profit() {
	let rec = compute_max_profit_selections(&[145, 145, 145, 145]).unwrap();
	let mut found = rec.renderings();
	found.sort();
	assert_eq!(found, vec!["145, x, 145, x", "145, x, x, 145", "x, 145, x, 145"]);
	assert_eq!(rec.max_profit(), 290);
	assert!(rec.selections().all(|s| s.profit() == 290));
}

#[test]
fn all_negative_deposits_select_nothing() {
	let rec = compute_max_profit_selections(&[-5, -1, -7]).unwrap();
	assert_eq!(rec.renderings(), vec!["x, x, x".to_string()]);
	assert_eq!(rec.max_profit(), 0);
}

#[test]
fn float_deposits() {
	let rec = compute_max_profit_selections(&[1.5, 4.25, 2.0]).unwrap();
	assert_eq!(rec.renderings(), vec!["x, 4.25, x".to_string()]);
	assert_eq!(rec.max_profit(), 4.25);
}

#[test]
fn values_beyond_int_range_are_reported() {
	assert!(matches!(compute_max_profit_selections(&[i32::MAX, 0, i32::MAX]), Err(Error::ProfitOverflow)));
	/* The same values fit once widened */
	let rec = compute_max_profit_selections(&[i32::MAX as i64, 0, i32::MAX as i64]).unwrap();
	assert_eq!(rec.max_profit(), 2 * i32::MAX as i64);
}

#[test]
fn repeated_runs_are_identical() {
	let selector = MineSelector::new();
	let deposits = [3, 1, 1, 3, 2, 2, 4];
	let first = selector.generate_recommendation(&deposits).unwrap();
	let second = selector.generate_recommendation(&deposits).unwrap();
	assert_eq!(first, second);
}

#[test]
fn result_owns_its_deposits() {
	let rec = {
		let deposits = vec![9, 1, 9];
		compute_max_profit_selections(&deposits).unwrap()
	};
	assert_eq!(rec.deposits(), &[9, 1, 9]);
	assert_eq!(rec.renderings(), vec!["9, x, 9".to_string()]);
}

#[test]
fn selector_shared_between_threads() {
	let selector = std::sync::Arc::new(MineSelector::new());
	let handles: Vec<_> = dilithium_test_utils::scenarios().into_iter().map(|scenario| {
		let selector = selector.clone();
		std::thread::spawn(move || {
			let rec = selector.generate_recommendation(scenario.deposits).unwrap();
			(rec.max_profit(), scenario.expected_profit)
		})
	}).collect();

	for handle in handles {
		let (found, expected) = handle.join().unwrap();
		assert_eq!(found, expected);
	}
}

fn both_strategies() -> [MineSelector; 2] {
	let mut options = SelectorOptions::default();
	let exhaustive = MineSelector::with_options(options.clone());
	options.set_strategy(Strategy::DynamicProgramming);
	[exhaustive, MineSelector::with_options(options)]
}

#[test]
fn losing_selections_may_exceed_int_range() {
	for selector in both_strategies() {
		let rec = selector.generate_recommendation(&[i32::MIN, 0, -1]).unwrap();
		assert_eq!(rec.max_profit(), 0);
		assert_eq!(rec.renderings(), vec!["x, x, x".to_string(), "x, 0, x".to_string()]);

		let rec = selector.generate_recommendation(&[i32::MIN, 5, i32::MIN]).unwrap();
		assert_eq!(rec.renderings(), vec!["x, 5, x".to_string()]);
	}
}

#[test]
fn best_selection_beyond_int_range_fails_for_both_strategies() {
	/* 10100 sums to i32::MAX + 1 */
	for selector in both_strategies() {
		assert!(matches!(selector.generate_recommendation(&[i32::MAX, 0, 1, 0, -1]), Err(Error::ProfitOverflow)));
	}
}

#[test]
fn best_selection_at_int_limit() {
	for selector in both_strategies() {
		let rec = selector.generate_recommendation(&[i32::MAX, 0, -1, 0, i32::MIN]).unwrap();
		assert_eq!(rec.max_profit(), i32::MAX);
		assert_eq!(rec.renderings(), vec!["2147483647, x, x, x, x".to_string(), "2147483647, x, x, 0, x".to_string()]);
	}
}

#[test]
fn strategies_agree_near_int_limits() {
	let [exhaustive, dp] = both_strategies();
	let lists: [&[i32]; 4] = [
		&[i32::MIN, 0, -1],
		&[i32::MIN, 5, i32::MIN],
		&[i32::MAX, 0, -1, 0, i32::MIN],
		&[i32::MIN, i32::MIN, 1, i32::MIN, i32::MIN],
	];
	for deposits in lists {
		assert_eq!(exhaustive.generate_recommendation(deposits).unwrap(), dp.generate_recommendation(deposits).unwrap(), "strategies disagree for {:?}", deposits);
	}
}

#[test]
fn unsigned_deposits_near_limit() {
	for selector in both_strategies() {
		let rec = selector.generate_recommendation(&[u64::MAX, u64::MAX, 0]).unwrap();
		assert_eq!(rec.max_profit(), u64::MAX);
		assert_eq!(rec.len(), 3);
	}
}
