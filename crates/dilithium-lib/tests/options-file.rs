use dilithium::*;

#[test]
fn options_round_trip() {
	let mut options = SelectorOptions::default();
	options.set_strategy(Strategy::DynamicProgramming);
	options.set_max_exhaustive_deposits(12);
	options.set_placeholder("-");
	options.set_separator(" | ");

	let (_dir, path) = dilithium_test_utils::write_options(&options).unwrap();
	let loaded = SelectorOptions::load_from_file(&path).unwrap();
	assert_eq!(loaded, options);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
	let (_dir, path) = dilithium_test_utils::write_raw_options(r#"{ "max_exhaustive_deposits": 500, "placeholder": "" }"#).unwrap();
	let loaded = SelectorOptions::load_from_file(&path).unwrap();
	assert_eq!(loaded, SelectorOptions::default());
}

#[test]
fn malformed_file_is_json_error() {
	let (_dir, path) = dilithium_test_utils::write_raw_options("{ not json").unwrap();
	assert!(matches!(SelectorOptions::load_from_file(&path), Err(Error::SerdeJSON(_))));
}

#[test]
fn missing_file_is_io_error() {
	let path = missing_options_path();
	assert!(matches!(SelectorOptions::load_from_file(path), Err(Error::IO(_))));
}

#[test]
fn loaded_options_change_rendering() {
	let (_dir, path) = dilithium_test_utils::write_raw_options(r#"{ "placeholder": "o", "separator": "" }"#).unwrap();
	let selector = MineSelector::with_options(SelectorOptions::load_from_file(&path).unwrap());
	let rec = selector.generate_recommendation(&[1, 5, 1, 1]).unwrap();
	assert_eq!(rec.renderings(), vec!["o5o1".to_string()]);
}

fn missing_options_path() -> std::path::PathBuf {
	std::env::temp_dir().join("dilithium-options-that-does-not-exist.json")
}
