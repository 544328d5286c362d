/// Deposits used by `recommend` when none are given.
const DEMO_DEPOSITS: [i64; 5] = [147, 206, 52, 240, 300];

fn main() {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = build_options();

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage(&usage_brief()));
			return;
		}

		parsed_options
	};

	{
		let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
		if parsed_options.opt_present("v") {
			builder.filter_level(log::LevelFilter::Debug);
		}
		builder.init();
	}

	let mut options = match parsed_options.opt_str("c") {
		Some(path) => dilithium::SelectorOptions::load_from_file(&path).unwrap_or_else(|e| {
			log::warn!("Failed to read options file {}: {}", path, e);
			log::warn!("Using default options.");
			dilithium::SelectorOptions::default()
		}),
		None => dilithium::SelectorOptions::default(),
	};
	if parsed_options.opt_present("d") {
		options.set_strategy(dilithium::Strategy::DynamicProgramming);
	}

	let command = match parsed_options.free.first() {
		Some(c) => c.as_str(),
		None => {
			eprintln!("{}", opts.usage(&usage_brief()));
			return;
		}
	};

	let res = match command {
		"recommend" => recommend(options, &parsed_options.free[1..]),
		"roi" => roi(&parsed_options.free[1..]),
		other => Err(Error::UnknownCommand(other.to_string())),
	};

	if let Err(e) = res {
		log::error!("{}", e);
		std::process::exit(-1);
	}
}

/// Options must come before the command, everything after it is taken as is so negative deposits
/// aren't mistaken for flags.
fn build_options() -> getopts::Options {
	let mut opts = getopts::Options::new();
	opts.optflag( "h", "help",       "Show help");
	opts.optflag( "v", "verbose",    "Increased vebosity");
	opts.optflag( "d", "dynamic",    "Use the linear time search instead of enumerating every pattern");
	opts.optopt(  "c", "config",     "Read selector options from a JSON file", "FILE");
	opts.parsing_style(getopts::ParsingStyle::StopAtFirstFree);
	opts
}

fn usage_brief() -> String {
	[
		"Usage:",
		"  dilithium-terminal [options] recommend [DEPOSIT...]",
		"  dilithium-terminal [options] roi ASSETS LIABILITIES",
	].join("\n")
}

fn recommend(options: dilithium::SelectorOptions, args: &[String]) -> Result<(), Error> {
	let selector = dilithium::MineSelector::with_options(options);

	if args.is_empty() {
		log::info!("No deposits given, using {:?}", DEMO_DEPOSITS);
		return print_recommendation(&selector, &DEMO_DEPOSITS);
	}

	/* Whole numbers are summed exactly, anything else switches every deposit to floating point */
	if args.iter().all(|s| s.parse::<i64>().is_ok()) {
		let deposits = parse_all::<i64>(args)?;
		print_recommendation(&selector, &deposits)
	} else {
		let deposits = parse_all::<f64>(args)?;
		if let Some(v) = deposits.iter().find(|v| !v.is_finite()) {
			return Err(Error::InvalidArgument(format!("deposit values must be finite, got {}", v)));
		}
		print_recommendation(&selector, &deposits)
	}
}

fn print_recommendation<T: dilithium::DepositValue>(selector: &dilithium::MineSelector, deposits: &[T]) -> Result<(), Error> {
	let recommendation = selector.generate_recommendation(deposits)?;
	for selection in recommendation.selections() {
		println!("{} = {}", selection, selection.profit());
	}
	Ok(())
}

fn roi(args: &[String]) -> Result<(), Error> {
	if args.len() != 2 {
		return Err(Error::MissingArgument);
	}
	let values = parse_all::<f64>(args)?;
	let (assets, liabilities) = (values[0], values[1]);

	for mine_type in dilithium::MineType::ALL {
		match mine_type.roi(assets, liabilities) {
			Ok(roi) => println!("Your ROI on {} is {:.6}", mine_type, roi),
			Err(e) => log::warn!("No ROI for {}: {}", mine_type, e),
		}
	}
	Ok(())
}

fn parse_all<T: std::str::FromStr>(args: &[String]) -> Result<Vec<T>, Error> {
	args.iter()
		.map(|s| s.parse::<T>().map_err(|_| Error::InvalidArgument(format!("\"{}\" is not a number", s))))
		.collect()
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("dilithium error: {0}")]
	Dilithium(#[from] dilithium::Error),
	#[error("Missing argument")]
	MissingArgument,
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Unknown command \"{0}\"")]
	UnknownCommand(String),
}
