//! text-sort: order sentences and other text units with chained strategies

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;

use text_sorter::{
    config::{SorterConfig, SorterConfigBuilder, StrategySpec},
    error::{SortError, SortResult},
    mode::StandardMode,
    run,
    source::SegmentMode,
};

fn main() {
    let matches = build_cli().get_matches();
    let result = parse_config_from_matches(&matches).and_then(|config| {
        init_logging(config.debug);
        run(&config)
    });

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("text-sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn build_cli() -> Command {
    Command::new("text-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort sentences and other text units")
        .long_about("Sort text units (one per line by default) using a chain of comparison \
            strategies. When two units tie under one strategy the next strategy decides; \
            units that tie under every strategy keep their input order.")
        .arg(Arg::new("files")
            .help("Input files (use '-' or omit for stdin)")
            .num_args(0..)
            .value_name("FILE"))

        .arg(Arg::new("strategy")
            .short('k')
            .long("strategy")
            .help("Add a comparison strategy; repeat to break ties")
            .long_help(concat!(
                "Add a comparison strategy; repeat to break ties.\n\n",
                "SPEC is MODE[:OPTS]. MODE is one of case-sensitive (s), case-insensitive (i), ",
                "case-priority (p) or letters-only (l). OPTS are single letters: r reverse, ",
                "q keep quote characters, u uppercase first, l lowercase first (the last two ",
                "for case-priority only).\n\n",
                "Examples:\n",
                "  -k p       - group case variants, lowercase first\n",
                "  -k i -k s  - ignore case, then break ties by code point\n",
                "  -k l:r     - letters only, descending",
            ))
            .value_name("SPEC")
            .action(ArgAction::Append))

        // Shorthand for a single strategy
        .arg(Arg::new("case-sensitive")
            .short('s')
            .long("case-sensitive")
            .help("Compare raw code points")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-case")
            .short('f')
            .long("ignore-case")
            .help("Compare lowercased text")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("letters-only")
            .short('l')
            .long("letters-only")
            .help("Consider only alphabetic characters")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("upper-first")
            .short('U')
            .long("upper-first")
            .help("With case priority, put uppercase variants first")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the result of comparisons")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("keep-quotes")
            .long("keep-quotes")
            .help("Compare quote characters instead of ignoring them")
            .action(ArgAction::SetTrue))

        .arg(Arg::new("split")
            .long("split")
            .help("How to split input into units")
            .value_name("MODE")
            .value_parser(["line", "paragraph"])
            .default_value("line"))
        .arg(Arg::new("keep-dividers")
            .long("keep-dividers")
            .help("Keep dash dividers (ten or more dashes at line start)")
            .action(ArgAction::SetTrue))

        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check for sorted input; do not sort")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log pipeline details to stderr")
            .action(ArgAction::SetTrue))
}

/// Strategy implied by the shorthand flags when no -k is given
fn shorthand_strategy(matches: &ArgMatches) -> SortResult<StrategySpec> {
    let modes = [
        ("case-sensitive", StandardMode::CaseSensitive),
        ("ignore-case", StandardMode::CaseInsensitive),
        ("letters-only", StandardMode::LettersOnly),
    ];
    let mut selected = modes
        .iter()
        .filter(|(flag, _)| matches.get_flag(flag))
        .map(|(_, mode)| *mode);

    let mode = selected.next().unwrap_or_default();
    if selected.next().is_some() {
        return Err(SortError::conflicting_options(
            "choose at most one of --case-sensitive, --ignore-case and --letters-only",
        ));
    }

    let mode = if matches.get_flag("upper-first") {
        if !mode.is_case_priority() {
            return Err(SortError::conflicting_options(
                "--upper-first only applies to case-priority ordering",
            ));
        }
        StandardMode::CasePriority {
            lowercase_first: false,
        }
    } else {
        mode
    };

    Ok(StrategySpec::new(mode)
        .with_reverse(matches.get_flag("reverse"))
        .with_ignore_quotes(!matches.get_flag("keep-quotes")))
}

fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SorterConfig> {
    let mut builder = SorterConfigBuilder::new();

    let specs: Vec<&String> = matches
        .get_many::<String>("strategy")
        .unwrap_or_default()
        .collect();
    if specs.is_empty() {
        builder = builder.strategy(shorthand_strategy(matches)?);
    } else {
        let shorthand = [
            "case-sensitive",
            "ignore-case",
            "letters-only",
            "upper-first",
            "reverse",
            "keep-quotes",
        ];
        if let Some(flag) = shorthand.iter().find(|flag| matches.get_flag(flag)) {
            return Err(SortError::conflicting_options(&format!(
                "--{flag} cannot be combined with --strategy; use SPEC options instead"
            )));
        }
        for spec in specs {
            builder = builder.strategy(spec.parse()?);
        }
    }

    for file in matches.get_many::<String>("files").unwrap_or_default() {
        builder = builder.input_file(file.clone());
    }
    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output_file(output.clone());
    }
    if let Some(split) = matches.get_one::<String>("split") {
        builder = builder.segment_mode(split.parse::<SegmentMode>()?);
    }
    if matches.get_flag("keep-dividers") {
        builder = builder.keep_dividers();
    }
    if matches.get_flag("check") {
        builder = builder.check();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    builder.build()
}
