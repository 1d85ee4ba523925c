//! Parsing command-line arguments.

use clap::{command, value_parser, Arg, ArgAction, Command};
use rlifesim_lib::{Config, Life, Storage};
use std::time::Duration;

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) saturation: f64,
    pub(crate) seed: Option<u64>,
    pub(crate) generations: u64,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub(crate) interval: Duration,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub(crate) no_tui: bool,
}

/// The command-line interface.
fn build_command() -> Command {
    command!()
        .long_about(
            "Simulating Conway's Game of Life on a finite board\n\
             \n\
             The board does not wrap: a cell on the boundary has fewer\n\
             than 8 neighbors.\n\
             \n\
             Without --no-tui, the board is shown in the terminal:\n\
             * Arrow keys move the cursor, [enter] or [t] toggles a cell,\n\
               and so does a mouse click;\n\
             * [space] starts / stops the simulation, [s] single-steps;\n\
             * [r] randomizes the board, [c] clears it;\n\
             * [+] and [-] speed up / slow down the simulation;\n\
             * [q] quits.\n\
             \n\
             With --no-tui, the board is randomized, advanced the given\n\
             number of generations, and printed in a mix of Plaintext and\n\
             RLE format:\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each line is ended with `$`;\n\
             * The whole pattern is ended with `!`\n",
        )
        .arg(
            Arg::new("X")
                .help("Width of the board")
                .required(true)
                .index(1)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the board")
                .required(true)
                .index(2)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton")
                .long_help(
                    "Rule of the cellular automaton\n\
                     Supports totalistic Life-like rules without B0.\n",
                )
                .short('r')
                .long("rule")
                .default_value("B3/S23")
                .value_parser(|s: &str| s.parse::<Life>().map(|_| s.to_owned()).map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("STORAGE")
                .help("How the cell states are stored")
                .long_help(
                    "How the cell states are stored\n\
                     `dense` keeps one boolean per cell; `sparse` keeps an\n\
                     ordered set of the live cells, and is preferable when\n\
                     the population is much smaller than the board.\n",
                )
                .long("storage")
                .default_value("dense")
                .value_parser(value_parser!(Storage)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between generations")
                .short('i')
                .long("interval")
                .default_value("100")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("SATURATION")
                .help("Probability for a cell to be alive when randomizing")
                .long("saturation")
                .default_value("0.3")
                .value_parser(|s: &str| match s.parse::<f64>() {
                    Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
                    _ => Err(String::from("saturation must be in the range [0, 1]")),
                }),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed for randomizing the board on startup")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to advance (with --no-tui)")
                .short('g')
                .long("generations")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("NO_TUI")
                .help("Runs without the TUI and prints the final board")
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, clap::Error> {
        let matches = build_command().try_get_matches()?;

        let width = *matches.get_one::<i32>("X").unwrap();
        let height = *matches.get_one::<i32>("Y").unwrap();
        let rule_string = matches.get_one::<String>("RULE").unwrap();
        let storage = *matches.get_one::<Storage>("STORAGE").unwrap();
        let interval = *matches.get_one::<u64>("INTERVAL").unwrap();
        let saturation = *matches.get_one::<f64>("SATURATION").unwrap();
        let seed = matches.get_one::<u64>("SEED").copied();
        let generations = *matches.get_one::<u64>("GENERATIONS").unwrap();
        let no_tui = matches.get_flag("NO_TUI") || cfg!(not(feature = "tui"));

        let config = Config::new(width, height)
            .set_storage(storage)
            .set_rule_string(rule_string);

        Ok(Self {
            config,
            saturation,
            seed,
            generations,
            interval: Duration::from_millis(interval),
            no_tui,
        })
    }
}
