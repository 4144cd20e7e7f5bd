//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction, Command, Error,
};
use rlifesim_lib::{Config, PatternCatalog};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default number of generations per second in the TUI.
pub(crate) const DEFAULT_SPEED: u32 = 10;

/// Slowest and fastest speed in the TUI.
pub(crate) const SPEED_RANGE: (u32, u32) = (1, 60);

/// Clamps a speed to [`SPEED_RANGE`].
pub(crate) fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1)
}

/// Settings that can be read from a configuration file.
///
/// Values given on the command line take precedence.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(flatten)]
    config: Config,
    pattern: Option<String>,
    at: Option<(i64, i64)>,
    generations: Option<u64>,
    speed: Option<u32>,
}

impl ConfigFile {
    /// Reads a configuration file, in a format given by its extension.
    fn read(path: &Path) -> ClapResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::raw(
                ErrorKind::Io,
                format!("Cannot read {}: {}\n", path.display(), e),
            )
        })?;
        let invalid = |e: &dyn std::fmt::Display| {
            Error::raw(
                ErrorKind::InvalidValue,
                format!("Invalid configuration file {}: {}\n", path.display(), e),
            )
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&text).map_err(|e| invalid(&e)),
            Some("json") => serde_json::from_str(&text).map_err(|e| invalid(&e)),
            Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(|e| invalid(&e)),
            _ => Err(Error::raw(
                ErrorKind::InvalidValue,
                format!(
                    "Unknown format of {}, expected .toml, .json, .yaml or .yml\n",
                    path.display()
                ),
            )),
        }
    }
}

/// A struct to store the parse results.
#[derive(Clone, Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) pattern: Option<String>,
    pub(crate) at: (i64, i64),
    pub(crate) generations: u64,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub(crate) speed: u32,
    pub(crate) list: bool,
    pub(crate) presets: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn pattern_name(name: &str) -> Result<String, String> {
    if PatternCatalog::builtin().contains(name) {
        Ok(name.to_string())
    } else {
        Err(String::from("unknown pattern, see --list"))
    }
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Simulating Life-like cellular automata on an unbounded lattice\n\
             \n\
             Without --no-tui, the simulation runs in the terminal:\n\
             * [space] pauses or resumes, [s] steps once;\n\
             * the left mouse button draws cells, the right one erases them;\n\
             * [z] undoes, [y] redoes, [c] clears;\n\
             * arrow keys pan, [+] and [-] change the speed;\n\
             * [tab] selects the next pattern, [ and ] the previous or next\n\
               category, [p] places the pattern at the center;\n\
             * [r] switches to the next rule preset, [q] quits.\n\
             \n\
             With --no-tui, the result is displayed in a mix of Plaintext and \n\
             RLE format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each line is ended with `$`;\n\
             * The whole pattern is ended with `!`\n",
        )
        .arg(
            Arg::new("PATTERN")
                .help("Pattern to place at the start")
                .long_help(
                    "Pattern to place at the start\n\
                     The name of a pattern in the catalog, e.g. \"Glider\". \
                     Use --list to see all of them.\n",
                )
                .index(1)
                .value_parser(pattern_name),
        )
        .arg(
            Arg::new("AT")
                .help("Where to center the pattern [default: 0 0]")
                .long("at")
                .num_args(2)
                .value_names(["X", "Y"])
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton [default: B3/S23]")
                .long_help(
                    "Rule of the cellular automaton [default: B3/S23]\n\
                     Supports Life-like rules in the form B<digits>/S<digits>.\n\
                     A rule that can not be parsed kills every cell.\n",
                )
                .short('r')
                .long("rule"),
        )
        .arg(
            Arg::new("MAXHISTORY")
                .help("Number of generations kept for undo [default: 100]")
                .long("max-history")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run before displaying [default: 0]")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("SPEED")
                .help("Generations per second in the TUI [default: 10]")
                .long_help(
                    "Generations per second in the TUI [default: 10]\n\
                     Clamped between 1 and 60.\n",
                )
                .long("speed")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads settings from a TOML, JSON or YAML file")
                .long_help(
                    "Reads settings from a TOML, JSON or YAML file\n\
                     The format is given by the extension. Recognized keys are \
                     rule_string, max_history, pattern, at, generations and speed.\n\
                     Values given on the command line take precedence.\n",
                )
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("LIST")
                .help("Lists the patterns in the catalog")
                .long("list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("PRESETS")
                .help("Lists the rule presets")
                .long("presets")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    let command = command.arg(
        Arg::new("NOTUI")
            .help("Prints the result without entering the TUI")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    command
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments.
    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let file = match matches.get_one::<std::path::PathBuf>("CONFIG") {
            Some(path) => ConfigFile::read(path)?,
            None => ConfigFile::default(),
        };

        let mut config = file.config;
        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config = config.set_rule_string(rule_string);
        }
        if let Some(&max_history) = matches.get_one::<usize>("MAXHISTORY") {
            config = config.set_max_history(max_history);
        }
        if config.max_history == 0 {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                "max-history must be a positive integer\n",
            ));
        }

        let pattern = matches.get_one::<String>("PATTERN").cloned().or(file.pattern);
        let at = match matches.get_many::<i64>("AT") {
            Some(mut values) => match (values.next(), values.next()) {
                (Some(&x), Some(&y)) => (x, y),
                _ => (0, 0),
            },
            None => file.at.unwrap_or((0, 0)),
        };
        let generations = matches
            .get_one::<u64>("GENERATIONS")
            .copied()
            .or(file.generations)
            .unwrap_or(0);
        let speed = clamp_speed(
            matches
                .get_one::<u32>("SPEED")
                .copied()
                .or(file.speed)
                .unwrap_or(DEFAULT_SPEED),
        );

        Ok(Args {
            config,
            pattern,
            at,
            generations,
            speed,
            list: matches.get_flag("LIST"),
            presets: matches.get_flag("PRESETS"),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> ClapResult<()> {
        let args = Args::parse_from(["rlifesim"])?;
        assert_eq!(args.config, Config::default());
        assert_eq!(args.pattern, None);
        assert_eq!(args.at, (0, 0));
        assert_eq!(args.generations, 0);
        assert_eq!(args.speed, DEFAULT_SPEED);
        assert!(!args.list);
        Ok(())
    }

    #[test]
    fn all_options() -> ClapResult<()> {
        let args = Args::parse_from([
            "rlifesim",
            "Glider",
            "--at",
            "-5",
            "7",
            "-r",
            "B36/S23",
            "--max-history",
            "20",
            "-g",
            "8",
            "--speed",
            "100",
        ])?;
        assert_eq!(args.pattern.as_deref(), Some("Glider"));
        assert_eq!(args.at, (-5, 7));
        assert_eq!(args.config, Config::new("B36/S23").set_max_history(20));
        assert_eq!(args.generations, 8);
        assert_eq!(args.speed, 60);
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::parse_from(["rlifesim", "Unicorn"]).is_err());
        assert!(Args::parse_from(["rlifesim", "--max-history", "0"]).is_err());
        assert!(Args::parse_from(["rlifesim", "--config", "settings.ini"]).is_err());
    }

    #[test]
    fn config_file_formats() -> Result<(), Box<dyn std::error::Error>> {
        let file: ConfigFile = toml::from_str(
            "rule_string = \"B2/S\"\n\
             pattern = \"Block\"\n\
             at = [3, -4]\n",
        )?;
        assert_eq!(file.config, Config::new("B2/S"));
        assert_eq!(file.pattern.as_deref(), Some("Block"));
        assert_eq!(file.at, Some((3, -4)));

        let file: ConfigFile = serde_json::from_str(r#"{"max_history": 7, "speed": 30}"#)?;
        assert_eq!(file.config, Config::default().set_max_history(7));
        assert_eq!(file.speed, Some(30));

        let file: ConfigFile = serde_yaml::from_str("generations: 12\n")?;
        assert_eq!(file.config, Config::default());
        assert_eq!(file.generations, Some(12));
        Ok(())
    }
}
