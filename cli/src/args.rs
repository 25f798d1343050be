use clap::{ArgAction, Parser};
use log::Level;

use crate::config::{Config, Pattern};

/// Runs a cellular automaton on a toroidal board without a display, logging
/// how much of the board changes each generation.
#[derive(Debug, Parser)]
#[command(name = "torcell", version)]
pub struct Args {
    /// Rule name (`life`, `wireworld`, `ant`) or Life-like rule string such as
    /// `B36/S23`.
    #[arg(short, long)]
    rule: Option<String>,
    /// Side length of the board.
    #[arg(short, long)]
    size: Option<usize>,
    /// State of every cell that isn't part of the starting pattern.
    #[arg(long)]
    default_state: Option<u8>,
    /// Starting pattern.
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,
    /// Number of generations to simulate.
    #[arg(short, long)]
    generations: Option<u64>,
    /// Number of generations between progress reports.
    #[arg(long)]
    step_size: Option<u64>,
    /// Stop at this generation.
    #[arg(long)]
    breakpoint: Option<u64>,
    /// Log more detail (repeat for even more).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    /// Layers the command-line flags on top of the default configuration.
    pub fn into_config(self) -> Config {
        let mut config = Config::default();
        let board = &mut config.board;
        if let Some(rule) = self.rule {
            board.rule = rule;
        }
        if let Some(size) = self.size {
            board.size = size;
        }
        if let Some(default_state) = self.default_state {
            board.default_state = default_state;
        }
        board.pattern = self.pattern.or(board.pattern);

        let sim = &mut config.sim;
        if let Some(generations) = self.generations {
            sim.generations = generations;
        }
        if let Some(step_size) = self.step_size {
            sim.step_size = step_size.max(1);
        }
        sim.breakpoint_gen = self.breakpoint.or(sim.breakpoint_gen);
        sim.log_level = match (self.quiet, self.verbose) {
            (true, _) => Level::Warn,
            (false, 0) => sim.log_level,
            (false, 1) => Level::Debug,
            (false, _) => Level::Trace,
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Args::try_parse_from(std::iter::once("torcell").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    fn test_args_defaults() {
        assert_eq!(Config::default(), parse(&[]));
        assert_eq!(Pattern::Glider, parse(&[]).board.pattern());
    }

    #[test]
    fn test_args_override() {
        let config = parse(&[
            "--rule",
            "wireworld",
            "-s",
            "20",
            "-g",
            "40",
            "--step-size",
            "0",
            "--breakpoint",
            "30",
            "-vv",
        ]);
        assert_eq!("wireworld", config.board.rule);
        assert_eq!(20, config.board.size);
        assert_eq!(Pattern::WireLoop, config.board.pattern());
        assert_eq!(40, config.sim.generations);
        assert_eq!(1, config.sim.step_size);
        assert_eq!(30, config.sim.last_gen());
        assert_eq!(Level::Trace, config.sim.log_level);
    }

    #[test]
    fn test_args_pattern() {
        let config = parse(&["--rule", "ant", "--pattern", "wire-loop", "-q"]);
        assert_eq!(Pattern::WireLoop, config.board.pattern());
        assert_eq!(Level::Warn, config.sim.log_level);
        assert!(Args::try_parse_from(&["torcell", "-q", "-v"]).is_err());
    }
}
