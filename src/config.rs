use crate::core::DEFAULT_MAX_EXPANSIONS;
use crate::search::SearchLimits;
use crate::solver::SolverConfig;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Solve the level and print the report
    Solve,
    /// Solve the level and animate the solution
    Replay,
    /// Enumerate every reachable state and export the graph
    Graph,
    /// Play the level by hand
    Play,
}

/// Cap on node expansions. `none` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimit(pub Option<usize>);

impl FromStr for ExpansionLimit {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ExpansionLimit(None)),
            _ => s.parse().map(|max| ExpansionLimit(Some(max))),
        }
    }
}

impl fmt::Display for ExpansionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(max) => write!(f, "{}", max),
            None => write!(f, "none"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "A* solver for Sokoban levels", long_about = None)]
pub struct Args {
    #[arg(value_enum, default_value_t = Mode::Solve)]
    pub mode: Mode,

    /// Path to a level file. The built-in level is used when omitted.
    pub level: Option<PathBuf>,

    /// Maximum number of node expansions, or `none`
    #[arg(long, default_value_t = ExpansionLimit(Some(DEFAULT_MAX_EXPANSIONS)))]
    pub max_expansions: ExpansionLimit,

    /// Wall-clock limit for the search in milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Report levels with a crate stuck in a corner as unsolvable without searching
    #[arg(long)]
    pub prune_dead_corners: bool,
}

impl Args {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            limits: SearchLimits {
                max_expansions: self.max_expansions.0,
                time_limit: self.time_limit_ms.map(Duration::from_millis),
            },
            prune_dead_corners: self.prune_dead_corners,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("sokoban_solver").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let args = parse(&[]).unwrap();

        assert_eq!(args.mode, Mode::Solve);
        assert_eq!(args.level, None);
        assert_eq!(args.solver_config(), SolverConfig::default());
    }

    #[test]
    fn mode_path_and_limits_are_read() {
        let args = parse(&[
            "replay",
            "levels/one.txt",
            "--max-expansions",
            "500",
            "--time-limit-ms",
            "250",
            "--prune-dead-corners",
        ])
        .unwrap();
        let config = args.solver_config();

        assert_eq!(args.mode, Mode::Replay);
        assert_eq!(args.level, Some(PathBuf::from("levels/one.txt")));
        assert_eq!(config.limits.max_expansions, Some(500));
        assert_eq!(config.limits.time_limit, Some(Duration::from_millis(250)));
        assert!(config.prune_dead_corners);
    }

    #[test]
    fn expansion_limit_can_be_disabled() {
        let args = parse(&["--max-expansions", "none"]).unwrap();

        assert_eq!(args.mode, Mode::Solve);
        assert_eq!(args.solver_config().limits.max_expansions, None);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert_eq!(parse(&["fly"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert!(parse(&["solve", "--max-expansions"]).is_err());
        assert_eq!(
            parse(&["solve", "--time-limit-ms", "soon"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["solve", "--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }
}
