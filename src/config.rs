use argh::FromArgs;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable consulted when no roster path is given on the command line.
pub const ROSTER_ENV_VAR: &str = "SCHOOL_SEARCH_ROSTER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no roster file given; pass a path or set SCHOOL_SEARCH_ROSTER")]
    MissingRoster,
}

#[derive(FromArgs, Debug, Default, PartialEq)]
/// Search a comma-separated school roster by student, teacher, classroom or bus route.
pub struct Config {
    #[argh(positional)]
    /// path to the roster file. Falls back to $SCHOOL_SEARCH_ROSTER when omitted.
    pub roster: Option<PathBuf>,

    #[argh(option, short = 'c')]
    /// run this command instead of starting the interactive prompt; may be repeated.
    pub command: Vec<String>,

    #[argh(switch, short = 'v')]
    /// log debug messages to standard error.
    pub verbose: bool,
}

impl Config {
    /// Resolve the roster path, consulting `lookup` for [`ROSTER_ENV_VAR`] if needed.
    pub fn roster_path_with<F>(&self, lookup: F) -> Result<PathBuf, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.roster
            .clone()
            .or_else(|| lookup(ROSTER_ENV_VAR).map(PathBuf::from))
            .ok_or(ConfigError::MissingRoster)
    }

    /// Resolve the roster path against the process environment.
    pub fn roster_path(&self) -> Result<PathBuf, ConfigError> {
        self.roster_path_with(|key| std::env::var(key).ok())
    }

    /// Default log filter; `RUST_LOG` takes precedence when set.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
