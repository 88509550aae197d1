use crate::cli::actions::Action;
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use std::path::PathBuf;

/// Read the verbose flag, wherever it was given
#[must_use]
pub fn verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
        || matches
            .subcommand()
            .is_some_and(|(_, sub)| sub.get_flag("verbose"))
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if no known subcommand was given
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("start", sub)) => {
            let config = sub
                .get_one::<PathBuf>("config")
                .cloned()
                .context("config path is required")?;

            Ok(Action::Start { config })
        }
        Some((name, _)) => bail!("unknown command: {name}"),
        None => bail!("no command given"),
    }
}
