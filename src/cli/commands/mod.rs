use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

use crate::config::DEFAULT_CONFIG_PATH;

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        // -V is taken by --verbose
        .disable_version_flag(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("version")
                .help("Print version")
                .long("version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("config")
                .default_value(DEFAULT_CONFIG_PATH)
                .global(true)
                .help("path to config file")
                .long("config")
                .short('c')
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("print logging info if true")
                .long("verbose")
                .short('V'),
        )
        .subcommand(Command::new("start").about("start application"))
}
