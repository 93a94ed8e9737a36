use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

mod commands;
mod logging;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .value_parser(value_parser!(PathBuf))
        .help("Generator output file (stdin if omitted)")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("Pipeline config TOML file")
}

fn count_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(true)
        .value_parser(value_parser!(usize))
        .help(help)
}

fn cli() -> Command {
    Command::new("assay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize generated assessment scenarios")
        .subcommand_required(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .help("Log filter when RUST_LOG is unset"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("normalize")
                .about("Renumber blanks and realign steps and references")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Print single-line JSON"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .action(ArgAction::SetTrue)
                        .help("Print the normalization report to stderr"),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Check a scenario is already canonical")
                .arg(input_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("score")
                .about("Compute the aggregate score")
                .arg(count_arg("correct", "Correct answers"))
                .arg(count_arg("partial", "Partially correct answers"))
                .arg(count_arg("total", "Total steps")),
        )
}

fn path(args: &ArgMatches, name: &str) -> Option<PathBuf> {
    args.get_one::<PathBuf>(name).cloned()
}

fn count(args: &ArgMatches, name: &str) -> usize {
    args.get_one::<usize>(name).copied().unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map_or("info", String::as_str);
    logging::init(level, matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("normalize", args)) => {
            let config = commands::load_config(path(args, "config").as_deref())?;
            commands::normalize(
                path(args, "input").as_deref(),
                config,
                args.get_flag("compact"),
                args.get_flag("report"),
            )
        }
        Some(("verify", args)) => {
            let config = commands::load_config(path(args, "config").as_deref())?;
            commands::verify(path(args, "input").as_deref(), &config)
        }
        Some(("score", args)) => commands::score(
            count(args, "correct"),
            count(args, "partial"),
            count(args, "total"),
        ),
        _ => unreachable!("subcommand_required"),
    }
}
