use clap::{Arg, ArgAction, Command, crate_name, crate_version, value_parser};
use clap_complete::{Shell, generate};
use core::fmt::{self, Display, Formatter};
use std::io;
use tracing::level_filters::LevelFilter;

use calc::{evaluate, lexer::tokenize, parse};

#[derive(Debug)]
enum Error {
    Clap(clap::Error),
    Calc(String, calc::Error),
}

impl From<clap::Error> for Error {
    fn from(value: clap::Error) -> Self {
        Error::Clap(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Clap(err) => err.fmt(f),
            Error::Calc(source, err) => err.report(source).fmt(f),
        }
    }
}

type Result<T> = std::result::Result<T, Error>;

fn main() {
    if let Err(error) = run() {
        match &error {
            Error::Clap(err) => {
                err.print().expect("error writing error");
                match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        std::process::exit(0)
                    }
                    _ => std::process::exit(1),
                }
            }
            Error::Calc(_, err) => {
                tracing::debug!(kind = %err.kind(), "evaluation failed");
                eprint!("{error}");
                std::process::exit(1);
            }
        }
    }
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Evaluates integer expressions such as 'let(a, 5, add(a, a))'")
        .disable_colored_help(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("expression")
                .required_unless_present("completions")
                .allow_hyphen_values(true)
                .help("expression to evaluate"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .action(ArgAction::SetTrue)
                .conflicts_with("tree")
                .help("print the scanned tokens instead of evaluating"),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .action(ArgAction::SetTrue)
                .help("print the parsed expression instead of evaluating"),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .exclusive(true)
                .help("print a completion script for SHELL"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("log more (repeat for debug and trace output)"),
        )
}

fn run() -> Result<()> {
    let matches = command().try_get_matches()?;
    init_tracing(matches.get_count("verbose"));

    if let Some(shell) = matches.get_one::<Shell>("completions") {
        generate(*shell, &mut command(), crate_name!(), &mut io::stdout());
        return Ok(());
    }

    let Some(input) = matches.get_one::<String>("expression") else {
        return Err(command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "an expression is required",
            )
            .into());
    };

    if matches.get_flag("tokens") {
        tokens_cmd(input)
    } else if matches.get_flag("tree") {
        tree_cmd(input)
    } else {
        eval_cmd(input)
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn failure(input: &str, err: impl Into<calc::Error>) -> Error {
    Error::Calc(input.to_string(), err.into())
}

fn tokens_cmd(input: &str) -> Result<()> {
    let tokens = tokenize(input).map_err(|err| failure(input, err))?;
    for (token, span) in tokens {
        println!("{span}: {token:?}");
    }
    Ok(())
}

fn tree_cmd(input: &str) -> Result<()> {
    let expr = parse(input).map_err(|err| failure(input, err))?;
    println!("{expr}");
    Ok(())
}

fn eval_cmd(input: &str) -> Result<()> {
    let expr = parse(input).map_err(|err| failure(input, err))?;
    tracing::info!(nodes = expr.size(), "parsed expression");
    let value = evaluate(&expr).map_err(|err| failure(input, err))?;
    println!("{value}");
    Ok(())
}
