//! The Kingpin command-line interface.
//!
//! This module is the main entry point for all CLI commands and
//! orchestrates the core library functions. Rule violations render as
//! miette reports on stderr and exit non-zero.

use std::{fs, path::PathBuf, process};

use clap::Parser;
use miette::IntoDiagnostic;

use crate::cli::args::{Command, KingpinArgs};
use crate::pipeline;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = KingpinArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Score { game, file, json } => handle_score(game, file, json),
        Command::Validate { game, file } => handle_validate(game, file),
    };

    if let Err(report) = result {
        eprintln!("{report:?}");
        process::exit(1);
    }
}

/// Handles the `score` subcommand.
fn handle_score(game: Option<String>, file: Option<PathBuf>, json: bool) -> miette::Result<()> {
    let line = read_game(game, file)?;
    let report = pipeline::score_line(&line)?;
    if json {
        output::print_json(&report);
    } else {
        output::print_scoreboard(&report);
    }
    Ok(())
}

/// Handles the `validate` subcommand.
fn handle_validate(game: Option<String>, file: Option<PathBuf>) -> miette::Result<()> {
    let line = read_game(game, file)?;
    pipeline::validate_line(&line)?;
    println!("ok");
    Ok(())
}

/// Reads the game line from the positional argument or `--file`.
fn read_game(game: Option<String>, file: Option<PathBuf>) -> miette::Result<String> {
    match (game, file) {
        (Some(line), _) => Ok(line),
        (None, Some(path)) => fs::read_to_string(&path).into_diagnostic(),
        (None, None) => unreachable!("clap requires a game or a file"),
    }
}
