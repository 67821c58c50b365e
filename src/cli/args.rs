//! Defines the command-line arguments and subcommands for the Kingpin CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "kingpin",
    version,
    about = "A ten-pin bowling scorer with partial-game support."
)]
pub struct KingpinArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a game and print the frame-by-frame scoreboard.
    Score {
        /// The game in frame notation, e.g. "8/ 54 90 X X 5/ 53 63 9/ 9/X".
        #[arg(required_unless_present = "file")]
        game: Option<String>,
        /// Read the game line from a file instead.
        #[arg(long, conflicts_with = "game")]
        file: Option<PathBuf>,
        /// Emit the score report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check a game against the rules and report the first violation.
    Validate {
        /// The game in frame notation.
        #[arg(required_unless_present = "file")]
        game: Option<String>,
        /// Read the game line from a file instead.
        #[arg(long, conflicts_with = "game")]
        file: Option<PathBuf>,
    },
}
