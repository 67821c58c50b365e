//! Handles all user-facing output for the CLI.
//!
//! Scoreboard rendering, colorization, and JSON serialization live here so
//! every command presents results the same way.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::score::{FrameScore, ScoreReport};

/// Column width of one scoreboard cell.
const CELL: usize = 5;

/// Picks color behavior based on whether stdout is a terminal.
fn stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints the frame-by-frame scoreboard with running totals.
pub fn print_scoreboard(report: &ScoreReport) {
    let mut stdout = stdout();

    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    print!("frame ");
    let _ = stdout.reset();
    for entry in &report.frames {
        print!("{:>CELL$}", entry.frame);
    }
    println!();

    print!("score ");
    for entry in &report.frames {
        print_cell(&mut stdout, entry.score);
    }
    println!();

    print!("total ");
    for entry in &report.frames {
        print_cell(&mut stdout, entry.running_total);
    }
    println!();

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    if report.is_complete() {
        println!("game total: {}", report.total);
    } else {
        println!("total so far: {}", report.total);
    }
    let _ = stdout.reset();
}

/// Prints the report as pretty JSON.
pub fn print_json(report: &ScoreReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("failed to serialize report: {error}"),
    }
}

fn print_cell(stdout: &mut StandardStream, score: FrameScore) {
    match score {
        FrameScore::Determinate(value) => print!("{value:>CELL$}"),
        FrameScore::Indeterminate => {
            let _ = stdout.set_color(ColorSpec::new().set_dimmed(true));
            print!("{:>CELL$}", "-");
            let _ = stdout.reset();
        }
    }
}
