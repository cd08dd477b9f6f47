//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - dispatches to the TUI or the one-shot `show` report

use clap::Parser;

use crate::cli::{Command, ShowArgs};
use crate::data::FredClient;
use crate::error::AppError;
use crate::fetch::{FetchRound, SeriesStore};

/// Entry point for the `econ` binary.
pub fn run() -> Result<(), AppError> {
    // We want `econ` and `econ --range 1y` to behave like `econ tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => crate::tui::run(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let client = FredClient::from_env()?;
    let mut store = SeriesStore::new();
    let today = chrono::Local::now().date_naive();

    let round = FetchRound::begin(&mut store, args.range, today);
    let outcomes = round.run_to_completion(&client, &mut store);

    // Per-series failures are recoverable: notice on stderr, table row shows
    // the stored message, and the process still exits 0. With `-i` the
    // notices are filtered like the table, so scripts only see their series.
    for outcome in &outcomes {
        if args.indicator.is_some_and(|only| only != outcome.indicator) {
            continue;
        }
        if let Some(error) = &outcome.error {
            eprintln!(
                "warning: {}: {error}",
                outcome.indicator.display_name()
            );
        }
    }

    print!(
        "{}",
        crate::report::format_dashboard(&store, args.range, args.indicator)
    );
    Ok(())
}

/// Rewrite argv so `econ` defaults to `econ tui`.
///
/// Rules:
/// - `econ`                    -> `econ tui`
/// - `econ -r 1y ...`          -> `econ tui -r 1y ...`
/// - `econ --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "show");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
