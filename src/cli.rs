//! Command-line parsing for the FRED dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the fetch/render code.

use clap::{Parser, Subcommand};

use crate::domain::{Indicator, TimeRange};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "econ", version, about = "Macroeconomic dashboard (FRED-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard TUI.
    ///
    /// This is the default: a bare `econ` behaves like `econ tui`.
    Tui(TuiArgs),
    /// Fetch one full round and print a summary table (useful for scripting).
    Show(ShowArgs),
}

/// Options for the interactive dashboard.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Indicator selected initially.
    #[arg(short = 'i', long, value_enum, default_value_t = Indicator::Gdp)]
    pub indicator: Indicator,

    /// Observation window (1y, 5y, all).
    #[arg(short = 'r', long, value_enum, default_value_t = TimeRange::All)]
    pub range: TimeRange,
}

/// Options for the one-shot report.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Report only this indicator (default: all of them).
    #[arg(short = 'i', long, value_enum)]
    pub indicator: Option<Indicator>,

    /// Observation window (1y, 5y, all).
    #[arg(short = 'r', long, value_enum, default_value_t = TimeRange::All)]
    pub range: TimeRange,
}
