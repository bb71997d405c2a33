//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};
use noughts_core::Mark;

/// Noughts - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in a window", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Seed for the computer's moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Edge length of one board cell in points
    #[arg(long)]
    pub cell_size: Option<f32>,

    /// Mark the human plays
    #[arg(long, value_enum)]
    pub human: Option<MarkArg>,
}

/// Mark choice on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
