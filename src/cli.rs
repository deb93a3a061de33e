use clap::{Parser, Subcommand};
use eight_puzzle::State;

/// Solve the 8-puzzle with A* and the Manhattan-distance heuristic.
#[derive(Parser, Debug)]
#[command(name = "eight-puzzle", version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity when RUST_LOG is unset (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every successor of STATE with its heuristic value
    Succ {
        /// Nine tiles 0-8, comma or space separated, 0 is the blank
        state: State,
    },

    /// Print an optimal path from STATE to the goal
    Solve {
        /// Nine tiles 0-8, comma or space separated, 0 is the blank
        state: State,

        /// Also draw each state as a grid
        #[arg(long)]
        grid: bool,

        /// Also list the blank moves along the path
        #[arg(long)]
        directions: bool,
    },

    /// Solve a random solvable state
    Shuffle {
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Also draw each state as a grid
        #[arg(long)]
        grid: bool,
    },
}

impl Cli {
    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
