mod cli;

use clap::Parser;
use cli::{Cli, Command};
use eight_puzzle::{report, PuzzleError, Solution, State};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), PuzzleError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Succ { state } => report::print_succ(&state, &mut out),
        Command::Solve {
            state,
            grid,
            directions,
        } => {
            let solution = report::print_solve(&state, &mut out)?;
            finish(&solution, &mut out, grid, directions)
        }
        Command::Shuffle { seed, grid } => {
            let state = match seed {
                Some(seed) => State::shuffled(&mut StdRng::seed_from_u64(seed)),
                None => State::random(),
            };
            info!(%state, "shuffled");
            writeln!(out, "Shuffled: {}", state)?;

            let solution = report::print_solve(&state, &mut out)?;
            writeln!(out, "Found optimal solution with {} moves", solution.moves())?;
            finish(&solution, &mut out, grid, true)
        }
    }
}

fn finish<W: Write>(
    solution: &Solution,
    out: &mut W,
    grid: bool,
    directions: bool,
) -> Result<(), PuzzleError> {
    if directions {
        let moves: Vec<String> = solution.directions().iter().map(|m| m.to_string()).collect();
        writeln!(out, "Blank moves: {}", moves.join(" "))?;
    }
    if grid {
        for step in solution.steps() {
            writeln!(out)?;
            step.state.render_grid(out)?;
        }
    }
    Ok(())
}
