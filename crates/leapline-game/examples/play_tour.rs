//! Example playing an automatic tour on the terminal.
//!
//! This example shows how to:
//! - Configure a `Session` with a board size and move distance
//! - Drive the exhaustive search from a chosen starting cell
//! - Observe search progress through a `SessionObserver`
//! - Render the finished path as a grid of visit orders
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_tour
//! ```
//!
//! Start from a different cell:
//!
//! ```sh
//! cargo run --example play_tour -- --start 2,2
//! ```
//!
//! Try another board size or move distance (squared):
//!
//! ```sh
//! cargo run --example play_tour -- --size 6 --distance 5
//! ```
//!
//! Log each search step:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example play_tour
//! ```

use std::{num::NonZero, process};

use clap::Parser;
use leapline_core::{Cell, CellSet};
use leapline_game::{Session, SessionConfig, SessionObserver};
use leapline_solver::SearchOutcome;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size (rows and columns).
    #[arg(long, value_name = "N", default_value_t = 5)]
    size: u8,

    /// Squared move distance (5 is the knight's leap).
    #[arg(long, value_name = "DIST", default_value_t = 5)]
    distance: u16,

    /// Starting cell as `row,col`; the search picks its own start if omitted.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    start: Option<Cell>,
}

fn parse_cell(raw: &str) -> Result<Cell, String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{raw}`"))?;
    let row = row.trim().parse().map_err(|_| format!("bad row `{row}`"))?;
    let col = col.trim().parse().map_err(|_| format!("bad column `{col}`"))?;
    Ok(Cell::new(row, col))
}

/// Logs search activity and counts steps.
#[derive(Debug, Default)]
struct Progress {
    steps: u64,
}

impl SessionObserver for Progress {
    fn on_cell_state_changed(&mut self, cell: Cell, order: Option<NonZero<u16>>) {
        match order {
            Some(order) => log::debug!("place {cell} as move {order}"),
            None => log::debug!("retract {cell}"),
        }
    }

    fn on_search_progress(&mut self, _cell: Cell) {
        self.steps += 1;
    }

    fn on_legal_moves_changed(&mut self, legal: &CellSet) {
        log::trace!("{} legal moves", legal.len());
    }

    fn on_terminal(&mut self, outcome: SearchOutcome) {
        log::info!("search finished: {outcome}");
    }
}

fn print_board(session: &Session) {
    let board = session.board();
    let width = usize::try_from(board.cell_count().ilog10()).unwrap() + 2;
    for row in 0..board.size() {
        let line: String = (0..board.size())
            .map(|col| {
                let cell = Cell::new(row, col);
                match session.path().order_of(cell) {
                    Some(order) => format!("{order:>width$}"),
                    None => format!("{:>width$}", "."),
                }
            })
            .collect();
        println!("{line}");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = SessionConfig::default()
        .board_size(args.size)
        .distance(args.distance);
    let mut session = match Session::new(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(1);
        }
    };

    let mut progress = Progress::default();
    let outcome = match args.start {
        Some(cell) => match session.request_move(cell, &mut progress) {
            Ok(_) => session.outcome().expect("search ran to a terminal"),
            Err(err) => {
                eprintln!("invalid start: {err}");
                process::exit(1);
            }
        },
        None => session
            .start_automatic(&mut progress)
            .expect("search candidates are always legal"),
    };

    match outcome {
        SearchOutcome::Solved => {
            println!(
                "solved {0}×{0} in {1} search steps:",
                session.board().size(),
                progress.steps
            );
            print_board(&session);
        }
        SearchOutcome::Unsolvable => {
            println!(
                "no covering path exists ({} search steps tried)",
                progress.steps
            );
        }
    }
}
