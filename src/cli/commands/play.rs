//! Play command - drive a round against the engine in the terminal

use std::io::{self, BufRead, Write as _};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::board::{Board, Coord, Marker};
use crate::error::Error;
use crate::game::{Game, Outcome};
use crate::search::Searcher;

/// How the engine side picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MovePolicy {
    /// Heuristic lookahead over simulated future play
    Heuristic,
    /// Uniformly random legal move
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play a round against the engine")]
pub struct PlayArgs {
    /// Marker the engine plays
    #[arg(long, default_value = "X")]
    pub engine_marker: Marker,

    /// Engine makes the first move (you move first by default)
    #[arg(long)]
    pub engine_first: bool,

    /// Engine move policy
    #[arg(long, value_enum, default_value = "heuristic")]
    pub policy: MovePolicy,

    /// Random seed for the random policy
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let engine = args.engine_marker;
    let human = engine.opponent();
    let first = if args.engine_first { engine } else { human };

    let mut game = Game::new(first);
    let searcher = Searcher::new(engine);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("You play {human}. Enter moves as 'row col' (0-2), or 'q' to quit.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_over() {
        if game.to_move() == engine {
            let coord = match args.policy {
                MovePolicy::Heuristic => searcher.choose(game.board_mut())?,
                MovePolicy::Random => random_move(game.board(), &mut rng)?,
            };
            println!("engine plays {coord}");
            game.place_move(coord)?;
            continue;
        }

        println!("{}", game.board());
        let Some(coord) = prompt_move(&mut input)? else {
            println!("round abandoned");
            return Ok(());
        };
        if let Err(err) = game.place_move(coord) {
            println!("{err}");
        }
    }

    println!("{}", game.board());
    match game.outcome() {
        Some(Outcome::Win(win)) if win.marker == human => println!("you win!"),
        Some(Outcome::Win(_)) => println!("you lose"),
        Some(Outcome::Tie) => println!("tie"),
        None => {}
    }

    Ok(())
}

fn random_move(board: &Board, rng: &mut StdRng) -> Result<Coord, Error> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(Error::NoMovesAvailable)
}

/// Read a coordinate from the terminal, re-prompting on bad input.
/// Returns None on end of input or an explicit quit.
fn prompt_move(input: &mut impl BufRead) -> Result<Option<Coord>> {
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        let mut parts = trimmed.split_whitespace();
        let row = parts.next().and_then(|token| token.parse().ok());
        let col = parts.next().and_then(|token| token.parse().ok());
        match (row, col, parts.next()) {
            (Some(row), Some(col), None) => match Coord::try_new(row, col) {
                Ok(coord) => return Ok(Some(coord)),
                Err(err) => println!("{err}"),
            },
            _ => println!("enter a move as 'row col', e.g. '0 2'"),
        }
    }
}
