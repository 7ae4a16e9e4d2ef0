//! Analyze command - score every legal move of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::board::{Board, Coord, Marker, SIDE};
use crate::search::Searcher;

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a position")]
pub struct AnalyzeArgs {
    /// Board as nine cell characters in row-major order ('X', 'O', '.')
    pub board: String,

    /// Marker the engine searches for
    #[arg(long, short = 'p', default_value = "X")]
    pub player: Marker,

    /// Emit machine-readable JSON instead of the score grid
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Analysis {
    board: String,
    player: Marker,
    best: Coord,
    moves: Vec<ScoredMove>,
}

#[derive(Serialize)]
struct ScoredMove {
    row: usize,
    col: usize,
    score: i64,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    let searcher = Searcher::new(args.player);
    let best = searcher.choose(&mut board)?;

    if args.json {
        let analysis = Analysis {
            board: board.to_string(),
            player: args.player,
            best,
            moves: board
                .empty_cells()
                .into_iter()
                .map(|coord| ScoredMove {
                    row: coord.row,
                    col: coord.col,
                    score: board.cell(coord).score(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    for row in 0..SIDE {
        let rendered: Vec<String> = (0..SIDE)
            .map(|col| {
                let coord = Coord { row, col };
                match board.marker_at(coord) {
                    Some(marker) => format!("{:>10}", marker.to_char()),
                    None => format!("{:>10}", board.cell(coord).score()),
                }
            })
            .collect();
        println!("{}", rendered.join(" "));
    }
    println!();
    println!("best move for {}: {}", args.player, best);

    Ok(())
}
