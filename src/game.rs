//! Round management: the live board, turn order, and outcome

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Marker, Win};

/// A committed move in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub coord: Coord,
    pub marker: Marker,
}

/// Terminal result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A completed line, with the cells and kind the rendering layer needs
    /// for the strike-through
    Win(Win),
    Tie,
}

/// One round of play over a fresh board.
///
/// The round owns the live board: moves are committed through
/// [`place_move`], which is distinct from the temporary placements the
/// search engine makes while scoring candidates.
///
/// [`place_move`]: Game::place_move
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Marker,
    moves: Vec<PlayedMove>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a round with `first` to move on an empty board
    pub fn new(first: Marker) -> Self {
        Game {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Current board occupancy, for drawing markers
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Exclusive access to the board, for scoring candidate moves in place
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Marker that moves next
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Commit the next move to the live board.
    ///
    /// Checks a win for the mover before checking a tie, records the
    /// outcome when the round ends, and otherwise passes the turn.
    ///
    /// # Errors
    ///
    /// Returns error if the round is already over or the cell is occupied.
    pub fn place_move(&mut self, coord: Coord) -> Result<Option<&Outcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::RoundOver);
        }

        let marker = self.to_move;
        self.board.place(coord, marker)?;
        self.moves.push(PlayedMove { coord, marker });

        if let Some(win) = self.board.has_win(marker) {
            self.outcome = Some(Outcome::Win(win));
        } else if self.board.has_tie() {
            self.outcome = Some(Outcome::Tie);
        } else {
            self.to_move = marker.opponent();
        }

        Ok(self.outcome.as_ref())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Marker::X)
    }
}
