//! Depth-discounted heuristic search over simulated future play
//!
//! The engine estimates how desirable a hypothetical board is for one side
//! by branching over plausible continuations: it credits completed lines,
//! debits unblocked opposing threats, and prices a double threat as an
//! assured win two placements ahead. Payoffs decay geometrically with depth
//! (`10^(9-ply)`), so an early win or loss dominates everything that could
//! happen later.
//!
//! This is deliberately not an optimal adversarial search: the opponent's
//! replies follow a fixed prediction policy (block the first listed threat,
//! otherwise try everything), and sibling branches thread one running score
//! through the recursion rather than aggregating by max or average.

use crate::board::{Board, Coord, Marker};
use crate::error::{Error, Result};
use crate::lines::threat_cells;

/// Score magnitude of a game-deciding event `ply` placements deep
fn payoff(ply: u32) -> i64 {
    debug_assert!((1..=9).contains(&ply));
    10_i64.pow(9 - ply)
}

/// Heuristic recursive evaluator and move selector for one searching side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    marker: Marker,
    opponent: Marker,
}

impl Searcher {
    pub fn new(marker: Marker) -> Self {
        Searcher {
            marker,
            opponent: marker.opponent(),
        }
    }

    /// Marker of the searching side
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Score the current position for the searching side.
    ///
    /// The board is mutated during evaluation and restored before returning;
    /// occupancy after the call is identical to occupancy before it.
    pub fn score_position(&self, board: &mut Board) -> Result<i64> {
        self.lookahead(board, 0, 1)
    }

    /// Recursive evaluation with an accumulated `score` and a `ply` counter
    /// that advances by one per simulated placement, by either side.
    ///
    /// Checks run in strict priority order: a completed own line, then an
    /// unblocked opposing threat, then a full board. Only then does the
    /// search branch. The running score threads through every recursive
    /// call, and enumeration loops keep the last returned value.
    pub fn lookahead(&self, board: &mut Board, score: i64, ply: u32) -> Result<i64> {
        // A completed line means the simulated game already ended in the
        // searcher's favor.
        if board.has_win(self.marker).is_some() {
            return Ok(score + payoff(ply));
        }

        // An unblocked opposing threat is a loss next placement, without
        // simulating the opponent taking it.
        if !threat_cells(board, self.opponent).is_empty() {
            return Ok(score - payoff(ply));
        }

        if board.has_tie() {
            return Ok(score);
        }

        let reply_ply = ply + 1;
        let mut score = score;
        let own_threats = threat_cells(board, self.marker);

        if !own_threats.is_empty() {
            score += payoff(reply_ply);
            if own_threats.len() > 1 {
                // A fork cannot be answered by a single block: assured win
                // two placements ahead, no further simulation.
                score += payoff(reply_ply);
                return Ok(score);
            }

            // Predict the block, then branch over our follow-ups.
            let block = own_threats[0];
            board.place(block, self.opponent)?;
            for reply in board.empty_cells() {
                board.place(reply, self.marker)?;
                score = self.lookahead(board, score, reply_ply + 1)?;
                board.clear(reply);
            }
            board.clear(block);
        } else {
            for opponent_move in board.empty_cells() {
                board.place(opponent_move, self.opponent)?;
                let threats = threat_cells(board, self.opponent);
                if let Some(&block) = threats.first() {
                    // Forced to block the first listed threat.
                    board.place(block, self.marker)?;
                    score = self.lookahead(board, score, reply_ply + 1)?;
                    board.clear(block);
                } else {
                    for reply in board.empty_cells() {
                        board.place(reply, self.marker)?;
                        score = self.lookahead(board, score, reply_ply + 1)?;
                        board.clear(reply);
                    }
                }
                board.clear(opponent_move);
            }
        }

        Ok(score)
    }

    /// Score every legal move and return the best cell.
    ///
    /// Each empty cell is tried in row-major order: the searching marker is
    /// placed, the position is scored, the placement is undone, and the
    /// score is recorded on the cell for later inspection. Ties keep the
    /// first cell encountered. Occupancy is unchanged after the call, so
    /// repeated calls on an uncommitted board return the same cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`] if the board is full.
    pub fn choose(&self, board: &mut Board) -> Result<Coord> {
        let mut best_cell = None;
        let mut best_score = i64::MIN;

        for cell in board.empty_cells() {
            board.place(cell, self.marker)?;
            let score = self.score_position(board)?;
            board.clear(cell);
            board.set_score(cell, score);

            if best_cell.is_none() || score > best_score {
                best_score = score;
                best_cell = Some(cell);
            }
        }

        best_cell.ok_or(Error::NoMovesAvailable)
    }
}
