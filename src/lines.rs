//! Winning-line scans and threat analysis

use crate::board::{Board, Coord, Line, LineKind, Marker, SIDE, Win};

/// The eight lines in the stable scan order: rows 0..2, columns 0..2,
/// ascending diagonal, descending diagonal.
///
/// Win detection and threat scans both walk this order, so the first match
/// reported for a multi-line board is deterministic.
pub fn all_lines() -> [Line; 8] {
    let mut lines = [Line {
        kind: LineKind::Row,
        cells: [Coord { row: 0, col: 0 }; 3],
    }; 8];
    for index in 0..SIDE {
        lines[index] = line_at(LineKind::Row, index);
        lines[SIDE + index] = line_at(LineKind::Column, index);
    }
    lines[6] = line_at(LineKind::AscendingDiagonal, 0);
    lines[7] = line_at(LineKind::DescendingDiagonal, 0);
    lines
}

pub(crate) fn line_at(kind: LineKind, index: usize) -> Line {
    let cells = match kind {
        LineKind::Row => std::array::from_fn(|col| Coord { row: index, col }),
        LineKind::Column => std::array::from_fn(|row| Coord { row, col: index }),
        LineKind::AscendingDiagonal => std::array::from_fn(|i| Coord {
            row: i,
            col: SIDE - 1 - i,
        }),
        LineKind::DescendingDiagonal => std::array::from_fn(|i| Coord { row: i, col: i }),
    };
    Line { kind, cells }
}

/// First line fully occupied by `marker` in the scan order, if any
pub fn winning_line(board: &Board, marker: Marker) -> Option<Win> {
    all_lines()
        .into_iter()
        .find(|line| {
            line.cells
                .iter()
                .all(|&coord| board.marker_at(coord) == Some(marker))
        })
        .map(|line| Win {
            marker,
            kind: line.kind,
            cells: line.cells,
        })
}

/// Empty cells whose occupation by `marker` would complete a line.
///
/// Returns one entry per threatening line in the scan order, so a cell shared
/// by two such lines appears twice. Callers rely on the count (two or more
/// entries signal a fork) as well as on the first entry being the block
/// target.
pub fn threat_cells(board: &Board, marker: Marker) -> Vec<Coord> {
    let mut threats = Vec::new();
    for line in all_lines() {
        let marked = line
            .cells
            .iter()
            .filter(|&&coord| board.marker_at(coord) == Some(marker))
            .count();
        if marked == 2 {
            for &coord in &line.cells {
                if board.is_empty(coord) {
                    threats.push(coord);
                }
            }
        }
    }
    threats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::try_new(row, col).unwrap()
    }

    #[test]
    fn test_winning_line_row() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(at(0, col), Marker::X).unwrap();
        }
        let win = board.has_win(Marker::X).unwrap();
        assert_eq!(win.kind, LineKind::Row);
        assert_eq!(win.cells, [at(0, 0), at(0, 1), at(0, 2)]);
        assert!(board.has_win(Marker::O).is_none());
    }

    #[test]
    fn test_winning_line_first_match_order() {
        // X completes both the top row and the left column; the row is
        // reported because rows are scanned first.
        let mut board = Board::new();
        for coord in [at(0, 0), at(0, 1), at(0, 2), at(1, 0), at(2, 0)] {
            board.place(coord, Marker::X).unwrap();
        }
        let win = board.has_win(Marker::X).unwrap();
        assert_eq!(win.kind, LineKind::Row);
        assert_eq!(win.cells, [at(0, 0), at(0, 1), at(0, 2)]);
    }

    #[test]
    fn test_winning_line_diagonal_order() {
        // Both diagonals complete; ascending is scanned before descending.
        let mut board = Board::new();
        for coord in [at(0, 2), at(1, 1), at(2, 0), at(0, 0), at(2, 2)] {
            board.place(coord, Marker::O).unwrap();
        }
        let win = board.has_win(Marker::O).unwrap();
        assert_eq!(win.kind, LineKind::AscendingDiagonal);
    }

    #[test]
    fn test_threat_cells_single() {
        let mut board = Board::new();
        board.place(at(0, 0), Marker::X).unwrap();
        board.place(at(0, 2), Marker::X).unwrap();
        assert_eq!(threat_cells(&board, Marker::X), vec![at(0, 1)]);
        assert!(threat_cells(&board, Marker::O).is_empty());
    }

    #[test]
    fn test_threat_cells_blocked_line_is_no_threat() {
        let mut board = Board::new();
        board.place(at(0, 0), Marker::X).unwrap();
        board.place(at(0, 1), Marker::X).unwrap();
        board.place(at(0, 2), Marker::O).unwrap();
        assert!(threat_cells(&board, Marker::X).is_empty());
    }

    #[test]
    fn test_threat_cells_shared_cell_counted_per_line() {
        // (0, 2) completes both the top row and the right column, so it
        // appears twice; (0, 0) and (2, 2) also pair up on the descending
        // diagonal, threatening (1, 1) once.
        let mut board = Board::new();
        board.place(at(0, 0), Marker::X).unwrap();
        board.place(at(0, 1), Marker::X).unwrap();
        board.place(at(1, 2), Marker::X).unwrap();
        board.place(at(2, 2), Marker::X).unwrap();
        let threats = threat_cells(&board, Marker::X);
        assert_eq!(threats, vec![at(0, 2), at(0, 2), at(1, 1)]);
    }

    #[test]
    fn test_threat_cells_fork_order() {
        // X on (0,0), (0,2), (1,1) threatens the top row and both diagonals;
        // entries follow the scan order: row, ascending, descending.
        let mut board = Board::new();
        board.place(at(0, 0), Marker::X).unwrap();
        board.place(at(0, 2), Marker::X).unwrap();
        board.place(at(1, 1), Marker::X).unwrap();
        let threats = threat_cells(&board, Marker::X);
        assert_eq!(threats, vec![at(0, 1), at(2, 0), at(2, 2)]);
    }

    #[test]
    fn test_all_lines_order() {
        let lines = all_lines();
        let kinds: Vec<LineKind> = lines.iter().map(|line| line.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row,
                LineKind::Row,
                LineKind::Row,
                LineKind::Column,
                LineKind::Column,
                LineKind::Column,
                LineKind::AscendingDiagonal,
                LineKind::DescendingDiagonal,
            ]
        );
        assert_eq!(lines[0].cells, [at(0, 0), at(0, 1), at(0, 2)]);
        assert_eq!(lines[3].cells, [at(0, 0), at(1, 0), at(2, 0)]);
    }
}
