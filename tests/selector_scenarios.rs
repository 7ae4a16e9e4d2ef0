//! End-to-end scenarios for the move selector and its branch priorities

use noughts::{Board, Coord, Marker, Searcher};

fn at(row: usize, col: usize) -> Coord {
    Coord::try_new(row, col).unwrap()
}

#[test]
fn empty_board_opens_in_the_center() {
    let mut board = Board::new();
    let searcher = Searcher::new(Marker::X);
    let chosen = searcher.choose(&mut board).unwrap();
    assert_eq!(chosen, at(1, 1));
}

#[test]
fn empty_board_scores_rank_center_over_corners_over_edges() {
    let mut board = Board::new();
    let searcher = Searcher::new(Marker::X);
    searcher.choose(&mut board).unwrap();

    let score = |row, col| board.cell(at(row, col)).score();
    let center = score(1, 1);
    let corners = [score(0, 0), score(0, 2), score(2, 0), score(2, 2)];
    let edges = [score(0, 1), score(1, 0), score(1, 2), score(2, 1)];

    for &corner in &corners {
        assert_eq!(corner, corners[0], "corner scores must agree by symmetry");
        assert!(center > corner);
    }
    for &edge in &edges {
        assert_eq!(edge, edges[0], "edge scores must agree by symmetry");
        assert!(corners[0] > edge);
    }
}

#[test]
fn selector_completes_its_own_row() {
    // X X .        completing the middle row outranks anything else,
    // O O .        so O takes (1, 2)
    // . . .
    let mut board = Board::from_string("XX.OO....").unwrap();
    let searcher = Searcher::new(Marker::O);
    assert_eq!(searcher.choose(&mut board).unwrap(), at(1, 2));
    assert_eq!(board.cell(at(1, 2)).score(), 100_000_000);
}

#[test]
fn selector_takes_the_cell_that_wins_and_blocks() {
    // X . .        (2, 2) completes O's bottom row and is also the only
    // . X .        cell keeping X off the descending diagonal; every
    // O O .        other move loses outright
    let mut board = Board::from_string("X...X.OO.").unwrap();
    let searcher = Searcher::new(Marker::O);
    assert_eq!(searcher.choose(&mut board).unwrap(), at(2, 2));

    for coord in [at(0, 1), at(0, 2), at(1, 0), at(1, 2)] {
        assert_eq!(board.cell(coord).score(), -100_000_000);
    }
    assert_eq!(board.cell(at(2, 2)).score(), 100_000_000);
}

#[test]
fn selector_answers_a_center_opening_with_a_corner() {
    let mut board = Board::from_string("....X....").unwrap();
    let searcher = Searcher::new(Marker::O);
    assert_eq!(searcher.choose(&mut board).unwrap(), at(0, 0));
}

#[test]
fn choose_is_idempotent_on_an_uncommitted_board() {
    let mut board = Board::from_string("X...O...X").unwrap();
    let searcher = Searcher::new(Marker::O);
    let first = searcher.choose(&mut board).unwrap();
    let second = searcher.choose(&mut board).unwrap();
    assert_eq!(first, second);
}

#[test]
fn choose_never_changes_occupancy() {
    let positions = [".........", "X...O....", "XX.OO....", "X...X.OO.", "XOX.O.X.."];
    for position in positions {
        let mut board = Board::from_string(position).unwrap();
        let before: Vec<Option<Marker>> = board.cells().iter().map(|cell| cell.marker()).collect();
        for marker in [Marker::X, Marker::O] {
            Searcher::new(marker).choose(&mut board).unwrap();
            let after: Vec<Option<Marker>> =
                board.cells().iter().map(|cell| cell.marker()).collect();
            assert_eq!(after, before, "occupancy changed for '{position}'");
        }
    }
}
