//! Board state representation and line geometry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player marker. Every occupied cell holds exactly one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Get the opposing marker
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Marker> {
        match c {
            'X' | 'x' => Some(Marker::X),
            'O' | 'o' => Some(Marker::O),
            _ => None,
        }
    }
}

impl FromStr for Marker {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Marker::from_char), chars.next()) {
            (Some(marker), None) => Ok(marker),
            _ => Err(crate::Error::InvalidMarker {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Row/column address of a cell on the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from externally supplied indices.
    ///
    /// # Errors
    ///
    /// Returns error if either index falls outside 0..=2.
    pub fn try_new(row: usize, col: usize) -> Result<Coord, crate::Error> {
        if row >= SIDE || col >= SIDE {
            return Err(crate::Error::CoordOutOfBounds { row, col });
        }
        Ok(Coord { row, col })
    }

    /// Coordinate of the cell at `index` in row-major order
    pub fn from_index(index: usize) -> Coord {
        debug_assert!(index < CELL_COUNT);
        Coord {
            row: index / SIDE,
            col: index % SIDE,
        }
    }

    /// Row-major index of this coordinate
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which of the eight winning lines a triple belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    AscendingDiagonal,
    DescendingDiagonal,
}

/// One of the eight triples of cells that constitute a winning configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub cells: [Coord; 3],
}

/// A completed line found by win detection, with the data the rendering
/// layer needs to draw a strike-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub marker: Marker,
    pub kind: LineKind,
    pub cells: [Coord; 3],
}

/// One cell of the grid: its address, its occupancy, and the scratch slot
/// the move selector writes its last computed score into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    marker: Option<Marker>,
    score: i64,
}

impl Cell {
    fn new(coord: Coord) -> Cell {
        Cell {
            coord,
            marker: None,
            score: 0,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }

    /// Last score the move selector computed for this cell
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Cells per row and column
pub const SIDE: usize = 3;

/// Total cells on the board
pub const CELL_COUNT: usize = SIDE * SIDE;

/// The 3x3 grid. Owns its nine cells in row-major order for the lifetime of
/// a round; cells never move or get reallocated.
///
/// During a search the board is temporarily mutated through [`place`] and
/// [`clear`]; placements must be undone in exact reverse order so that each
/// recursion level observes the state its caller left behind.
///
/// [`place`]: Board::place
/// [`clear`]: Board::clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: std::array::from_fn(|i| Cell::new(Coord::from_index(i))),
        }
    }

    /// Create a board from nine cell characters in row-major order.
    ///
    /// `X`/`x` and `O`/`o` mark cells, `.` leaves them empty; whitespace is
    /// filtered out. The marker counts must be consistent with alternating
    /// play (difference of at most 1).
    ///
    /// # Errors
    ///
    /// Returns error if fewer than nine non-whitespace characters are
    /// present, any character is invalid, or the marker counts could not
    /// arise from alternating play.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::{Board, Coord, Marker};
    ///
    /// let board = Board::from_string("XX.OO....").unwrap();
    /// assert_eq!(board.marker_at(Coord::try_new(0, 1).unwrap()), Some(Marker::X));
    /// assert_eq!(board.empty_cells().len(), 5);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(CELL_COUNT).enumerate() {
            board.cells[i].marker = match c {
                '.' => None,
                _ => Some(Marker::from_char(c).ok_or_else(|| {
                    crate::Error::InvalidCellCharacter {
                        character: c,
                        position: i,
                        context: s.to_string(),
                    }
                })?),
            };
        }

        let x_count = board.count(Marker::X);
        let o_count = board.count(Marker::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidMarkerCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// All nine cells in row-major order, for occupancy queries by the
    /// rendering layer
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    pub fn marker_at(&self, coord: Coord) -> Option<Marker> {
        self.cells[coord.index()].marker
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cells[coord.index()].is_empty()
    }

    /// Number of cells holding `marker`
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker == Some(marker))
            .count()
    }

    /// Place `marker` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if the cell is already occupied. Callers gate on
    /// [`is_empty`]/[`empty_cells`]; the search's backtracking depends on
    /// occupancy reflecting exactly the placements made, so an occupied
    /// target is a contract violation, never a silent overwrite.
    ///
    /// [`is_empty`]: Board::is_empty
    /// [`empty_cells`]: Board::empty_cells
    pub fn place(&mut self, coord: Coord, marker: Marker) -> Result<(), crate::Error> {
        let cell = &mut self.cells[coord.index()];
        if cell.marker.is_some() {
            return Err(crate::Error::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        cell.marker = Some(marker);
        Ok(())
    }

    /// Set a cell back to empty, undoing a simulated placement.
    ///
    /// Recursive callers must clear in exact reverse order of their
    /// placements.
    pub fn clear(&mut self, coord: Coord) {
        self.cells[coord.index()].marker = None;
    }

    pub(crate) fn set_score(&mut self, coord: Coord, score: i64) {
        self.cells[coord.index()].score = score;
    }

    /// Currently-empty cells in row-major order, freshly computed on every
    /// call since occupancy changes between calls within the same search
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.coord)
            .collect()
    }

    /// The three cells forming row `index`, column `index`, or a diagonal
    /// (diagonals ignore `index`)
    pub fn line(&self, kind: LineKind, index: usize) -> [Coord; 3] {
        debug_assert!(index < SIDE);
        crate::lines::line_at(kind, index).cells
    }

    /// The fixed set of eight lines in the stable scan order: rows 0..2,
    /// columns 0..2, ascending diagonal, descending diagonal. This order is
    /// the tie-break order for win detection and threat scans.
    pub fn all_lines(&self) -> [Line; 8] {
        crate::lines::all_lines()
    }

    /// True iff no empty cells remain
    pub fn has_tie(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// First completed line for `marker` in the stable scan order, if any.
    ///
    /// First-match semantics are an observable contract: a board with both a
    /// completed row and a completed diagonal reports the row.
    pub fn has_win(&self, marker: Marker) -> Option<Win> {
        crate::lines::winning_line(self, marker)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.marker.map_or('.', Marker::to_char))?;
            if (i + 1) % SIDE == 0 && i + 1 < CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
