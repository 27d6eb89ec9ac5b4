use serde::{Deserialize, Serialize};

use crate::BoardFormatError;

pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 7;

/// Number of cells on the board. A position with this many discs is full.
pub const CELL_COUNT: u32 = (BOARD_WIDTH * BOARD_HEIGHT) as u32;

/// All 8 capture directions as `(d_col, d_row)` steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// State of a single cell.
///
/// The wire encoding is `-1`/`0`/`1` for empty/white/black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    pub fn to_i8(self) -> i8 {
        match self {
            Cell::Empty => -1,
            Cell::White => 0,
            Cell::Black => 1,
        }
    }

    pub fn from_i8(value: i8) -> Option<Cell> {
        match value {
            -1 => Some(Cell::Empty),
            0 => Some(Cell::White),
            1 => Some(Cell::Black),
            _ => None,
        }
    }
}

/// The two disc colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The cell state a disc of this color produces.
    pub fn cell(self) -> Cell {
        match self {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

/// A placement at `(col, row)`, or [`Move::PASS`] when the mover has no
/// legal placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub col: i8,
    pub row: i8,
}

impl Move {
    /// The reserved "no placement possible" sentinel.
    pub const PASS: Move = Move { col: -1, row: -1 };

    pub fn new(col: i8, row: i8) -> Move {
        Move { col, row }
    }

    pub fn is_pass(self) -> bool {
        self == Move::PASS
    }

    /// Human-readable form: column letter plus 1-based row, e.g. `G3`.
    pub fn notation(self) -> String {
        if self.is_pass() {
            "pass".to_string()
        } else {
            format!("{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        }
    }
}

/// A 9×7 Reversi board with cached scores and termination flag.
///
/// The cached data is recomputed from the grid after every accepted move, so
/// the scores and the `finished` flag never drift from the cells.
///
/// Serializes as a grid of `-1`/`0`/`1` integers, columns outer, rows inner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i8>>", into = "Vec<Vec<i8>>")]
pub struct Board {
    /// Indexed `[col][row]`.
    cells: [[Cell; BOARD_HEIGHT]; BOARD_WIDTH],
    white_score: u32,
    black_score: u32,
    finished: bool,
}

impl Board {
    /// The starting position: white at (3,3) and (4,4), black at (3,4) and (4,3).
    pub fn new() -> Board {
        let mut cells = [[Cell::Empty; BOARD_HEIGHT]; BOARD_WIDTH];
        cells[3][3] = Cell::White;
        cells[4][4] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        Board::from_cells(cells)
    }

    /// Builds a board from raw cells, deriving scores and termination.
    pub fn from_cells(cells: [[Cell; BOARD_HEIGHT]; BOARD_WIDTH]) -> Board {
        let mut board = Board {
            cells,
            white_score: 0,
            black_score: 0,
            finished: false,
        };
        board.recompute_score();
        board
    }

    /// Puts the board back into the starting position for a new match.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    pub fn score(&self) -> (u32, u32) {
        (self.white_score, self.black_score)
    }

    pub fn white_score(&self) -> u32 {
        self.white_score
    }

    pub fn black_score(&self) -> u32 {
        self.black_score
    }

    /// True when one color is wiped out or the board is full.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn in_bounds(col: i8, row: i8) -> bool {
        (0..BOARD_WIDTH as i8).contains(&col) && (0..BOARD_HEIGHT as i8).contains(&row)
    }

    /// Whether placing a `color` disc at `(col, row)` is legal.
    ///
    /// Out-of-range coordinates and occupied cells are simply not legal;
    /// there is no error channel here.
    pub fn is_legal(&self, col: i8, row: i8, color: Color) -> bool {
        if !Board::in_bounds(col, row) {
            return false;
        }
        if self.cells[col as usize][row as usize] != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(d_col, d_row)| self.capture_run(col, row, color, d_col, d_row).is_some())
    }

    /// Length of the opponent run that placing at `(col, row)` would capture
    /// in one direction, if that direction qualifies.
    ///
    /// A direction qualifies when the immediate neighbor holds the opponent
    /// color and the run is terminated by an own-color disc. An empty cell or
    /// the board edge ends the scan with no capture.
    fn capture_run(&self, col: i8, row: i8, color: Color, d_col: i8, d_row: i8) -> Option<usize> {
        let own = color.cell();
        let opponent = color.opponent().cell();
        let mut c = col + d_col;
        let mut r = row + d_row;
        if !Board::in_bounds(c, r) || self.cells[c as usize][r as usize] != opponent {
            return None;
        }
        let mut run = 1;
        loop {
            c += d_col;
            r += d_row;
            if !Board::in_bounds(c, r) {
                return None;
            }
            let cell = self.cells[c as usize][r as usize];
            if cell == own {
                return Some(run);
            } else if cell == opponent {
                run += 1;
            } else {
                return None;
            }
        }
    }

    /// Places a `color` disc at `(col, row)` and flips every captured run.
    ///
    /// Returns `false` and leaves the board untouched if the placement is out
    /// of range or illegal. The capture directions are all determined on the
    /// pristine board before any cell is written, so flips from one direction
    /// can never feed a later direction's scan.
    pub fn apply_move(&mut self, col: i8, row: i8, color: Color) -> bool {
        if !self.is_legal(col, row, color) {
            return false;
        }
        let own = color.cell();
        let runs: Vec<(i8, i8, usize)> = DIRECTIONS
            .iter()
            .filter_map(|&(d_col, d_row)| {
                self.capture_run(col, row, color, d_col, d_row)
                    .map(|run| (d_col, d_row, run))
            })
            .collect();

        self.cells[col as usize][row as usize] = own;
        for (d_col, d_row, run) in runs {
            for step in 1..=run as i8 {
                let c = (col + d_col * step) as usize;
                let r = (row + d_row * step) as usize;
                self.cells[c][r] = own;
            }
        }
        self.recompute_score();
        true
    }

    /// All legal placements for `color`, columns outer, rows inner.
    ///
    /// The ordering is stable and callers rely on it: random agents break
    /// ties by index and the search visits moves in this order. No legal
    /// placement yields an empty vector; translating that into a pass is the
    /// caller's job.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for col in 0..BOARD_WIDTH as i8 {
            for row in 0..BOARD_HEIGHT as i8 {
                if self.is_legal(col, row, color) {
                    moves.push(Move::new(col, row));
                }
            }
        }
        moves
    }

    fn recompute_score(&mut self) {
        self.white_score = 0;
        self.black_score = 0;
        for col in self.cells.iter() {
            for cell in col.iter() {
                match cell {
                    Cell::White => self.white_score += 1,
                    Cell::Black => self.black_score += 1,
                    Cell::Empty => {}
                }
            }
        }
        self.finished = self.white_score == 0
            || self.black_score == 0
            || self.white_score + self.black_score == CELL_COUNT;
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Vec<Vec<i8>> {
        board
            .cells
            .iter()
            .map(|col| col.iter().map(|cell| cell.to_i8()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = BoardFormatError;

    fn try_from(grid: Vec<Vec<i8>>) -> Result<Board, BoardFormatError> {
        if grid.len() != BOARD_WIDTH || grid.iter().any(|col| col.len() != BOARD_HEIGHT) {
            return Err(BoardFormatError::WrongDimensions {
                cols: grid.len(),
                rows: grid.first().map(Vec::len).unwrap_or(0),
            });
        }
        let mut cells = [[Cell::Empty; BOARD_HEIGHT]; BOARD_WIDTH];
        for (col, values) in grid.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                cells[col][row] =
                    Cell::from_i8(value).ok_or(BoardFormatError::InvalidCellValue {
                        col,
                        row,
                        value,
                    })?;
            }
        }
        Ok(Board::from_cells(cells))
    }
}
