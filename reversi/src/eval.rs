use crate::{Board, Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT};

/// With 5 or fewer empty cells left, only the disc count matters.
const ENDGAME_THRESHOLD: u32 = CELL_COUNT - 5;

/// Positional weights for discs that are hard to flip back.
///
/// Indexed `[row][col]`, i.e. transposed relative to the board's
/// `(col, row)` indexing. Corners and edges are safe, the ring one step
/// inside them is a liability.
const STABILITY_WEIGHTS: [[i32; BOARD_WIDTH]; BOARD_HEIGHT] = [
    [4, -3, 2, 2, 2, 2, 2, -3, 4],
    [-3, -4, -1, -1, -1, -1, -1, -4, -3],
    [2, -1, 1, 0, 1, 0, 1, -1, 2],
    [2, -1, 0, 1, 0, 1, 0, -1, 2],
    [2, -1, 1, 0, 1, 0, 1, -1, 2],
    [-3, -4, -1, -1, -1, -1, -1, -4, -3],
    [4, -3, 2, 2, 2, 2, 2, -3, 4],
];

/// Corner and edge placement weights, same `[row][col]` indexing as
/// [`STABILITY_WEIGHTS`] but with much larger corner magnitudes.
const CORNER_EDGE_WEIGHTS: [[i32; BOARD_WIDTH]; BOARD_HEIGHT] = [
    [20, -15, 2, 2, 2, 2, 2, -15, 20],
    [-15, -20, 1, 1, 1, 1, 1, -20, -15],
    [2, 1, 1, 1, 1, 1, 1, 1, 2],
    [2, 1, 1, 1, 1, 1, 1, 1, 2],
    [2, 1, 1, 1, 1, 1, 1, 1, 2],
    [-15, -20, 1, 1, 1, 1, 1, -20, -15],
    [20, -15, 2, 2, 2, 2, 2, -15, 20],
];

/// Scores `board` from `color`'s perspective.
///
/// Five positional features, each folded through the same [`dominance`]
/// combinator. In the endgame (58 or more discs placed) everything collapses
/// to the disc count alone; before that, greedily grabbing discs is
/// penalized while mobility and positional control are rewarded.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let tokens = token_differential(board, color);
    let (white, black) = board.score();
    if white + black >= ENDGAME_THRESHOLD {
        return 15 * tokens;
    }
    let stability = pattern_feature(board, color, &STABILITY_WEIGHTS);
    let placement = pattern_feature(board, color, &CORNER_EDGE_WEIGHTS);
    let current_mobility = current_mobility(board, color);
    let potential_mobility = potential_mobility(board, color);
    -3 * tokens
        + 10 * placement
        + 7 * potential_mobility
        + 15 * current_mobility
        + 10 * stability
}

/// The asymmetric feature combinator: the evaluated color's raw value `m` if
/// it is at least the opponent's `n`, otherwise `-n`. Not the same thing as
/// `m - n`.
fn dominance(m: i32, n: i32) -> i32 {
    if m >= n {
        m
    } else {
        -n
    }
}

/// Folds a white-valued and a black-valued raw feature into the score for
/// `color`.
fn oriented(color: Color, white_value: i32, black_value: i32) -> i32 {
    match color {
        Color::White => dominance(white_value, black_value),
        Color::Black => dominance(black_value, white_value),
    }
}

fn token_differential(board: &Board, color: Color) -> i32 {
    let (white, black) = board.score();
    oriented(color, white as i32, black as i32)
}

/// Sums `weights` over each color's discs, then combines for `color`.
fn pattern_feature(
    board: &Board,
    color: Color,
    weights: &[[i32; BOARD_WIDTH]; BOARD_HEIGHT],
) -> i32 {
    let mut white_value = 0;
    let mut black_value = 0;
    for col in 0..BOARD_WIDTH {
        for row in 0..BOARD_HEIGHT {
            match board.cell_at(col, row) {
                Cell::White => white_value += weights[row][col],
                Cell::Black => black_value += weights[row][col],
                Cell::Empty => {}
            }
        }
    }
    oriented(color, white_value, black_value)
}

fn current_mobility(board: &Board, color: Color) -> i32 {
    let white_moves = board.legal_moves(Color::White).len() as i32;
    let black_moves = board.legal_moves(Color::Black).len() as i32;
    oriented(color, white_moves, black_moves)
}

/// Frontier squares: for each color, the number of empty cells orthogonally
/// adjacent to *opponent* discs. Diagonal neighbors do not count.
fn potential_mobility(board: &Board, color: Color) -> i32 {
    let mut white_value = 0;
    let mut black_value = 0;
    for col in 0..BOARD_WIDTH {
        for row in 0..BOARD_HEIGHT {
            match board.cell_at(col, row) {
                // Empty cells next to black discs are white's potential.
                Cell::Black => white_value += adjacent_empty_cells(board, col, row),
                Cell::White => black_value += adjacent_empty_cells(board, col, row),
                Cell::Empty => {}
            }
        }
    }
    oriented(color, white_value, black_value)
}

fn adjacent_empty_cells(board: &Board, col: usize, row: usize) -> i32 {
    let mut count = 0;
    if col > 0 && board.cell_at(col - 1, row) == Cell::Empty {
        count += 1;
    }
    if col + 1 < BOARD_WIDTH && board.cell_at(col + 1, row) == Cell::Empty {
        count += 1;
    }
    if row > 0 && board.cell_at(col, row - 1) == Cell::Empty {
        count += 1;
    }
    if row + 1 < BOARD_HEIGHT && board.cell_at(col, row + 1) == Cell::Empty {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachableBoard;

    quickcheck! {
        fn read_only_queries_are_idempotent(rb: ReachableBoard, color: Color) -> bool {
            evaluate(&rb.0, color) == evaluate(&rb.0, color)
                && rb.0.legal_moves(color) == rb.0.legal_moves(color)
        }
    }

    #[test]
    fn dominance_is_not_a_difference() {
        assert_eq!(dominance(5, 3), 5);
        assert_eq!(dominance(3, 5), -5);
        assert_eq!(dominance(4, 4), 4);
        assert_eq!(dominance(0, 0), 0);
    }

    #[test]
    fn initial_position_feature_mix() {
        // tokens 2 vs 2, placement 2 vs 2, both mobilities 4 vs 4; only
        // stability differs (white 2, black 0), worth ±20 after weighting.
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::White), 122);
        assert_eq!(evaluate(&board, Color::Black), 82);
    }

    #[test]
    fn endgame_counts_discs_only() {
        // 51 white, 7 black, 5 empty cells: 58 discs put us in the endgame.
        let mut cells = [[Cell::White; BOARD_HEIGHT]; BOARD_WIDTH];
        for row in 0..5 {
            cells[0][row] = Cell::Empty;
        }
        for row in 0..BOARD_HEIGHT {
            cells[8][row] = Cell::Black;
        }
        let board = Board::from_cells(cells);
        assert_eq!(board.score(), (51, 7));
        assert_eq!(evaluate(&board, Color::White), 15 * 51);
        assert_eq!(evaluate(&board, Color::Black), 15 * -51);
    }

    #[test]
    fn one_disc_short_of_the_endgame_uses_all_features() {
        // 57 discs placed: still mid-game, so the token term is negative.
        let mut cells = [[Cell::White; BOARD_HEIGHT]; BOARD_WIDTH];
        for row in 0..6 {
            cells[0][row] = Cell::Empty;
        }
        for row in 0..BOARD_HEIGHT {
            cells[8][row] = Cell::Black;
        }
        let board = Board::from_cells(cells);
        assert_eq!(board.score(), (50, 7));
        assert_ne!(evaluate(&board, Color::White), 15 * 50);
    }
}
