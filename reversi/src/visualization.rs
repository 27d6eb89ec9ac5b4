use crate::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Renders a board for match logs: a score line,
/// lettered columns, numbered rows, `-`/`O`/`X` cells.
pub fn render_board(board: &Board) -> String {
    let mut result = format!(
        "BLACK [X]: {}\tWHITE [O]: {}\n ",
        board.black_score(),
        board.white_score()
    );
    for col in 0..BOARD_WIDTH {
        result.push(' ');
        result.push((b'A' + col as u8) as char);
    }
    result.push('\n');
    for row in 0..BOARD_HEIGHT {
        result += &format!("{}", row + 1);
        for col in 0..BOARD_WIDTH {
            result += match board.cell_at(col, row) {
                Cell::Empty => " -",
                Cell::White => " O",
                Cell::Black => " X",
            };
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_initial_position() {
        let rendered = render_board(&Board::new());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "BLACK [X]: 2\tWHITE [O]: 2");
        assert_eq!(lines[1], "  A B C D E F G H I");
        // Row 4 (0-indexed row 3) holds white at column D and black at E.
        assert_eq!(lines[5], "4 - - - O X - - - -");
        assert_eq!(lines[6], "5 - - - X O - - - -");
    }
}
