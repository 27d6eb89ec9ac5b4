use crate::{evaluate, Board, Color, Move};

/// Picks a move for `color` with a depth-limited adversarial search.
///
/// Returns [`Move::PASS`] when `color` has no legal move. Otherwise the
/// result is always one of the legal moves; at depth 0 the exploration
/// bottoms out before choosing, so the first legal move is returned.
pub fn choose_move(board: &Board, depth: u32, color: Color) -> Move {
    let moves = board.legal_moves(color);
    let Some(&first) = moves.first() else {
        return Move::PASS;
    };
    let (best, _) = explore(board, depth, -1.0, f64::NEG_INFINITY, color, color);
    best.unwrap_or(first)
}

/// One node of the exploration.
///
/// This deliberately reproduces a non-textbook scheme: a single sign flag
/// multiplexes the maximizing and minimizing plies (the root starts at -1),
/// pruning compares against the single bound inherited from the parent, and
/// every leaf is evaluated for `root_color` regardless of whose turn that
/// ply is. Downstream agents depend on the exact move choices this produces,
/// ties included, so none of it may be swapped for standard alpha-beta
/// without a compatibility signoff.
///
/// Each step clones the board once, recurses, and drops the clone; nothing
/// is retained between sibling explorations.
fn explore(
    board: &Board,
    depth: u32,
    sign: f64,
    bound: f64,
    to_move: Color,
    root_color: Color,
) -> (Option<Move>, f64) {
    if depth == 0 || board.is_finished() {
        return (None, f64::from(evaluate(board, root_color)));
    }
    let mut best_value = sign * f64::NEG_INFINITY;
    let mut best_move = None;
    for mv in board.legal_moves(to_move) {
        let mut child = board.clone();
        child.apply_move(mv.col, mv.row, to_move);
        let (_, value) = explore(
            &child,
            depth - 1,
            -sign,
            best_value,
            to_move.opponent(),
            root_color,
        );
        // Tie-or-better: a later move that matches the best value wins.
        if value * sign >= best_value * sign {
            best_value = value;
            best_move = Some(mv);
            if best_value * sign > bound * sign {
                break;
            }
        }
    }
    (best_move, best_value)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachableBoard;
    use crate::Cell;
    use crate::{BOARD_HEIGHT, BOARD_WIDTH};

    /// A position where black has a disc but no legal move: two lone discs
    /// in opposite corners, nothing adjacent to flip.
    fn stalemated_black() -> Board {
        let mut cells = [[Cell::Empty; BOARD_HEIGHT]; BOARD_WIDTH];
        cells[0][0] = Cell::White;
        cells[8][6] = Cell::Black;
        Board::from_cells(cells)
    }

    quickcheck! {
        fn chosen_move_is_legal_or_pass(rb: ReachableBoard, color: Color) -> bool {
            let moves = rb.0.legal_moves(color);
            let chosen = choose_move(&rb.0, 3, color);
            if moves.is_empty() {
                chosen.is_pass()
            } else {
                moves.contains(&chosen)
            }
        }

        fn agrees_with_full_width_scan_at_depth_1(rb: ReachableBoard, color: Color) -> bool {
            // At depth 1 every child is a leaf and the root bound is
            // infinite, so pruning cannot trigger: the search must pick
            // exactly what a plain scan picks. The root sign is -1, so
            // "better" means a lower root-perspective evaluation, with
            // later moves winning ties.
            let moves = rb.0.legal_moves(color);
            let chosen = choose_move(&rb.0, 1, color);
            if moves.is_empty() {
                return chosen.is_pass();
            }
            let mut best_value = f64::INFINITY;
            let mut best_move = moves[0];
            for &mv in &moves {
                let mut child = rb.0.clone();
                child.apply_move(mv.col, mv.row, color);
                let value = f64::from(evaluate(&child, color));
                if value <= best_value {
                    best_value = value;
                    best_move = mv;
                }
            }
            chosen == best_move
        }
    }

    #[test]
    fn depth_zero_still_returns_a_legal_move() {
        let board = Board::new();
        let chosen = choose_move(&board, 0, Color::Black);
        assert!(board.legal_moves(Color::Black).contains(&chosen));
    }

    #[test]
    fn pass_when_no_move_exists() {
        let board = stalemated_black();
        assert!(!board.is_finished());
        assert!(board.legal_moves(Color::Black).is_empty());
        assert_eq!(choose_move(&board, 3, Color::Black), Move::PASS);
    }

    #[test]
    fn terminal_board_passes() {
        // All-black board: white is wiped out, the game is over.
        let cells = [[Cell::Black; BOARD_HEIGHT]; BOARD_WIDTH];
        let board = Board::from_cells(cells);
        assert!(board.is_finished());
        assert_eq!(choose_move(&board, 5, Color::White), Move::PASS);
        assert_eq!(choose_move(&board, 5, Color::Black), Move::PASS);
    }

    #[test]
    fn search_does_not_mutate_the_board() {
        let board = Board::new();
        let before = board.clone();
        choose_move(&board, 4, Color::White);
        assert_eq!(board, before);
    }
}
