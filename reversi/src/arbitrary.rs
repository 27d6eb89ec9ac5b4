use quickcheck::{Arbitrary, Gen};

use crate::{Board, Color};

/// A board reachable from the starting position by legal alternating play.
///
/// Generated by playing a random number of random legal moves, so the grids
/// exercised by the properties are ones a real match can produce.
#[derive(Clone, Debug)]
pub struct ReachableBoard(pub Board);

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        let mut to_move = Color::Black;
        let mut consecutive_passes = 0;
        let plies = usize::arbitrary(g) % 48;
        for _ in 0..plies {
            if board.is_finished() || consecutive_passes >= 2 {
                break;
            }
            let moves = board.legal_moves(to_move);
            if let Some(&mv) = g.choose(&moves) {
                board.apply_move(mv.col, mv.row, to_move);
                consecutive_passes = 0;
            } else {
                consecutive_passes += 1;
            }
            to_move = to_move.opponent();
        }
        ReachableBoard(board)
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Color::White, Color::Black]).unwrap()
    }
}
