use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use reversi::{Board, Color, Move};
use reversi_bot_utils::Agent;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomAgent {
        board: Board::new(),
        rng,
    }
    .run()
}

struct RandomAgent {
    board: Board,
    rng: StdRng,
}

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn new_game(&mut self, _color: Color) {
        self.board.reset();
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn play_move(&mut self, col: i8, row: i8, color: Color) -> bool {
        self.board.apply_move(col, row, color)
    }

    fn next_move(&mut self, board: &Board, _depth: u32, color: Color) -> Move {
        // Uniform over the snapshot's legal moves; pass when there are none.
        board
            .legal_moves(color)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::PASS)
    }
}
