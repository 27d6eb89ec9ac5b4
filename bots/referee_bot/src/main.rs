use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use reversi::{render_board, Board, Color, Move};
use reversi_bot_utils::Agent;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    Referee {
        board: Board::new(),
        rng,
    }
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// The rules engine as a participant: it keeps the authoritative
/// board, validates every placement, and when asked for a move proposes a
/// random legal one.
struct Referee {
    board: Board,
    rng: StdRng,
}

impl Agent for Referee {
    fn name(&self) -> String {
        "Referee".to_string()
    }

    fn new_game(&mut self, _color: Color) {
        self.board.reset();
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn play_move(&mut self, col: i8, row: i8, color: Color) -> bool {
        let applied = self.board.apply_move(col, row, color);
        if applied {
            debug!("\n{}", render_board(&self.board));
        }
        applied
    }

    fn next_move(&mut self, board: &Board, _depth: u32, color: Color) -> Move {
        board
            .legal_moves(color)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::PASS)
    }
}
