use clap::Parser;
use reversi::{choose_move, Board, Color, Move};
use reversi_bot_utils::Agent;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    MinimaxAgent {
        board: Board::new(),
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

struct MinimaxAgent {
    board: Board,
}

impl Agent for MinimaxAgent {
    fn name(&self) -> String {
        "Minimax".to_string()
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

    fn next_move(&mut self, board: &Board, depth: u32, color: Color) -> Move {
        let mv = choose_move(board, depth, color);
        debug!(chosen = %mv.notation(), depth, "searched");
        mv
    }
}
