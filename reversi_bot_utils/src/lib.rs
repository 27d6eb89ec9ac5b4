use reversi::{AgentInfo, Board, BoardState, Color, Move, Okay, Request};

/// A trait to simplify writing agents.
///
/// Every participant in a match implements this one capability set: report
/// identity, scores and board, answer legality queries, accept moves into
/// its own authoritative board, and propose a move for an externally
/// supplied board snapshot. There is no shared base state; the referee's
/// rules engine, the search agent and the random agent are peers.
pub trait Agent {
    /// Display identity.
    fn name(&self) -> String;

    /// Reset the authoritative board for a new match.
    fn new_game(&mut self, color: Color);

    /// The agent's own authoritative board.
    fn board(&self) -> &Board;

    /// Apply a move to the authoritative board. Returns `false` and leaves
    /// the board untouched when the move is illegal; the orchestrator treats
    /// a rejected move from the opponent as a protocol violation, not the
    /// agent.
    fn play_move(&mut self, col: i8, row: i8, color: Color) -> bool;

    /// Propose a move for `color` on `board`.
    ///
    /// `board` is the orchestrator's snapshot, not necessarily this agent's
    /// own board. Implementations must compute against the snapshot so the
    /// two can never desynchronize.
    fn next_move(&mut self, board: &Board, depth: u32, color: Color) -> Move;

    fn is_playable(&self, col: i8, row: i8, color: Color) -> bool {
        self.board().is_legal(col, row, color)
    }

    fn white_score(&self) -> u32 {
        self.board().white_score()
    }

    fn black_score(&self) -> u32 {
        self.board().black_score()
    }

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the orchestrator has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { color } => {
                    self.new_game(color);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::Describe => {
                    serde_json::to_writer(&mut stdout, &AgentInfo { name: self.name() })?
                }
                Request::GetState => serde_json::to_writer(
                    &mut stdout,
                    &BoardState {
                        board: self.board().clone(),
                        white_score: self.white_score(),
                        black_score: self.black_score(),
                        game_over: self.board().is_finished(),
                    },
                )?,
                Request::IsPlayable { col, row, color } => {
                    serde_json::to_writer(&mut stdout, &self.is_playable(col, row, color))?
                }
                Request::PlayMove { col, row, color } => {
                    serde_json::to_writer(&mut stdout, &self.play_move(col, row, color))?
                }
                Request::GetMove { board, depth, color } => {
                    serde_json::to_writer(&mut stdout, &self.next_move(&board, depth, color))?
                }
                Request::Bye => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
}
