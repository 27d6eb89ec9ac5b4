use serde::{Deserialize, Serialize};

use crate::{Board, Color};

/// Request for an agent to do something.
///
/// Requests arrive as one JSON object per line on the agent's stdin; the
/// response goes to stdout the same way.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Reset the agent's authoritative board for a new match.
    ///
    /// The response should be an [`Okay`].
    NewGame { color: Color },
    /// Ask for the agent's display identity.
    ///
    /// The response should be an [`AgentInfo`].
    Describe,
    /// Ask for the agent's authoritative board and derived scores.
    ///
    /// The response should be a [`BoardState`]. The orchestrator compares
    /// this against its own board after every move to detect a
    /// non-conforming agent.
    GetState,
    /// Ask whether placing `color` at `(col, row)` would be legal on the
    /// agent's board.
    ///
    /// The response should be a plain JSON boolean.
    IsPlayable { col: i8, row: i8, color: Color },
    /// Apply a move to the agent's authoritative board.
    ///
    /// The response should be a plain JSON boolean: whether the move was
    /// applied. `false` means the board was left untouched.
    PlayMove { col: i8, row: i8, color: Color },
    /// Propose a move for `color` on the supplied board snapshot.
    ///
    /// The response should be a [`Move`](crate::Move); `(-1, -1)` when no
    /// move exists. The snapshot is the orchestrator's board, which is why
    /// agents must compute against it rather than their own copy.
    GetMove { board: Board, depth: u32, color: Color },
    /// The agent should shut down.
    Bye,
}

/// Dummy struct for use in agent communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// Display identity of an agent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
}

/// An agent's authoritative board plus the reads derived from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pub board: Board,
    pub white_score: u32,
    pub black_score: u32,
    pub game_over: bool,
}
