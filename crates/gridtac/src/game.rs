//! Game state machine: turn alternation and terminal-status evaluation.

use crate::contracts::{Contract, MoveContract};
use crate::rules;
use crate::topology::Topology;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when placing a mark.
///
/// Every rejected move leaves the game state unchanged; the caller may
/// re-prompt and try again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the current board.
    #[display("Index {_0} is outside the board")]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Complete game state: board, turn, status, and move history.
///
/// One instance belongs to exactly one caller context (a session); a
/// multi-session deployment instantiates one independent state per
/// session. All operations run to completion synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) topology: Topology,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<usize>,
}

impl GameState {
    /// Creates a fresh game on the given topology: all squares empty,
    /// X to move, status in progress.
    #[instrument(skip(topology), fields(rows = topology.rows(), columns = topology.columns()))]
    pub fn new(topology: Topology) -> Self {
        let board = Board::sized(topology.cells());
        Self {
            topology,
            board,
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    ///
    /// The turn freezes once the game leaves the in-progress status.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status. Side-effect free.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the topology the game is played on.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the move history (indices in play order).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the indices of all empty squares.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Places the current player's mark at the given index.
    ///
    /// On success the terminal status is re-evaluated (win scan in line
    /// enumeration order, then draw when no empty square remains) and
    /// the turn alternates only while the game stays in progress. The
    /// resulting status is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::OutOfBounds`], or
    /// [`MoveError::SquareOccupied`] without changing any state.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        MoveContract::pre(self, &index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board
            .set(index, Square::Occupied(self.to_move))
            .map_err(|_| MoveError::OutOfBounds(index))?;
        self.history.push(index);

        if let Some(winner) = rules::check_winner(&self.board, self.topology.lines()) {
            debug!(?winner, "winning line completed");
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("board full with no winner");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.status)
    }

    /// Reinitializes the game on the current topology: all squares
    /// empty, X to move, status in progress, history cleared.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::sized(self.topology.cells());
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Replaces the topology and resets the game.
    ///
    /// The board must always match the topology's dimensions, so a
    /// topology change discards the in-progress game.
    #[instrument(skip(self, topology), fields(rows = topology.rows(), columns = topology.columns()))]
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
        self.reset();
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => {
                format!("In progress. Player {:?} to move.", self.to_move)
            }
            GameStatus::Won(winner) => format!("Game over. Player {:?} wins!", winner),
            GameStatus::Draw => "Game over. Draw!".to_string(),
        }
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        self.board.display(self.topology.columns())
    }
}

impl Default for GameState {
    /// Fresh game on the classic 3×3 topology.
    fn default() -> Self {
        Self::new(Topology::default())
    }
}
