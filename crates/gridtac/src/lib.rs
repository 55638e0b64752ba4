//! Pure tic-tac-toe game logic on a growable grid.
//!
//! The crate owns the game state machine: turn alternation, win/draw
//! evaluation over a derived set of winning lines, and the invariants
//! that keep board, turn, and status consistent. Rendering and input
//! wiring belong to a presentation layer that calls in and observes the
//! returned [`GameStatus`] values.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`GameStatus`]
//! - **Topology**: grid dimensions plus the derived winning-line set,
//!   regenerated on every growth step
//! - **Game**: the mutable [`GameState`] handle driving moves and resets
//! - **Rules**: pure win/draw evaluation
//! - **Invariants & contracts**: first-class properties checked in
//!   debug builds after every successful move
//!
//! # Example
//!
//! ```
//! use gridtac::{GameState, GameStatus, Player, Topology};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameState::new(Topology::new(3, 3)?);
//!
//! // X takes the top row while O answers in the middle row.
//! for index in [0, 3, 1, 4, 2] {
//!     game.place_mark(index)?;
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod game;
mod invariants;
mod rules;
mod topology;
mod types;

pub use contracts::{Contract, GameIsInProgress, IndexInBounds, LegalMove, MoveContract, SquareIsEmpty};
pub use game::{GameState, MoveError};
pub use invariants::{
    AlternatingTurnInvariant, BoardSizedInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, StatusConsistentInvariant,
};
pub use rules::{check_winner, is_full};
pub use topology::{DEFAULT_RUN_LENGTH, Line, LineKind, Topology, TopologyError};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity in presentation-layer code.
pub type Mark = Player;
