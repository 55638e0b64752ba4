//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and
//! postconditions, formalizing Hoare-style reasoning: {P} action {Q}.

use crate::game::{GameState, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::Square;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must still be in progress.
pub struct GameIsInProgress;

impl GameIsInProgress {
    /// Rejects moves once a terminal status has been reached.
    #[instrument(skip(game), fields(status = %game.status()))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index must be within the current board.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Rejects indices at or beyond the board length.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<(), MoveError> {
        if index >= game.topology().cells() {
            Err(MoveError::OutOfBounds(index))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the index must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects placement on an occupied square.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<(), MoveError> {
        match game.board().get(index) {
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: A move is legal if the game is in progress,
/// the index is in bounds, and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<(), MoveError> {
        GameIsInProgress::check(game)?;
        IndexInBounds::check(index, game)?;
        SquareIsEmpty::check(index, game)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is in progress
/// - Index is in bounds
/// - Square is empty
///
/// Postconditions:
/// - Board stays sized to the topology
/// - Players still alternate and history replays to the board
/// - Status agrees with win/draw evaluation
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use crate::types::Player;

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new(Topology::default());
        assert!(MoveContract::pre(&game, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new(Topology::default());
        game.place_mark(4).expect("legal move");

        assert!(matches!(
            MoveContract::pre(&game, &4),
            Err(MoveError::SquareOccupied(4))
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameState::new(Topology::default());
        assert!(matches!(
            MoveContract::pre(&game, &9),
            Err(MoveError::OutOfBounds(9))
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let mut game = GameState::new(Topology::default());
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).expect("legal move");
        }

        assert!(matches!(
            MoveContract::pre(&game, &8),
            Err(MoveError::GameOver)
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = GameState::new(Topology::default());
        let before = game.clone();
        game.place_mark(4).expect("legal move");

        assert!(MoveContract::post(&before, &game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameState::new(Topology::default());
        let before = game.clone();
        game.place_mark(4).expect("legal move");

        // Corrupt the board behind the state machine's back.
        game.board
            .set(0, crate::types::Square::Occupied(Player::O))
            .expect("in-bounds position");

        assert!(matches!(
            MoveContract::post(&before, &game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
