//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::GameState;
use crate::types::{Board, GameStatus, Player, Square};

/// Invariant: Players alternate turns.
///
/// Replaying the move history with X first must reproduce the current
/// board without overwriting any square, and while the game is in
/// progress the player to move must match the history parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::sized(game.topology().cells());
        let mut player = Player::X;

        for &pos in game.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            if reconstructed.set(pos, Square::Occupied(player)).is_err() {
                return false;
            }
            player = player.opponent();
        }

        if reconstructed != *game.board() {
            return false;
        }

        // Once the game is over the turn freezes, so parity only binds
        // while in progress.
        match game.status() {
            GameStatus::InProgress => game.to_move() == player,
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...) and history replays to the board"
    }
}
