//! Status invariant: the stored status agrees with the rules.

use super::Invariant;
use crate::game::GameState;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: Status matches what the rules derive from the board.
///
/// `Won(p)` requires the first satisfied line in enumeration order to
/// belong to `p`; `Draw` requires a full board with no satisfied line;
/// `InProgress` requires no satisfied line and at least one empty square.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let winner = rules::check_winner(game.board(), game.topology().lines());
        let full = rules::is_full(game.board());

        match game.status() {
            GameStatus::InProgress => winner.is_none() && !full,
            GameStatus::Won(player) => winner == Some(player),
            GameStatus::Draw => winner.is_none() && full,
        }
    }

    fn description() -> &'static str {
        "Status agrees with win/draw evaluation of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use crate::types::{GameStatus, Player};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameState::new(Topology::default());
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::new(Topology::default());
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).expect("legal move");
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = GameState::new(Topology::default());
        game.place_mark(0).expect("legal move");

        game.status = GameStatus::Won(Player::O);

        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
