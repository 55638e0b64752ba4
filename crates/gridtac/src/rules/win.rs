//! Win detection logic.

use crate::topology::Line;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in the topology's enumeration order and the first
/// fully occupied line decides the winner. Indices outside the board
/// never match.
#[instrument(skip(board, lines))]
pub fn check_winner(board: &Board, lines: &[Line]) -> Option<Player> {
    for line in lines {
        let mut marks = line
            .cells()
            .iter()
            .map(|&pos| board.get(pos).unwrap_or(Square::Empty));
        let Some(Square::Occupied(player)) = marks.next() else {
            continue;
        };
        if marks.all(|square| square == Square::Occupied(player)) {
            return Some(player);
        }
    }
    None
}
