//! Draw detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::is_full;
    use crate::topology::Topology;
    use crate::types::{Board, Player, Square};

    fn is_draw(board: &Board, topology: &Topology) -> bool {
        is_full(board) && check_winner(board, topology.lines()).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::sized(9);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::sized(9);
        board
            .set(4, Square::Occupied(Player::X))
            .expect("in-bounds position");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::sized(9);
        for pos in 0..9 {
            board
                .set(pos, Square::Occupied(Player::X))
                .expect("in-bounds position");
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let topology = Topology::new(3, 3).expect("valid dimensions");
        let mut board = Board::sized(topology.cells());
        // Draw scenario: X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in marks.into_iter().enumerate() {
            board
                .set(pos, Square::Occupied(player))
                .expect("in-bounds position");
        }
        assert!(is_draw(&board, &topology));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let topology = Topology::new(3, 3).expect("valid dimensions");
        let mut board = Board::sized(topology.cells());
        // X wins the top row on a full-enough board.
        for pos in [0, 1, 2] {
            board
                .set(pos, Square::Occupied(Player::X))
                .expect("in-bounds position");
        }
        for pos in [3, 4] {
            board
                .set(pos, Square::Occupied(Player::O))
                .expect("in-bounds position");
        }
        assert!(!is_draw(&board, &topology));
    }
}
