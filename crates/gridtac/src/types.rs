//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Game board with row-major square storage.
///
/// The square count always equals rows × columns of the topology the
/// board was sized for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given square count.
    pub fn sized(cells: usize) -> Self {
        Self {
            squares: vec![Square::Empty; cells],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        match self.squares.get_mut(pos) {
            Some(slot) => {
                *slot = square;
                Ok(())
            }
            None => Err("Position out of bounds"),
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Positions of all empty squares, in board order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Formats the board as a human-readable string with the given
    /// column count. Empty squares show their one-based position.
    pub fn display(&self, columns: usize) -> String {
        if columns == 0 {
            return String::new();
        }
        let separator = vec!["-"; columns].join("+");
        let mut result = String::new();
        for (row, squares) in self.squares.chunks(columns).enumerate() {
            if row > 0 {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
            let rendered: Vec<String> = squares
                .iter()
                .enumerate()
                .map(|(offset, square)| match square {
                    Square::Empty => (row * columns + offset + 1).to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                })
                .collect();
            result.push_str(&rendered.join("|"));
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {:?} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
