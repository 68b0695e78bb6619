//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    EnumString,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, played by the computer in [`Mode::VsComputer`]).
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

/// A square on the tic-tac-toe board.
///
/// Serializes as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark as shown on screen (empty string for [`Square::Empty`]).
    pub fn mark(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.mark().to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            "" => Ok(Square::Empty),
            "X" | "x" => Ok(Square::Occupied(Player::X)),
            "O" | "o" => Ok(Square::Occupied(Player::O)),
            _ => Err(SquareParseError { value }),
        }
    }
}

/// A square string was not one of `""`, `"X"`, `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid square {:?}, expected \"\", \"X\" or \"O\"", value)]
pub struct SquareParseError {
    /// The rejected input.
    pub value: String,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    ///
    /// Callers guarantee `pos < 9`.
    pub(crate) fn set(&mut self, pos: usize, square: Square) {
        self.squares[pos] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indexes of empty squares in increasing order.
    pub fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    occupied => result.push_str(occupied.mark()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
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
    /// True once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Status line shown to the players.
    pub fn message(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "two-player", serialize = "twoPlayer")]
    TwoPlayer,
    /// The computer answers every human move as O.
    #[strum(to_string = "vs-computer", serialize = "vsAI")]
    VsComputer,
}

impl Mode {
    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two players",
            Mode::VsComputer => "Versus computer",
        }
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::TwoPlayer => Mode::VsComputer,
            Mode::VsComputer => Mode::TwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        board.set(4, Square::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_squares_in_order() {
        let mut board = Board::new();
        board.set(1, Square::Occupied(Player::X));
        board.set(5, Square::Occupied(Player::O));
        let empty: Vec<_> = board.empty_squares().collect();
        assert_eq!(empty, vec![0, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::InProgress.message(), "");
        assert_eq!(GameStatus::Won(Player::X).message(), "X wins!");
        assert_eq!(GameStatus::Won(Player::O).message(), "O wins!");
        assert_eq!(GameStatus::Draw.message(), "It's a draw!");
    }

    #[test]
    fn test_mode_parsing_accepts_legacy_names() {
        assert_eq!(Mode::from_str("two-player"), Ok(Mode::TwoPlayer));
        assert_eq!(Mode::from_str("vs-computer"), Ok(Mode::VsComputer));
        assert_eq!(Mode::from_str("twoPlayer"), Ok(Mode::TwoPlayer));
        assert_eq!(Mode::from_str("vsAI"), Ok(Mode::VsComputer));
        assert!(Mode::from_str("hard").is_err());
        assert_eq!(Mode::VsComputer.to_string(), "vs-computer");
    }

    #[test]
    fn test_square_parse_rejects_garbage() {
        assert!(Square::try_from("Z".to_string()).is_err());
        assert_eq!(Square::try_from("o".to_string()), Ok(Square::Occupied(Player::O)));
    }
}
