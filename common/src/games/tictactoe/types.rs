use std::fmt;

use super::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// State of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.player() {
            Some(player) => write!(f, "{}", player),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    WonBy(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Line shown under the board. `current_player` is only used while the
    /// game is in progress.
    pub fn status_text(&self, current_player: Player) -> String {
        match self {
            GameStatus::InProgress => format!("{}'s turn", current_player),
            GameStatus::WonBy(winner) => format!("{} Wins.", winner),
            GameStatus::Draw => "It's a draw.".to_string(),
        }
    }
}

/// Column/row view of a cell index, `x` grows to the right and `y` downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        Some(Self::new(index % BOARD_SIZE, index / BOARD_SIZE))
    }

    pub fn index(&self) -> usize {
        self.y * BOARD_SIZE + self.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] % BOARD_SIZE, self.cells[0] / BOARD_SIZE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] % BOARD_SIZE, self.cells[2] / BOARD_SIZE)
    }
}

/// Result of a placement the engine accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub player: Player,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    IndexOutOfRange(usize),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::IndexOutOfRange(index) => write!(
                f,
                "Cell index {} is out of range (0-{})",
                index,
                BOARD_SIZE * BOARD_SIZE - 1
            ),
        }
    }
}

impl std::error::Error for PlaceError {}
