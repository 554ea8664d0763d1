mod board;
mod game_state;
mod types;
mod win_detector;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub use board::Board;
pub use game_state::TicTacToeGameState;
pub use types::{GameStatus, Mark, PlaceError, Placement, Player, Position, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
