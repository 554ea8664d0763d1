use super::board::Board;
use super::types::{GameStatus, Mark, PlaceError, Placement, Player, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// A single 3x3 game. Placements on occupied cells or after the game ended
/// are ignored rather than reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn can_place(&self, index: usize) -> bool {
        self.status == GameStatus::InProgress && self.board.is_empty(index)
    }

    /// Marks `index` for the player to move.
    ///
    /// Returns `Ok(None)` without touching the state when the cell is taken
    /// or the game is over. Only an index outside the board is an error.
    pub fn place_mark(&mut self, index: usize) -> Result<Option<Placement>, PlaceError> {
        let position = Position::from_index(index).ok_or(PlaceError::IndexOutOfRange(index))?;

        if !self.can_place(index) {
            return Ok(None);
        }

        let player = self.current_player;
        self.board.set(index, Mark::from(player));
        self.last_move = Some(position);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(Some(Placement {
            index,
            player,
            status: self.status,
        }))
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = GameStatus::WonBy(line.player);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::WonBy(player) => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn available_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board.available_moves()
    }

    pub fn move_count(&self) -> usize {
        self.board
            .cells()
            .iter()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn status_text(&self) -> String {
        self.status.status_text(self.current_player)
    }
}
