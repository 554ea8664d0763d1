use super::board::Board;
use super::types::{Mark, Player, WinningLine};

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|&line| {
        let player = line_owner(board, line)?;
        Some(WinningLine::new(player, line))
    })
}

fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let mark = board.get(a)?;
    if mark == Mark::Empty {
        return None;
    }
    if board.get(b)? != mark || board.get(c)? != mark {
        return None;
    }
    mark.player()
}
