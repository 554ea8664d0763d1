use tictactoe_common::tictactoe::{BOARD_SIZE, Mark, TicTacToeGameState};

use crate::config::BoardDisplayConfig;

pub fn render_board(state: &TicTacToeGameState, display: &BoardDisplayConfig) -> String {
    let cells = state.board().cells();
    let rows: Vec<String> = cells
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &mark)| cell_symbol(y * BOARD_SIZE + x, mark, display))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n-+-+-\n")
}

fn cell_symbol(index: usize, mark: Mark, display: &BoardDisplayConfig) -> String {
    match mark {
        Mark::Empty if display.show_cell_indices => index.to_string(),
        Mark::Empty => display.empty_cell_char().to_string(),
        _ => mark.to_string(),
    }
}

/// Board followed by the status line.
pub fn render_frame(state: &TicTacToeGameState, display: &BoardDisplayConfig) -> String {
    format!("{}\n{}\n", render_board(state, display), state.status_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_display() -> BoardDisplayConfig {
        BoardDisplayConfig {
            show_cell_indices: false,
            empty_cell_symbol: ".".to_string(),
        }
    }

    #[test]
    fn test_render_empty_board_with_indices() {
        let state = TicTacToeGameState::new();
        assert_eq!(
            render_board(&state, &BoardDisplayConfig::default()),
            "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8"
        );
    }

    #[test]
    fn test_render_marks_with_symbol() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(0).unwrap();
        state.place_mark(4).unwrap();
        assert_eq!(
            render_board(&state, &plain_display()),
            "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|."
        );
    }

    #[test]
    fn test_render_frame_includes_status() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(8).unwrap();
        let frame = render_frame(&state, &plain_display());
        assert!(frame.ends_with("-+-+-\n.|.|X\nO's turn\n"), "{}", frame);
    }
}
