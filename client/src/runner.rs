use std::io::{BufRead, Write};

use tictactoe_common::log;
use tictactoe_common::tictactoe::{CELL_COUNT, GameStatus, TicTacToeGameState};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::Config;
use crate::render::render_frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game for one terminal session and feeds it one command at a time.
pub struct GameRunner {
    state: TicTacToeGameState,
    config: Config,
}

impl GameRunner {
    pub fn new(config: Config) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            config,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), String> {
        self.write(output, &render_frame(&self.state, &self.config.board))?;

        for line in input.lines() {
            let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.write(output, &format!("{}\n", e))?;
                    continue;
                }
            };

            if self.handle(command, output)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow, String> {
        match command {
            Command::Place(index) => self.place(index, output)?,
            Command::Reset => {
                self.state.reset();
                if self.config.log_moves {
                    log!("Game reset");
                }
                self.write(output, &render_frame(&self.state, &self.config.board))?;
            }
            Command::Help => self.write(output, &format!("{}\n", HELP_TEXT))?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn place<W: Write>(&mut self, index: usize, output: &mut W) -> Result<(), String> {
        // Clicks on taken cells or after the game ended do nothing.
        if index < CELL_COUNT && !self.state.can_place(index) {
            return Ok(());
        }

        let placement = match self.state.place_mark(index) {
            Ok(Some(placement)) => placement,
            Ok(None) => return Ok(()),
            Err(e) => return self.write(output, &format!("{}\n", e)),
        };

        if self.config.log_moves {
            log!("{} placed at {}", placement.player, placement.index);
            match placement.status {
                GameStatus::WonBy(winner) => log!("Game won by {}", winner),
                GameStatus::Draw => log!("Game ended in a draw"),
                GameStatus::InProgress => {}
            }
        }

        self.write(output, &render_frame(&self.state, &self.config.board))
    }

    fn write<W: Write>(&self, output: &mut W, text: &str) -> Result<(), String> {
        output
            .write_all(text.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
