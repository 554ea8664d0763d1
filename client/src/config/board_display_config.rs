use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

const RESERVED_SYMBOLS: &[char] = &['X', 'O', '|', '-'];

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardDisplayConfig {
    /// Draw free cells as their index so players know what to type.
    pub show_cell_indices: bool,
    pub empty_cell_symbol: String,
}

impl BoardDisplayConfig {
    pub fn empty_cell_char(&self) -> char {
        self.empty_cell_symbol.chars().next().unwrap_or('.')
    }
}

impl Validate for BoardDisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let mut chars = self.empty_cell_symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(format!(
                    "empty_cell_symbol must be exactly one character, got {:?}",
                    self.empty_cell_symbol
                ));
            }
        };
        if RESERVED_SYMBOLS.contains(&symbol.to_ascii_uppercase()) {
            return Err(format!(
                "empty_cell_symbol {:?} clashes with a mark or the grid",
                symbol
            ));
        }
        Ok(())
    }
}

impl Default for BoardDisplayConfig {
    fn default() -> Self {
        Self {
            show_cell_indices: true,
            empty_cell_symbol: ".".to_string(),
        }
    }
}
