mod board_display_config;
mod config;

pub use board_display_config::BoardDisplayConfig;
pub use config::{Config, default_config_path, get_config_manager};
