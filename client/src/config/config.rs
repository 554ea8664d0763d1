use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::BoardDisplayConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board: BoardDisplayConfig,
    #[serde(default = "default_log_moves")]
    pub log_moves: bool,
}

fn default_log_moves() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardDisplayConfig::default(),
            log_moves: default_log_moves(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_log_moves_defaults_when_missing() {
        let serializer = YamlConfigSerializer::new();
        let yaml = "board:\n  show_cell_indices: false\n  empty_cell_symbol: '_'\n";
        let config: Config = serializer.deserialize(yaml).unwrap();
        assert!(config.log_moves);
        assert!(!config.board.show_cell_indices);
        assert_eq!(config.board.empty_cell_symbol, "_");
    }

    #[test]
    fn test_manager_reads_missing_file_as_default() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_manager_saves_and_reloads_file() {
        let file_path = get_temp_file_path();
        let config = Config {
            board: BoardDisplayConfig {
                show_cell_indices: false,
                empty_cell_symbol: "#".to_string(),
            },
            log_moves: false,
        };

        get_config_manager(&file_path).set_config(&config).unwrap();
        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(reloaded, config);

        let raw = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(raw.contains("log_moves: false"));
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("board:\n  show_cell_indices: true\n  empty_cell_symbol: X\n")
            .unwrap();

        let err = get_config_manager(&file_path).get_config().unwrap_err();
        assert!(err.contains("clashes"), "{}", err);
        std::fs::remove_file(file_path).unwrap();
    }
}
