use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        enabled: bool,
    }

    #[test]
    fn test_yaml_serializer_writes_fields() {
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer
            .serialize(&Sample { name: "board".to_string(), enabled: true })
            .unwrap();
        assert!(yaml.contains("name: board"));
        assert!(yaml.contains("enabled: true"));
    }

    #[test]
    fn test_yaml_serializer_rejects_wrong_type() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("name: board\nenabled: maybe\n");
        let err = result.unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }
}
