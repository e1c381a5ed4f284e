use serde::{Deserialize, Serialize};

use super::Validate;

pub const MIN_GRID_SIZE: u32 = 2;
pub const MAX_GRID_SIZE: u32 = 10;
pub const MIN_TARGET_VALUE: u32 = 8;

/// Board settings. Without a `target_value` the game runs until no move is left.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub grid_size: u32,
    #[serde(default)]
    pub target_value: Option<u32>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            ));
        }
        if let Some(target_value) = self.target_value {
            if target_value < MIN_TARGET_VALUE {
                return Err(format!(
                    "Target value must be at least {}, got {}",
                    MIN_TARGET_VALUE, target_value
                ));
            }
            if !target_value.is_power_of_two() {
                return Err(format!(
                    "Target value must be a power of 2, got {}",
                    target_value
                ));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            target_value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_puzzle2048_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_grid_size_bounds() {
        for grid_size in [0, 1, 11] {
            let config = GameConfig {
                grid_size,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err(), "size {} accepted", grid_size);
        }
        let config = GameConfig {
            grid_size: 10,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_value_must_be_power_of_two() {
        let config = GameConfig {
            target_value: Some(1000),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err("Target value must be a power of 2, got 1000".to_string())
        );
    }

    #[test]
    fn test_target_value_too_small() {
        let config = GameConfig {
            target_value: Some(4),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_value_is_optional_in_yaml() {
        let serializer = YamlConfigSerializer;
        let config: GameConfig = serializer.deserialize("grid_size: 5\n").unwrap();
        assert_eq!(
            config,
            GameConfig {
                grid_size: 5,
                target_value: None
            }
        );
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = GameConfig {
            grid_size: 6,
            target_value: Some(4096),
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, GameConfig, _> = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer,
        );

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config));

        let fresh_manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(GameConfig::default()));
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("grid_size: 1\ntarget_value: 2048\n")
            .unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer);
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        let config = GameConfig {
            grid_size: 12,
            target_value: None,
        };
        assert!(manager.set_config(&config).is_err());
    }
}
