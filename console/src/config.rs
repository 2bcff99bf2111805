use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::Mark;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
pub const MAX_AUTOPLAY_ROUNDS: u32 = 10_000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    /// Seed for the bot's tie-breaks. A random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print the bot's candidate scores before it moves.
    #[serde(default)]
    pub show_scores: bool,
    /// Games played when both sides are bots.
    #[serde(default = "default_autoplay_rounds")]
    pub autoplay_rounds: u32,
}

fn default_autoplay_rounds() -> u32 {
    10
}

impl ConsoleConfig {
    pub fn player(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
    }

    pub fn is_autoplay(&self) -> bool {
        self.player_x == PlayerKind::Bot && self.player_o == PlayerKind::Bot
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.autoplay_rounds == 0 || self.autoplay_rounds > MAX_AUTOPLAY_ROUNDS {
            return Err(format!(
                "Autoplay rounds must be between 1 and {}, got {}",
                MAX_AUTOPLAY_ROUNDS, self.autoplay_rounds
            ));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Bot,
            seed: None,
            show_scores: false,
            autoplay_rounds: default_autoplay_rounds(),
        }
    }
}
