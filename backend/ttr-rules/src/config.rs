use serde::{Deserialize, Serialize};

/// Rules that vary between games, fixed at game start.
///
/// Missing fields take their default value when parsed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// How many train cards each player is dealt.
    pub starting_hand_size: usize,
    /// How many destinations each player is dealt.
    pub destinations_per_player: usize,
}

impl GameConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::config::GameConfig;
    ///
    /// let config = GameConfig::from_json_str(r#"{"starting_hand_size": 4}"#).unwrap();
    ///
    /// assert_eq!(config.starting_hand_size, 4);
    /// assert_eq!(config.destinations_per_player, 3);
    /// ```
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 5,
            destinations_per_player: 3,
        }
    }
}
