//! Host settings: per-level search budgets and the game's reload duration.

use serde::Deserialize;

/// Search budget for one difficulty level.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LevelLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock budget in milliseconds
    pub time_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Budgets indexed by difficulty level, lowest first
    pub levels: Vec<LevelLimits>,
    /// Shot cooldown applied to new games
    pub reload_turns: u8,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelLimits { depth: 2, time_ms: 3_000 },
                LevelLimits { depth: 3, time_ms: 3_000 },
                LevelLimits { depth: 4, time_ms: 3_000 },
                LevelLimits { depth: 5, time_ms: 5_000 },
                LevelLimits { depth: 7, time_ms: 30_000 },
            ],
            reload_turns: 1,
        }
    }
}

impl HostConfig {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let config: HostConfig =
            toml::from_str(text).map_err(|e| format!("Failed to parse config: {}", e))?;
        if config.levels.is_empty() {
            return Err("Config must define at least one level".to_string());
        }
        if config.reload_turns == 0 {
            return Err("reload_turns must be positive".to_string());
        }
        Ok(config)
    }

    /// Budget for a 1-based difficulty level, clamped to the defined range.
    pub fn limits_for(&self, level: u8) -> LevelLimits {
        let idx = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        self.levels[idx]
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
