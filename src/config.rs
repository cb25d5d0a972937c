//! Engine settings.

use strum_macros::{Display, EnumIter, EnumString};

use crate::model::Dimensions;

/// When a move is followed by a spawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SpawnPolicy {
    /// Spawn after every move, including moves that changed nothing.
    #[default]
    Always,
    /// Spawn only when at least one tile moved or merged.
    OnChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub cols: usize,
    pub rows: usize,
    /// Tiles placed by [`MergeEngine::new_tile_set`](crate::MergeEngine::new_tile_set).
    pub initial_tiles: usize,
    pub spawn_per_move: usize,
    pub spawn_value: u32,
    pub spawn_policy: SpawnPolicy,
}

pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_ROWS: usize = 4;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            initial_tiles: 3,
            spawn_per_move: 1,
            spawn_value: 2,
            spawn_policy: SpawnPolicy::Always,
        }
    }
}

impl EngineConfig {
    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.cols, self.rows)
    }

    pub fn with_dims(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    pub fn with_spawn_per_move(mut self, count: usize) -> Self {
        self.spawn_per_move = count;
        self
    }

    pub fn with_spawn_value(mut self, value: u32) -> Self {
        self.spawn_value = value;
        self
    }

    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.dims(), Dimensions::new(5, 4));
        assert_eq!(config.initial_tiles, 3);
        assert_eq!(config.spawn_per_move, 1);
        assert_eq!(config.spawn_value, 2);
        assert_eq!(config.spawn_policy, SpawnPolicy::Always);
    }

    #[test]
    fn policy_names() {
        for policy in SpawnPolicy::iter() {
            assert_eq!(SpawnPolicy::from_str(&policy.to_string()), Ok(policy));
        }
        assert_eq!(SpawnPolicy::OnChange.to_string(), "on-change");
    }
}
