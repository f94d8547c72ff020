//! Engine configuration loaded from the environment.
//!
//! Supported environment variables:
//! - `ARENA_MAX_ROUNDS`: round cap before a battle is declared a stalemate (>= 1)
//! - `ARENA_SEED`: base seed for reproducible fights; unset means system entropy

use arena_domain::combat::DEFAULT_MAX_ROUNDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    pub max_rounds: u32,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Invalid values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("ARENA_MAX_ROUNDS") {
            match val.trim().parse::<u32>() {
                Ok(rounds) if rounds >= 1 => {
                    config.max_rounds = rounds;
                    tracing::info!(rounds, "Applied ARENA_MAX_ROUNDS environment variable");
                }
                Ok(rounds) => {
                    tracing::warn!(rounds, "ARENA_MAX_ROUNDS must be at least 1, ignoring");
                }
                Err(_) => {
                    tracing::warn!(val = %val, "ARENA_MAX_ROUNDS is not a valid u32, ignoring");
                }
            }
        }

        if let Some(val) = lookup("ARENA_SEED") {
            match val.trim().parse::<u64>() {
                Ok(seed) => {
                    config.seed = Some(seed);
                    tracing::info!(seed, "Applied ARENA_SEED environment variable");
                }
                Err(_) => {
                    tracing::warn!(val = %val, "ARENA_SEED is not a valid u64, ignoring");
                }
            }
        }

        config
    }
}
