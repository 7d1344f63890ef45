//! Demo configuration read from the environment.

use std::env;

use animeclash_core::arena::ArenaConfig;

/// Settings for the scripted demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for the random picks.
    pub seed: u64,
    /// Health a fighter must exceed to appear in the filter line.
    pub health_threshold: u32,
    /// Arena settings.
    pub arena: ArenaConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            health_threshold: 50,
            arena: ArenaConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Loads overrides from `ANIMECLASH_SEED`, `ANIMECLASH_HEALTH_THRESHOLD`
    /// and `ANIMECLASH_ROUNDS`. Missing or unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DemoConfig::from_env`], reading variables through `lookup`.
    ///
    /// `ANIMECLASH_ROUNDS=0` is accepted and ends the battle right after it
    /// is announced.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64, _>(&lookup, "ANIMECLASH_SEED") {
            config.seed = seed;
        }
        if let Some(threshold) = read_var::<u32, _>(&lookup, "ANIMECLASH_HEALTH_THRESHOLD") {
            config.health_threshold = threshold;
        }
        if let Some(rounds) = read_var::<u32, _>(&lookup, "ANIMECLASH_ROUNDS") {
            config.arena = ArenaConfig::with_rounds(rounds);
        }

        config
    }
}

fn read_var<T, L>(lookup: &L, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    L: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
