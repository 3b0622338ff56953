//! Shared services an encounter draws on.

use crate::core::{EngineConfig, GameRng, MonsterIdAllocator, RandomSource};

/// Randomness, monster id allocation and rules constants.
///
/// One context is threaded through every encounter of a run so monster
/// ids keep increasing and the random stream stays reproducible.
#[derive(Clone, Debug)]
pub struct CombatContext<R: RandomSource = GameRng> {
    pub rng: R,
    pub ids: MonsterIdAllocator,
    pub config: EngineConfig,
}

impl CombatContext<GameRng> {
    /// Context backed by a seeded [`GameRng`] and default rules.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> CombatContext<R> {
    /// Context around any random source, with default rules.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ids: MonsterIdAllocator::new(),
            config: EngineConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}
