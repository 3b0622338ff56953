//! Shared helpers for integration tests.

#![allow(dead_code)]

use deck_combat::{CardRegistry, CombatContext, EncounterSpec, Player};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn player(max_hp: i64, cards: &[&str]) -> Player {
    let registry = CardRegistry::standard();
    Player::new(max_hp, registry.create_all(cards.iter().copied()).unwrap()).unwrap()
}

pub fn encounter(monsters: &[(&str, i64)]) -> EncounterSpec {
    monsters.iter().copied().collect()
}

pub fn context(seed: u64) -> CombatContext {
    CombatContext::seeded(seed)
}
