//! Core combat types: combatants, player, monster ids, RNG, configuration.
//!
//! This module contains the building blocks every other module works with.
//! Nothing in here knows about turn phases or card resolution.

pub mod action;
pub mod combatant;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, CombatAction, CombatLog};
pub use combatant::Combatant;
pub use config::{EncounterSpec, EngineConfig, MonsterSpec};
pub use entity::{MonsterId, MonsterIdAllocator};
pub use player::Player;
pub use rng::{GameRng, RandomSource};
