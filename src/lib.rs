//! # deck-combat
//!
//! A turn-based deck-building combat engine: a single player fights
//! groups of monsters with a deck of cards, one encounter after another.
//!
//! ## Design Principles
//!
//! 1. **Atomic Card Plays**: Every check runs before any state changes.
//!    A refused play is reported as a [`PlayRejection`] and leaves the
//!    encounter untouched.
//!
//! 2. **Explicit Phases**: An encounter alternates between the player's
//!    turn and the monsters' turn; transitions outside the right phase
//!    are no-ops.
//!
//! 3. **Injected Randomness**: Shuffles and rolls go through a
//!    [`RandomSource`] held in a [`CombatContext`], so a seed reproduces a
//!    whole run and tests can script the dice.
//!
//! ## Modules
//!
//! - `core`: Combat attributes, the player, monster ids, config, RNG, combat log
//! - `cards`: Card definitions, status modifiers, the card registry
//! - `zones`: Deck, hand and discard piles
//! - `effects`: Monster intents and damage/status resolution
//! - `monsters`: Monster types and their action policies
//! - `rules`: The encounter engine
//! - `games`: Playable characters and multi-encounter runs
//!
//! ## Example
//!
//! ```
//! use deck_combat::{CardRegistry, CombatContext, Encounter, EncounterSpec, Player};
//!
//! let registry = CardRegistry::standard();
//! let mut player = Player::new(80, registry.create_all(["Strike"]).unwrap()).unwrap();
//! let mut ctx = CombatContext::seeded(42);
//! let spec: EncounterSpec = [("JawWorm", 10)].into_iter().collect();
//!
//! let mut encounter = Encounter::new(&mut player, &spec, &mut ctx).unwrap();
//! let target = encounter.monsters()[0].id();
//!
//! assert!(encounter.player_apply_card("Strike", Some(target)));
//! assert_eq!(encounter.monsters()[0].hp(), 4);
//! assert_eq!(encounter.player().energy(), 2);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod games;
pub mod monsters;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, CombatAction, CombatLog, Combatant, EncounterSpec, EngineConfig, GameRng,
    MonsterId, MonsterIdAllocator, MonsterSpec, Player, RandomSource,
};

pub use crate::cards::{Card, CardDefinition, CardRegistry, StatusKind, StatusModifiers};

pub use crate::zones::{PileKind, Piles};

pub use crate::effects::{EffectResolver, Intent};

pub use crate::monsters::{Behavior, Monster, MonsterKind};

pub use crate::rules::{
    CardPlay, CombatContext, Encounter, EncounterSummary, PlayRejection, TurnPhase,
};

pub use crate::games::{Character, Run, RunOutcome};

pub use crate::error::{EngineError, Result};
