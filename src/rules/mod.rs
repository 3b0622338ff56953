//! Encounter rules: turn phases, card-play checks and combat resolution.
//!
//! ## Key Types
//!
//! - `Encounter`: One battle between the player and a group of monsters
//! - `CombatContext`: Random source, monster id allocator and rules constants
//! - `TurnPhase`: Whose turn it is
//! - `PlayRejection`: Why a card play was refused
//! - `EncounterSummary`: Result of a closed encounter

pub mod context;
pub mod engine;
pub mod phase;

pub use context::CombatContext;
pub use engine::Encounter;
pub use phase::{CardPlay, EncounterSummary, PlayRejection, TurnPhase};
