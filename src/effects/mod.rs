//! Effects: monster intents and the damage formula.
//!
//! - `Intent`: what a monster does this turn (damage + statuses)
//! - `EffectResolver`: strength/vulnerable/weak arithmetic and status
//!   application, shared by card plays and monster turns

pub mod effect;
pub mod resolver;

pub use effect::Intent;
pub use resolver::EffectResolver;
