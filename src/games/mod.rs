//! Playable content built on the encounter engine.
//!
//! - `Character`: Starting hp and deck for each playable character
//! - `Run`: A player fighting through an ordered list of encounters

pub mod character;
pub mod run;

pub use character::Character;
pub use run::{Run, RunOutcome};
