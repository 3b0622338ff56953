//! Monsters: type registry, action policies, and the monster entity.
//!
//! ## Key Types
//!
//! - `MonsterKind`: Known type names (`Louse`, `Cultist`, `JawWorm`)
//! - `Behavior`: Per-type action policy with its private counters
//! - `Monster`: Id + combat attributes + behavior

pub mod behavior;
pub mod kind;
pub mod monster;

pub use behavior::Behavior;
pub use kind::MonsterKind;
pub use monster::Monster;
