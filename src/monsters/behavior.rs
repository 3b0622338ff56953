//! Per-type monster action policies.
//!
//! Each [`MonsterKind`] maps to one `Behavior` variant holding whatever
//! internal counters that type needs. `act` produces this turn's
//! [`Intent`] and may change the monster's own stats (the JawWorm blocks).

use serde::{Deserialize, Serialize};

use super::kind::MonsterKind;
use crate::cards::StatusKind;
use crate::core::{Combatant, EngineConfig, RandomSource};
use crate::effects::Intent;

/// Action policy and its private state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Rolled once at creation, never re-rolled.
    Louse { damage: i64 },

    /// Damage 0, 7, 8, 9, ... with weak alternating 0, 1, 0, 1, ...
    Cultist { damage: i64, weak: bool },

    /// Reacts to cumulative damage taken since creation.
    JawWorm,
}

impl Behavior {
    /// Build the policy for a kind.
    ///
    /// Only the Louse consumes randomness: one roll from the configured
    /// damage range.
    pub fn for_kind<R: RandomSource>(kind: MonsterKind, rng: &mut R, config: &EngineConfig) -> Self {
        match kind {
            MonsterKind::Louse => Self::Louse {
                damage: rng.roll(config.louse_damage_min..=config.louse_damage_max),
            },
            MonsterKind::Cultist => Self::Cultist {
                damage: 0,
                weak: false,
            },
            MonsterKind::JawWorm => Self::JawWorm,
        }
    }

    /// Produce this turn's intent.
    pub fn act(&mut self, stats: &mut Combatant) -> Intent {
        match self {
            Self::Louse { damage } => Intent::attack(*damage),

            Self::Cultist { damage, weak } => {
                let intent = Intent::attack(*damage).with_status(StatusKind::Weak, i64::from(*weak));
                if *damage == 0 {
                    *damage = 6;
                }
                *damage += 1;
                *weak = !*weak;
                intent
            }

            Self::JawWorm => {
                let taken = stats.max_hp() - stats.hp();
                if taken > 0 {
                    stats.add_block(taken / 2 + taken % 2);
                    Intent::attack(taken / 2)
                } else {
                    Intent::attack(0)
                }
            }
        }
    }
}
