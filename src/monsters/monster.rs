//! A monster in an encounter.

use super::behavior::Behavior;
use super::kind::MonsterKind;
use crate::core::{Combatant, EngineConfig, MonsterId, MonsterSpec, RandomSource};
use crate::effects::Intent;
use crate::error::Result;

/// Combat attributes, identity and action policy of one monster.
#[derive(Clone, Debug)]
pub struct Monster {
    id: MonsterId,
    kind: MonsterKind,
    stats: Combatant,
    behavior: Behavior,
}

impl Monster {
    /// Create a monster of a known kind at full health.
    pub fn new<R: RandomSource>(
        id: MonsterId,
        kind: MonsterKind,
        max_hp: i64,
        rng: &mut R,
        config: &EngineConfig,
    ) -> Result<Self> {
        Ok(Self {
            id,
            kind,
            stats: Combatant::new(max_hp)?,
            behavior: Behavior::for_kind(kind, rng, config),
        })
    }

    /// Create a monster from a spec, resolving its type name.
    ///
    /// Fails on an unknown type name or a non-positive max hp.
    pub fn from_spec<R: RandomSource>(
        id: MonsterId,
        spec: &MonsterSpec,
        rng: &mut R,
        config: &EngineConfig,
    ) -> Result<Self> {
        let kind = spec.kind.parse::<MonsterKind>()?;
        Self::new(id, kind, spec.max_hp, rng, config)
    }

    #[must_use]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    #[must_use]
    pub fn stats(&self) -> &Combatant {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Combatant {
        &mut self.stats
    }

    #[must_use]
    pub fn hp(&self) -> i64 {
        self.stats.hp()
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.is_defeated()
    }

    /// Perform this turn's action and return its intent.
    pub fn action(&mut self) -> Intent {
        self.behavior.act(&mut self.stats)
    }

    /// Start-of-turn decay.
    pub fn new_turn(&mut self) {
        self.stats.new_turn();
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} HP", self.kind, self.stats.hp(), self.stats.max_hp())
    }
}
