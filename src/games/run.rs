//! A run: one player fighting through an ordered list of encounters.
//!
//! The run owns the player and the [`CombatContext`], so hp, strength,
//! piles, monster ids and the random stream all carry over from one
//! encounter to the next.
//!
//! ## Usage
//!
//! ```
//! use deck_combat::cards::CardRegistry;
//! use deck_combat::core::EncounterSpec;
//! use deck_combat::games::{Character, Run, RunOutcome};
//! use deck_combat::rules::CombatContext;
//!
//! let encounters = vec![EncounterSpec::from_iter([("Louse", 6)])];
//! let mut run = Run::for_character(
//!     Character::IronClad,
//!     &CardRegistry::standard(),
//!     encounters,
//!     CombatContext::seeded(7),
//! )
//! .unwrap();
//!
//! let mut encounter = run.next_encounter().unwrap().unwrap();
//! let target = encounter.monsters()[0].id();
//! assert!(encounter.player_apply_card("Strike", Some(target)));
//! let summary = encounter.finish();
//!
//! assert_eq!(run.finish_encounter(summary), RunOutcome::Victory);
//! ```

use serde::{Deserialize, Serialize};

use super::character::Character;
use crate::cards::CardRegistry;
use crate::core::{EncounterSpec, GameRng, Player, RandomSource};
use crate::error::{EngineError, Result};
use crate::monsters::MonsterKind;
use crate::rules::{CombatContext, Encounter, EncounterSummary};

/// Where a run stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    InProgress,
    /// Every encounter was cleared.
    Victory,
    /// The player's hp reached zero.
    Defeat,
}

/// A player, a combat context and the encounters still to fight.
pub struct Run<R: RandomSource = GameRng> {
    player: Player,
    ctx: CombatContext<R>,
    encounters: Vec<EncounterSpec>,
    cleared: usize,
    started: bool,
}

impl<R: RandomSource> Run<R> {
    /// Start a run. Every encounter is checked up front.
    pub fn new(player: Player, encounters: Vec<EncounterSpec>, ctx: CombatContext<R>) -> Result<Self> {
        ctx.config.validate()?;
        for spec in &encounters {
            spec.validate(&ctx.config)?;
            for monster in &spec.monsters {
                monster.kind.parse::<MonsterKind>()?;
                if monster.max_hp <= 0 {
                    return Err(EngineError::InvalidMaxHp(monster.max_hp));
                }
            }
        }

        Ok(Self {
            player,
            ctx,
            encounters,
            cleared: 0,
            started: false,
        })
    }

    /// Start a run with a character's starting loadout.
    pub fn for_character(
        character: Character,
        registry: &CardRegistry,
        encounters: Vec<EncounterSpec>,
        ctx: CombatContext<R>,
    ) -> Result<Self> {
        let player = character.create_player(registry, &ctx.config)?;
        Self::new(player, encounters, ctx)
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn context(&self) -> &CombatContext<R> {
        &self.ctx
    }

    #[must_use]
    pub fn encounters(&self) -> &[EncounterSpec] {
        &self.encounters
    }

    /// Number of encounters won so far.
    #[must_use]
    pub fn cleared(&self) -> usize {
        self.cleared
    }

    /// The encounter `next_encounter` would start.
    #[must_use]
    pub fn current(&self) -> Option<&EncounterSpec> {
        match self.outcome() {
            RunOutcome::InProgress => self.encounters.get(self.cleared),
            _ => None,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> RunOutcome {
        if self.player.is_defeated() {
            RunOutcome::Defeat
        } else if self.cleared >= self.encounters.len() {
            RunOutcome::Victory
        } else {
            RunOutcome::InProgress
        }
    }

    /// Start the current encounter, or `None` once the run is decided.
    ///
    /// Calling this again before [`finish_encounter`](Self::finish_encounter)
    /// restarts the same encounter with fresh monsters.
    pub fn next_encounter(&mut self) -> Result<Option<Encounter<'_, R>>> {
        let Some(spec) = self.current().cloned() else {
            return Ok(None);
        };

        tracing::info!(encounter = self.cleared + 1, total = self.encounters.len(), "next encounter");
        self.started = true;
        Encounter::new(&mut self.player, &spec, &mut self.ctx).map(Some)
    }

    /// Record how the encounter last started ended and report the run's state.
    ///
    /// The run only advances when an encounter was started and the summary
    /// shows every monster defeated. An unfinished encounter stays current
    /// and can be started again.
    pub fn finish_encounter(&mut self, summary: EncounterSummary) -> RunOutcome {
        if !std::mem::take(&mut self.started) {
            tracing::warn!("finish_encounter called with no encounter started");
            return self.outcome();
        }

        if summary.cleared() && self.outcome() == RunOutcome::InProgress {
            self.cleared += 1;
        }

        let outcome = self.outcome();
        if outcome != RunOutcome::InProgress {
            tracing::info!(?outcome, cleared = self.cleared, hp = self.player.hp(), "run over");
        }
        outcome
    }
}
