//! Turn phases and card-play outcomes.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{CombatLog, MonsterId};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// The player may play cards.
    #[default]
    PlayerTurn,
    /// Monsters act; player input is rejected.
    MonsterTurn,
}

/// Why a card play was refused.
///
/// Variants are listed in the order the checks run. A rejected play never
/// changes any state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PlayRejection {
    #[error("it is not the player's turn")]
    WrongPhase,

    #[error("{0} needs a target")]
    TargetRequired(String),

    #[error("no monster with id {0}")]
    UnknownTarget(MonsterId),

    #[error("{0} is not in hand")]
    CardNotInHand(String),

    #[error("{card} costs {cost} but only {energy} energy remains")]
    InsufficientEnergy { card: String, cost: i64, energy: i64 },
}

/// A card play that went through.
#[derive(Clone, Debug)]
pub struct CardPlay {
    /// The card that moved to the discard pile.
    pub card: Card,

    /// The monster the card was aimed at, if it needed one.
    pub target: Option<MonsterId>,

    /// Damage dealt to the target after modifiers.
    pub damage: i64,

    /// Whether the target was defeated and removed.
    pub defeated: bool,
}

/// What an encounter left behind once it was closed with
/// [`Encounter::finish`](super::Encounter::finish).
///
/// Only the engine builds one, so a run can trust `cleared`.
#[derive(Clone, Debug)]
pub struct EncounterSummary {
    cleared: bool,
    player_defeated: bool,
    log: CombatLog,
}

impl EncounterSummary {
    pub(super) fn new(cleared: bool, player_defeated: bool, log: CombatLog) -> Self {
        Self {
            cleared,
            player_defeated,
            log,
        }
    }

    /// Every monster was defeated.
    #[must_use]
    pub fn cleared(&self) -> bool {
        self.cleared
    }

    #[must_use]
    pub fn player_defeated(&self) -> bool {
        self.player_defeated
    }

    /// Player turns started during the encounter.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.log.turn()
    }

    #[must_use]
    pub fn history(&self) -> &CombatLog {
        &self.log
    }
}
