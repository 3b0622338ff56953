//! Combat history: what happened, in order.
//!
//! Every resolved step of an encounter is recorded as a [`CombatAction`]
//! wrapped in an [`ActionRecord`] with its turn and sequence number. A
//! renderer can narrate a turn from the log without re-deriving it from
//! state diffs.
//!
//! The log is an `im::Vector`, so snapshots of it are O(1) to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::MonsterId;

/// A single resolved step of combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    /// A player turn began.
    TurnStarted,

    /// The player played a card.
    CardPlayed {
        card: String,
        target: Option<MonsterId>,
        damage: i64,
    },

    /// A monster acted against the player.
    MonsterActed {
        monster: MonsterId,
        damage: i64,
        weak: i64,
        vulnerable: i64,
        strength: i64,
    },

    /// A monster reached 0 hp and left the encounter.
    MonsterDefeated { monster: MonsterId },
}

/// A recorded action with its position in the encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: CombatAction,

    /// Player turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

/// Ordered log of everything resolved in one encounter.
#[derive(Clone, Debug, Default)]
pub struct CombatLog {
    records: Vector<ActionRecord>,
    turn: u32,
    sequence: u32,
}

impl CombatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current turn number, 0 before the first turn starts.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Advance to the next turn and record it.
    pub fn start_turn(&mut self) {
        self.turn += 1;
        self.sequence = 0;
        self.record(CombatAction::TurnStarted);
    }

    /// Record an action at the current turn.
    pub fn record(&mut self, action: CombatAction) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.records.push_back(ActionRecord {
            action,
            turn: self.turn,
            sequence,
        });
    }

    /// Snapshot of the records so far.
    #[must_use]
    pub fn records(&self) -> Vector<ActionRecord> {
        self.records.clone()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
