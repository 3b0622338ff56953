//! Monster intents.
//!
//! An `Intent` is what a monster's action does this turn: some damage and
//! some statuses. Any subset of the four effects may be present; an
//! absent one means "no effect of that kind this turn", which is distinct
//! from an explicit zero only for reporting.

use serde::{Deserialize, Serialize};

use crate::cards::{StatusKind, StatusModifiers};

/// The effect set a monster produces for one turn.
///
/// `weak` and `vulnerable` land on the player; `strength` lands on the
/// acting monster itself.
///
/// ```
/// use deck_combat::cards::StatusKind;
/// use deck_combat::effects::Intent;
///
/// let intent = Intent::attack(7).with_status(StatusKind::Weak, 1);
///
/// assert_eq!(intent.damage, Some(7));
/// assert_eq!(intent.status(StatusKind::Weak), Some(1));
/// assert_eq!(intent.status(StatusKind::Strength), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub damage: Option<i64>,
    pub status: StatusModifiers,
}

impl Intent {
    /// An intent with no effects.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// An intent dealing `damage`.
    #[must_use]
    pub fn attack(damage: i64) -> Self {
        Self {
            damage: Some(damage),
            status: StatusModifiers::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, amount: i64) -> Self {
        self.status.set(kind, amount);
        self
    }

    #[must_use]
    pub fn status(&self, kind: StatusKind) -> Option<i64> {
        self.status.get(kind)
    }

    /// Damage before modifiers, zero when absent.
    #[must_use]
    pub fn base_damage(&self) -> i64 {
        self.damage.unwrap_or(0)
    }
}
