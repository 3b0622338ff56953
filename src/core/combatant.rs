//! Combat attributes shared by the player and monsters.
//!
//! A `Combatant` holds hit points, block and the three status values
//! (strength, weak, vulnerable). The player and every monster embed one.
//!
//! ## Damage
//!
//! [`Combatant::apply_damage`] compares the incoming amount against the
//! block and hp as they were *before* the hit:
//!
//! | Condition              | Result                                 |
//! |------------------------|----------------------------------------|
//! | `amount <= block`      | `block -= amount`                      |
//! | `block < amount <= hp` | `hp -= amount - block`, `block = 0`    |
//! | `amount > hp`          | `hp = 0`, `block = 0`                  |
//!
//! The middle guard uses hp alone, not hp + block. A combatant with 10 hp
//! and 4 block is defeated outright by 12 damage.

use serde::{Deserialize, Serialize};

use crate::cards::StatusKind;
use crate::error::{EngineError, Result};

/// Hit points, block and status values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    hp: i64,
    max_hp: i64,
    block: i64,
    strength: i64,
    weak: i64,
    vulnerable: i64,
}

impl Combatant {
    /// Create a combatant at full health with no block or statuses.
    ///
    /// Fails if `max_hp` is not positive.
    pub fn new(max_hp: i64) -> Result<Self> {
        if max_hp <= 0 {
            return Err(EngineError::InvalidMaxHp(max_hp));
        }

        Ok(Self {
            hp: max_hp,
            max_hp,
            block: 0,
            strength: 0,
            weak: 0,
            vulnerable: 0,
        })
    }

    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    #[must_use]
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    #[must_use]
    pub fn block(&self) -> i64 {
        self.block
    }

    #[must_use]
    pub fn strength(&self) -> i64 {
        self.strength
    }

    /// Turns of weak remaining.
    #[must_use]
    pub fn weak(&self) -> i64 {
        self.weak
    }

    /// Turns of vulnerable remaining.
    #[must_use]
    pub fn vulnerable(&self) -> i64 {
        self.vulnerable
    }

    /// Current value of a status.
    #[must_use]
    pub fn status(&self, kind: StatusKind) -> i64 {
        match kind {
            StatusKind::Strength => self.strength,
            StatusKind::Weak => self.weak,
            StatusKind::Vulnerable => self.vulnerable,
        }
    }

    /// Hit this combatant for `amount` damage.
    ///
    /// See the module docs for the exact branches. Negative amounts are
    /// treated as zero.
    pub fn apply_damage(&mut self, amount: i64) {
        let amount = amount.max(0);

        if amount <= self.block {
            self.block -= amount;
        } else if amount <= self.hp {
            self.hp -= amount - self.block;
            self.block = 0;
        } else {
            self.hp = 0;
            self.block = 0;
        }
    }

    pub fn add_block(&mut self, amount: i64) {
        self.block += amount;
    }

    pub fn add_strength(&mut self, amount: i64) {
        self.strength += amount;
    }

    pub fn add_weak(&mut self, amount: i64) {
        self.weak += amount;
    }

    pub fn add_vulnerable(&mut self, amount: i64) {
        self.vulnerable += amount;
    }

    /// Add to a status by kind.
    pub fn add_status(&mut self, kind: StatusKind, amount: i64) {
        match kind {
            StatusKind::Strength => self.add_strength(amount),
            StatusKind::Weak => self.add_weak(amount),
            StatusKind::Vulnerable => self.add_vulnerable(amount),
        }
    }

    /// Start-of-turn decay: block resets, weak and vulnerable tick down.
    ///
    /// Strength never decays.
    pub fn new_turn(&mut self) {
        self.block = 0;
        if self.weak > 0 {
            self.weak -= 1;
        }
        if self.vulnerable > 0 {
            self.vulnerable -= 1;
        }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
