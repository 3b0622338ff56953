//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: what it
//! costs, what it deals, what it grants. For example, "Bash" costs 2,
//! deals 7 damage and grants 5 block - these are part of the definition.
//!
//! Cards in a player's piles are shared handles to a definition
//! ([`Card`]), so moving a card between piles never copies its data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::status::{StatusKind, StatusModifiers};
use crate::error::{EngineError, Result};

/// A card in a pile: a shared handle to its definition.
pub type Card = Arc<CardDefinition>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_combat::cards::{CardDefinition, StatusKind};
///
/// let neutralize = CardDefinition::new("Neutralize")
///     .with_damage(3)
///     .with_cost(0)
///     .with_status(StatusKind::Weak, 1)
///     .with_status(StatusKind::Vulnerable, 2);
///
/// assert_eq!(neutralize.damage, 3);
/// assert!(neutralize.requires_target);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, also the lookup key in the registry.
    pub name: String,

    /// Base damage dealt to the target.
    pub damage: i64,

    /// Block granted to the player.
    pub block: i64,

    /// Energy needed to play the card.
    pub cost: i64,

    /// Statuses applied when played. `strength` goes to the player,
    /// `weak` and `vulnerable` go to the target.
    pub status: StatusModifiers,

    /// Whether playing the card needs a target monster.
    pub requires_target: bool,

    /// Player-facing rules text.
    pub description: String,
}

impl CardDefinition {
    /// Create a definition with the defaults: no damage, no block,
    /// cost 1, targeted, description "A card.".
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            damage: 0,
            block: 0,
            cost: 1,
            status: StatusModifiers::new(),
            requires_target: true,
            description: "A card.".to_string(),
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i64) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, amount: i64) -> Self {
        self.status.set(kind, amount);
        self
    }

    /// Mark the card as self-targeted (no monster target needed).
    #[must_use]
    pub fn untargeted(mut self) -> Self {
        self.requires_target = false;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check that every number on the card is non-negative.
    ///
    /// Strength only ever grows and statuses count turns, so negative
    /// magnitudes are rejected along with negative damage, block and cost.
    pub fn validate(&self) -> Result<()> {
        let fields = [("damage", self.damage), ("block", self.block), ("cost", self.cost)];
        let statuses = self.status.iter().map(|(kind, amount)| (kind.as_str(), amount));

        match fields.into_iter().chain(statuses).find(|&(_, value)| value < 0) {
            Some((field, value)) => Err(EngineError::InvalidCard {
                name: self.name.clone(),
                reason: format!("{field} must not be negative, got {value}"),
            }),
            None => Ok(()),
        }
    }

    /// Strength granted to the player, if any.
    #[must_use]
    pub fn strength(&self) -> Option<i64> {
        self.status.get(StatusKind::Strength)
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
