//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores card definitions keyed by name and hands out
//! shared [`Card`] handles. [`CardRegistry::standard`] holds the seven
//! canonical cards.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardDefinition};
use super::status::StatusKind;
use crate::error::{EngineError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_combat::cards::CardRegistry;
///
/// let registry = CardRegistry::standard();
///
/// let strike = registry.create("Strike").unwrap();
/// assert_eq!(strike.damage, 6);
/// assert!(registry.create("Fireball").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the canonical cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        let cards = [
            CardDefinition::new("Strike")
                .with_damage(6)
                .with_description("Deal 6 damage."),
            CardDefinition::new("Defend")
                .with_block(5)
                .untargeted()
                .with_description("Gain 5 block."),
            CardDefinition::new("Bash")
                .with_damage(7)
                .with_block(5)
                .with_cost(2)
                .with_description("Deal 7 damage. Gain 5 block."),
            CardDefinition::new("Neutralize")
                .with_damage(3)
                .with_cost(0)
                .with_status(StatusKind::Weak, 1)
                .with_status(StatusKind::Vulnerable, 2)
                .with_description("Deal 3 damage. Apply 1 weak. Apply 2 vulnerable."),
            CardDefinition::new("Survivor")
                .with_block(8)
                .with_status(StatusKind::Strength, 1)
                .untargeted()
                .with_description("Gain 8 block and 1 strength."),
            CardDefinition::new("Eruption")
                .with_damage(9)
                .with_cost(2)
                .with_description("Deal 9 damage."),
            CardDefinition::new("Vigilance")
                .with_block(8)
                .with_cost(2)
                .with_status(StatusKind::Strength, 1)
                .untargeted()
                .with_description("Gain 8 block and 1 strength."),
        ];

        for card in cards {
            registry.cards.insert(card.name.clone(), Arc::new(card));
        }

        registry
    }

    /// Register a card definition.
    ///
    /// Fails if the card has a negative value or its name is taken.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        card.validate()?;
        if self.cards.contains_key(&card.name) {
            return Err(EngineError::InvalidCard {
                name: card.name,
                reason: "already registered".to_string(),
            });
        }
        self.cards.insert(card.name.clone(), Arc::new(card));
        Ok(())
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name).map(|card| card.as_ref())
    }

    /// Hand out a card by name.
    pub fn create(&self, name: &str) -> Result<Card> {
        self.cards
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownCard(name.to_string()))
    }

    /// Hand out several cards by name, in order.
    pub fn create_all<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Vec<Card>> {
        names.into_iter().map(|name| self.create(name)).collect()
    }

    /// Rules text for a card by name.
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.get(name).map(|card| card.description.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|card| card.as_ref())
    }
}
