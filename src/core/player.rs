//! The controlled combatant.
//!
//! A `Player` is a [`Combatant`] plus energy and the three card piles.
//! It persists across a whole run: hp, strength and piles carry over from
//! one encounter to the next.

use crate::cards::Card;
use crate::core::combatant::Combatant;
use crate::core::config::EngineConfig;
use crate::core::rng::RandomSource;
use crate::error::Result;
use crate::zones::Piles;

/// Player state: combat attributes, energy and piles.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    stats: Combatant,
    energy: i64,
    max_energy: i64,
    hand_size: usize,
    piles: Piles,
}

impl Player {
    /// Create a player with the given deck, using default rules constants.
    ///
    /// Every card starts in the deck; the hand and discard start empty.
    pub fn new(max_hp: i64, deck: Vec<Card>) -> Result<Self> {
        Self::with_config(max_hp, deck, &EngineConfig::default())
    }

    /// Create a player taking hand size and energy from `config`.
    ///
    /// Fails on an invalid config or a card with negative values.
    pub fn with_config(max_hp: i64, deck: Vec<Card>, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        for card in &deck {
            card.validate()?;
        }

        Ok(Self {
            name: "Player".to_string(),
            stats: Combatant::new(max_hp)?,
            energy: config.max_energy,
            max_energy: config.max_energy,
            hand_size: config.hand_size,
            piles: Piles::new(deck),
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
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
    pub fn energy(&self) -> i64 {
        self.energy
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        self.piles.deck()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.piles.hand()
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        self.piles.discard()
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.is_defeated()
    }

    /// First card in hand with this name.
    #[must_use]
    pub fn find_in_hand(&self, name: &str) -> Option<&Card> {
        self.piles.find_in_hand(name).map(|index| &self.piles.hand()[index])
    }

    /// Fold the discard pile back into the deck.
    pub fn start_new_encounter(&mut self) {
        self.piles.fold_discard_into_deck();
    }

    /// Move the remaining hand to the discard pile.
    pub fn end_turn(&mut self) {
        self.piles.discard_hand();
    }

    /// Decay statuses, draw a fresh hand and refill energy.
    pub fn new_turn<R: RandomSource>(&mut self, rng: &mut R) {
        self.stats.new_turn();
        let drawn = self.piles.draw(self.hand_size, rng);
        tracing::debug!(drawn, deck = self.piles.deck().len(), "player drew");
        self.energy = self.max_energy;
    }

    /// Play the first hand card named `name`.
    ///
    /// Returns `None` without changing anything if no such card is in hand
    /// or it costs more than the remaining energy. Otherwise the card moves
    /// to the discard pile, its cost is paid and the card is returned.
    pub fn play_card(&mut self, name: &str) -> Option<Card> {
        let index = self.piles.find_in_hand(name)?;
        let cost = self.piles.hand()[index].cost;
        if cost > self.energy {
            return None;
        }

        let card = self.piles.discard_from_hand(index)?;
        self.energy -= cost;
        Some(card)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} HP", self.name, self.stats.hp(), self.stats.max_hp())
    }
}
