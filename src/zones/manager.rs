//! The player's three card piles and movement between them.
//!
//! `Piles` owns the deck, hand and discard. Cards are only ever moved
//! between piles, never created or destroyed, so the total count is
//! constant for the lifetime of a player.
//!
//! Index 0 of every pile is its front. Drawing takes from the front of
//! the deck; playing or discarding appends to the back of the discard.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::RandomSource;

/// Which pile a card lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Deck,
    Hand,
    Discard,
}

/// Deck, hand and discard.
///
/// ## Usage
///
/// ```
/// use deck_combat::cards::CardRegistry;
/// use deck_combat::core::GameRng;
/// use deck_combat::zones::Piles;
///
/// let registry = CardRegistry::standard();
/// let deck = registry.create_all(["Strike", "Defend", "Strike"]).unwrap();
/// let mut piles = Piles::new(deck);
///
/// piles.draw(2, &mut GameRng::new(1));
/// assert_eq!(piles.hand().len(), 2);
/// assert_eq!(piles.total(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Piles {
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl Piles {
    /// Start with every card in the deck, in the given order.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Cards in a pile, front first.
    #[must_use]
    pub fn pile(&self, kind: PileKind) -> &[Card] {
        match kind {
            PileKind::Deck => &self.deck,
            PileKind::Hand => &self.hand,
            PileKind::Discard => &self.discard,
        }
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Index of the first hand card with this name.
    #[must_use]
    pub fn find_in_hand(&self, name: &str) -> Option<usize> {
        self.hand.iter().position(|card| card.name == name)
    }

    /// Draw up to `count` cards from the front of the deck into the hand.
    ///
    /// When the deck runs out mid-draw the discard is shuffled and becomes
    /// the new deck. Stops early if both are empty. Returns how many cards
    /// were drawn.
    pub fn draw<R: RandomSource>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut drawn = 0;

        while drawn < count {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
            }

            let card = self.deck.remove(0);
            self.hand.push(card);
            drawn += 1;
        }

        drawn
    }

    /// Shuffle the discard and append it to the deck.
    fn reshuffle_discard<R: RandomSource>(&mut self, rng: &mut R) {
        tracing::debug!(cards = self.discard.len(), "reshuffling discard into deck");
        rng.shuffle(&mut self.discard);
        self.deck.append(&mut self.discard);
    }

    /// Move the hand card at `index` to the back of the discard.
    ///
    /// Returns the moved card, or `None` if the index is out of range.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push(card.clone());
        Some(card)
    }

    /// Move the whole hand to the back of the discard, keeping its order.
    pub fn discard_hand(&mut self) {
        self.discard.append(&mut self.hand);
    }

    /// Move the whole discard to the back of the deck, keeping its order.
    pub fn fold_discard_into_deck(&mut self) {
        self.deck.append(&mut self.discard);
    }
}
