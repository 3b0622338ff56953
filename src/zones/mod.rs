//! Card piles: deck, hand and discard.
//!
//! `Piles` handles movement between the three piles:
//! - Drawing from the front of the deck, reshuffling the discard when empty
//! - Playing a single card from hand to discard
//! - End-of-turn and start-of-encounter bulk moves

pub mod manager;

pub use manager::{PileKind, Piles};
