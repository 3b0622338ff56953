//! Playable characters and their starting loadouts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::CardRegistry;
use crate::core::{EngineConfig, Player};
use crate::error::{EngineError, Result};

/// A playable character.
///
/// ```
/// use deck_combat::cards::CardRegistry;
/// use deck_combat::core::EngineConfig;
/// use deck_combat::games::Character;
///
/// let silent: Character = "silent".parse().unwrap();
/// let player = silent
///     .create_player(&CardRegistry::standard(), &EngineConfig::default())
///     .unwrap();
///
/// assert_eq!(player.to_string(), "Silent: 70/70 HP");
/// assert_eq!(player.deck().len(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    IronClad,
    Silent,
    Watcher,
}

impl Character {
    pub const ALL: [Character; 3] = [Self::IronClad, Self::Silent, Self::Watcher];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IronClad => "IronClad",
            Self::Silent => "Silent",
            Self::Watcher => "Watcher",
        }
    }

    #[must_use]
    pub const fn max_hp(self) -> i64 {
        match self {
            Self::IronClad => 80,
            Self::Silent => 70,
            Self::Watcher => 72,
        }
    }

    /// Starting deck as (card name, copies), in deck order.
    #[must_use]
    pub const fn starter_deck(self) -> &'static [(&'static str, usize)] {
        match self {
            Self::IronClad => &[("Strike", 5), ("Defend", 4), ("Bash", 1)],
            Self::Silent => &[("Strike", 5), ("Defend", 5), ("Neutralize", 1), ("Survivor", 1)],
            Self::Watcher => &[("Strike", 4), ("Defend", 4), ("Eruption", 1), ("Vigilance", 1)],
        }
    }

    /// Build this character's player with a fresh starting deck.
    pub fn create_player(self, registry: &CardRegistry, config: &EngineConfig) -> Result<Player> {
        let names = self
            .starter_deck()
            .iter()
            .flat_map(|&(name, copies)| std::iter::repeat(name).take(copies));
        let deck = registry.create_all(names)?;

        Ok(Player::with_config(self.max_hp(), deck, config)?.named(self.name()))
    }
}

impl FromStr for Character {
    type Err = EngineError;

    /// Names match ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|character| character.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownCharacter(s.to_string()))
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
