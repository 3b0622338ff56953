//! Engine configuration and encounter definitions.
//!
//! - `EngineConfig`: Tunable rules constants (hand size, energy, Louse roll)
//! - `MonsterSpec`: One monster to create (type name + max hp)
//! - `EncounterSpec`: The ordered monsters of one battle
//!
//! All three deserialize with serde so an external loader can read them
//! from whatever format it likes. The engine never touches files itself.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Rules constants.
///
/// Missing fields take their defaults when deserializing.
///
/// ```
/// use deck_combat::core::EngineConfig;
///
/// let config = EngineConfig::default().with_hand_size(6);
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.max_energy, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards drawn at the start of each player turn.
    pub hand_size: usize,

    /// Energy the player starts each turn with.
    pub max_energy: i64,

    /// Lowest damage a Louse can roll.
    pub louse_damage_min: i64,

    /// Highest damage a Louse can roll (inclusive).
    pub louse_damage_max: i64,

    /// Most monsters allowed in one encounter.
    pub max_monsters: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            max_energy: 3,
            louse_damage_min: 5,
            louse_damage_max: 7,
            max_monsters: 3,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_max_energy(mut self, max_energy: i64) -> Self {
        self.max_energy = max_energy;
        self
    }

    #[must_use]
    pub fn with_louse_damage(mut self, min: i64, max: i64) -> Self {
        self.louse_damage_min = min;
        self.louse_damage_max = max;
        self
    }

    #[must_use]
    pub fn with_max_monsters(mut self, max_monsters: usize) -> Self {
        self.max_monsters = max_monsters;
        self
    }

    /// Check that the constants describe a playable game.
    ///
    /// Energy and Louse damage must be non-negative, the Louse range must
    /// not be empty, and an encounter must allow at least one monster.
    pub fn validate(&self) -> Result<()> {
        if self.max_energy < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "max_energy must not be negative, got {}",
                self.max_energy
            )));
        }
        if self.louse_damage_min < 0 || self.louse_damage_min > self.louse_damage_max {
            return Err(EngineError::InvalidConfig(format!(
                "louse damage range {}..={} is empty or negative",
                self.louse_damage_min, self.louse_damage_max
            )));
        }
        if self.max_monsters == 0 {
            return Err(EngineError::InvalidConfig(
                "max_monsters must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One monster to create: its type name and max hp.
///
/// The name is kept as text so that an unknown type is reported when the
/// encounter is built, not when the definition is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub kind: String,
    pub max_hp: i64,
}

impl MonsterSpec {
    #[must_use]
    pub fn new(kind: impl Into<String>, max_hp: i64) -> Self {
        Self {
            kind: kind.into(),
            max_hp,
        }
    }
}

impl<S: Into<String>> From<(S, i64)> for MonsterSpec {
    fn from((kind, max_hp): (S, i64)) -> Self {
        Self::new(kind, max_hp)
    }
}

/// The ordered monsters of one encounter.
///
/// Serializes as a plain list of monsters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncounterSpec {
    pub monsters: Vec<MonsterSpec>,
}

impl EncounterSpec {
    #[must_use]
    pub fn new(monsters: Vec<MonsterSpec>) -> Self {
        Self { monsters }
    }

    /// Check the monster count against the configured limit.
    pub fn validate(&self, config: &EngineConfig) -> Result<()> {
        if self.monsters.is_empty() {
            return Err(EngineError::InvalidEncounter(
                "encounter has no monsters".to_string(),
            ));
        }
        if self.monsters.len() > config.max_monsters {
            return Err(EngineError::InvalidEncounter(format!(
                "{} monsters exceeds the limit of {}",
                self.monsters.len(),
                config.max_monsters
            )));
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for EncounterSpec {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(MonsterSpec::from).collect())
    }
}
