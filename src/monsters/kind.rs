//! Monster type registry.
//!
//! Encounter definitions name monsters by text; `MonsterKind` is the
//! closed set of names the engine knows how to build.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Known monster types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Hits for the same rolled amount every turn.
    Louse,
    /// Escalating attacks, weakening every other turn.
    Cultist,
    /// Strikes back with half the damage it has taken and blocks the rest.
    JawWorm,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [Self::Louse, Self::Cultist, Self::JawWorm];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Louse => "Louse",
            Self::Cultist => "Cultist",
            Self::JawWorm => "JawWorm",
        }
    }
}

impl FromStr for MonsterKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownMonster(s.to_string()))
    }
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
