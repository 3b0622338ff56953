//! Status kinds and the modifier sets cards and monsters apply.
//!
//! A `StatusModifiers` is a small map from [`StatusKind`] to magnitude with
//! no duplicate keys. Setting a kind twice replaces the earlier value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The three statuses a combatant can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Additive bonus to outgoing damage.
    Strength,
    /// Outgoing damage x0.75 while turns remain.
    Weak,
    /// Incoming damage x1.5 while turns remain.
    Vulnerable,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [Self::Strength, Self::Weak, Self::Vulnerable];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Weak => "weak",
            Self::Vulnerable => "vulnerable",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status magnitudes keyed by kind, at most one entry per kind.
///
/// ```
/// use deck_combat::cards::{StatusKind, StatusModifiers};
///
/// let mods = StatusModifiers::new()
///     .with(StatusKind::Weak, 1)
///     .with(StatusKind::Vulnerable, 2);
///
/// assert_eq!(mods.get(StatusKind::Vulnerable), Some(2));
/// assert_eq!(mods.get(StatusKind::Strength), None);
/// ```
///
/// Serializes as a list of `(kind, amount)` pairs. Deserializing goes
/// through [`set`](Self::set), so a repeated kind keeps its last value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(StatusKind, i64)>", into = "Vec<(StatusKind, i64)>")]
pub struct StatusModifiers {
    /// SmallVec: never more than three entries.
    entries: SmallVec<[(StatusKind, i64); 3]>,
}

impl StatusModifiers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a kind's magnitude (builder pattern), replacing any earlier value.
    #[must_use]
    pub fn with(mut self, kind: StatusKind, amount: i64) -> Self {
        self.set(kind, amount);
        self
    }

    /// Set a kind's magnitude, replacing any earlier value.
    pub fn set(&mut self, kind: StatusKind, amount: i64) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = amount,
            None => self.entries.push((kind, amount)),
        }
    }

    /// Magnitude for a kind, `None` if the kind is absent.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<i64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|&(_, amount)| amount)
    }

    #[must_use]
    pub fn contains(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Iterate over `(kind, amount)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, i64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(StatusKind, i64)>> for StatusModifiers {
    fn from(pairs: Vec<(StatusKind, i64)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<StatusModifiers> for Vec<(StatusKind, i64)> {
    fn from(modifiers: StatusModifiers) -> Self {
        modifiers.entries.into_vec()
    }
}

impl FromIterator<(StatusKind, i64)> for StatusModifiers {
    fn from_iter<I: IntoIterator<Item = (StatusKind, i64)>>(iter: I) -> Self {
        let mut modifiers = Self::new();
        for (kind, amount) in iter {
            modifiers.set(kind, amount);
        }
        modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces() {
        let mods = StatusModifiers::new()
            .with(StatusKind::Weak, 1)
            .with(StatusKind::Weak, 3);

        assert_eq!(mods.len(), 1);
        assert_eq!(mods.get(StatusKind::Weak), Some(3));
    }

    #[test]
    fn test_zero_is_present() {
        let mods = StatusModifiers::new().with(StatusKind::Weak, 0);
        assert!(mods.contains(StatusKind::Weak));
        assert_eq!(mods.get(StatusKind::Weak), Some(0));
    }

    #[test]
    fn test_iteration_order() {
        let mods = StatusModifiers::new()
            .with(StatusKind::Vulnerable, 2)
            .with(StatusKind::Strength, 1);

        let pairs: Vec<_> = mods.iter().collect();
        assert_eq!(
            pairs,
            vec![(StatusKind::Vulnerable, 2), (StatusKind::Strength, 1)]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StatusKind::Vulnerable.to_string(), "vulnerable");
        assert_eq!(StatusKind::ALL.len(), 3);
    }

    #[test]
    fn test_deserialize_collapses_repeats() {
        let mods: StatusModifiers =
            serde_json::from_str(r#"[["weak", 1], ["vulnerable", 2], ["weak", 3]]"#).unwrap();

        assert_eq!(mods.len(), 2);
        assert_eq!(mods.get(StatusKind::Weak), Some(3));

        let json = serde_json::to_string(&mods).unwrap();
        assert_eq!(json, r#"[["weak",3],["vulnerable",2]]"#);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&StatusKind::Strength).unwrap();
        assert_eq!(json, "\"strength\"");
    }
}
