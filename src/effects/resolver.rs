//! Damage arithmetic shared by card plays and monster turns.
//!
//! Both directions use the same formula:
//!
//! 1. `total = base + attacker.strength`
//! 2. defender vulnerable → `× 1.5`
//! 3. attacker weak → `× 0.75`
//!
//! The result is truncated once, after both multipliers. The factors are
//! kept as an exact fraction, so a base of 9 with both statuses gives
//! `81 / 8 = 10`, not the 9 that truncating after each step would give.

use crate::cards::{StatusKind, StatusModifiers};
use crate::core::Combatant;

/// Resolves damage and status application between combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Final damage of an attack.
    ///
    /// `defender` is `None` when the attack has no target, in which case
    /// vulnerable is not considered.
    #[must_use]
    pub fn attack_damage(base: i64, attacker: &Combatant, defender: Option<&Combatant>) -> i64 {
        let total = base + attacker.strength();
        let (mut num, mut den) = (1, 1);

        if defender.is_some_and(|d| d.vulnerable() > 0) {
            num *= 3;
            den *= 2;
        }
        if attacker.weak() > 0 {
            num *= 3;
            den *= 4;
        }

        total * num / den
    }

    /// Add every modifier of the given kinds to `target`.
    ///
    /// Kinds not listed are skipped, so callers choose which modifiers go
    /// to which combatant.
    pub fn apply_statuses(target: &mut Combatant, modifiers: &StatusModifiers, kinds: &[StatusKind]) {
        for (kind, amount) in modifiers.iter() {
            if kinds.contains(&kind) {
                target.add_status(kind, amount);
            }
        }
    }
}
