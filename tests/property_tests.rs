//! Property tests for pile conservation and damage arithmetic.

mod common;

use common::{context, encounter, player};
use deck_combat::{Combatant, EffectResolver, Encounter};
use proptest::prelude::*;

const CARDS: [&str; 7] = [
    "Strike", "Defend", "Bash", "Neutralize", "Survivor", "Eruption", "Vigilance",
];

#[derive(Clone, Debug)]
enum Op {
    Play { card: usize, target: usize },
    PassTurn,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..CARDS.len(), 0..4usize).prop_map(|(card, target)| Op::Play { card, target }),
        1 => Just(Op::PassTurn),
    ]
}

proptest! {
    #[test]
    fn test_piles_conserved(
        deck in prop::collection::vec(0..CARDS.len(), 1..20),
        ops in prop::collection::vec(op(), 0..60),
        seed in any::<u64>(),
    ) {
        let names: Vec<&str> = deck.iter().map(|&i| CARDS[i]).collect();
        let total = names.len();
        let mut p = player(500, &names);
        let mut ctx = context(seed);
        let mut enc = Encounter::new(
            &mut p,
            &encounter(&[("JawWorm", 400), ("Cultist", 400), ("Louse", 400)]),
            &mut ctx,
        )
        .unwrap();

        for op in ops {
            match op {
                Op::Play { card, target } => {
                    let target = enc.monsters().get(target).map(|m| m.id());
                    enc.player_apply_card(CARDS[card], target);
                }
                Op::PassTurn => {
                    enc.end_player_turn();
                    enc.enemy_turn();
                }
            }
            prop_assert_eq!(enc.player().piles().total(), total);
            prop_assert!((0..=3).contains(&enc.player().energy()));
        }
    }

    #[test]
    fn test_damage_never_negative(
        max_hp in 1i64..200,
        block in 0i64..100,
        hits in prop::collection::vec(-10i64..300, 1..10),
    ) {
        let mut c = Combatant::new(max_hp).unwrap();
        c.add_block(block);

        for amount in hits {
            let before_hp = c.hp();
            let before_block = c.block();
            c.apply_damage(amount);

            prop_assert!(c.hp() >= 0);
            prop_assert!(c.block() >= 0);
            prop_assert!(c.hp() <= before_hp);
            if amount >= before_hp + before_block {
                prop_assert_eq!(c.hp(), 0);
            }
        }
    }

    #[test]
    fn test_damage_modifiers_never_increase_under_weak(
        base in 0i64..100,
        strength in 0i64..10,
    ) {
        let mut attacker = Combatant::new(10).unwrap();
        attacker.add_strength(strength);
        let plain = EffectResolver::attack_damage(base, &attacker, None);

        attacker.add_weak(1);
        let weakened = EffectResolver::attack_damage(base, &attacker, None);

        prop_assert_eq!(plain, base + strength);
        prop_assert!(weakened <= plain);
    }
}

proptest! {
    #[test]
    fn test_damage_matches_fractional_multipliers(
        base in 0i64..500,
        strength in 0i64..20,
        weak in any::<bool>(),
        vulnerable in any::<bool>(),
    ) {
        let mut attacker = Combatant::new(10).unwrap();
        attacker.add_strength(strength);
        attacker.add_weak(i64::from(weak));
        let mut defender = Combatant::new(10).unwrap();
        defender.add_vulnerable(i64::from(vulnerable));

        let mut expected = (base + strength) as f64;
        if vulnerable {
            expected *= 1.5;
        }
        if weak {
            expected *= 0.75;
        }

        prop_assert_eq!(
            EffectResolver::attack_damage(base, &attacker, Some(&defender)),
            expected as i64
        );
    }
}

#[test]
fn test_weak_and_vulnerable_truncate_once() {
    let mut attacker = Combatant::new(10).unwrap();
    attacker.add_weak(1);
    let mut defender = Combatant::new(10).unwrap();
    defender.add_vulnerable(1);

    // 2 * 1.125 = 2.25
    assert_eq!(EffectResolver::attack_damage(2, &attacker, Some(&defender)), 2);
    // 9 * 1.125 = 10.125
    assert_eq!(EffectResolver::attack_damage(9, &attacker, Some(&defender)), 10);

    attacker.add_strength(2);
    assert_eq!(EffectResolver::attack_damage(6, &attacker, Some(&defender)), 9);
}
