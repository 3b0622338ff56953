//! The encounter engine: turn state machine and combat resolution.
//!
//! An `Encounter` borrows the player for its whole lifetime and owns the
//! monsters it creates. It moves between two phases:
//!
//! ```text
//!            end_player_turn()
//! PlayerTurn ─────────────────▶ MonsterTurn
//!     ▲                             │
//!     └──────── enemy_turn() ───────┘
//! ```
//!
//! The encounter is over once every monster is defeated (`is_active()`
//! returns false); no further transitions happen after that.
//!
//! ## Card plays
//!
//! [`Encounter::try_apply_card`] runs every check before touching any
//! state, so a rejected play leaves the player, the monsters and the log
//! exactly as they were.

use crate::cards::{Card, StatusKind};
use crate::core::{
    CombatAction, CombatLog, EncounterSpec, GameRng, MonsterId, Player, RandomSource,
};
use crate::effects::EffectResolver;
use crate::error::{EngineError, Result};
use crate::monsters::{Monster, MonsterKind};

use super::context::CombatContext;
use super::phase::{CardPlay, EncounterSummary, PlayRejection, TurnPhase};

/// Statuses a card or monster puts on its opponent.
const DEBUFFS: [StatusKind; 2] = [StatusKind::Weak, StatusKind::Vulnerable];

/// One battle between the player and an ordered group of monsters.
pub struct Encounter<'a, R: RandomSource = GameRng> {
    player: &'a mut Player,
    ctx: &'a mut CombatContext<R>,
    monsters: Vec<Monster>,
    phase: TurnPhase,
    log: CombatLog,
}

impl<'a, R: RandomSource> Encounter<'a, R> {
    /// Build the monsters described by `spec` and start the first turn.
    ///
    /// The config and every monster type and hp are checked before any id
    /// is allocated or any random number is drawn, so bad input consumes
    /// nothing.
    pub fn new(
        player: &'a mut Player,
        spec: &EncounterSpec,
        ctx: &'a mut CombatContext<R>,
    ) -> Result<Self> {
        ctx.config.validate()?;
        spec.validate(&ctx.config)?;

        let mut resolved = Vec::with_capacity(spec.monsters.len());
        for monster in &spec.monsters {
            let kind = monster.kind.parse::<MonsterKind>()?;
            if monster.max_hp <= 0 {
                return Err(EngineError::InvalidMaxHp(monster.max_hp));
            }
            resolved.push((kind, monster.max_hp));
        }

        let mut monsters = Vec::with_capacity(resolved.len());
        for (kind, max_hp) in resolved {
            let id = ctx.ids.allocate();
            monsters.push(Monster::new(id, kind, max_hp, &mut ctx.rng, &ctx.config)?);
        }

        Self::from_monsters(player, monsters, ctx)
    }

    /// Start an encounter against monsters built by the caller.
    ///
    /// Fails if two monsters share an id.
    pub fn from_monsters(
        player: &'a mut Player,
        monsters: Vec<Monster>,
        ctx: &'a mut CombatContext<R>,
    ) -> Result<Self> {
        for (index, monster) in monsters.iter().enumerate() {
            if monsters[..index].iter().any(|m| m.id() == monster.id()) {
                return Err(EngineError::Invariant(format!(
                    "duplicate monster id {}",
                    monster.id()
                )));
            }
        }

        tracing::info!(
            monsters = ?monsters.iter().map(|m| m.kind()).collect::<Vec<_>>(),
            "encounter started"
        );

        let mut encounter = Self {
            player,
            ctx,
            monsters,
            phase: TurnPhase::PlayerTurn,
            log: CombatLog::new(),
        };
        encounter.player.start_new_encounter();
        encounter.start_new_turn();
        Ok(encounter)
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &Player {
        self.player
    }

    /// Remaining monsters in creation order.
    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase == TurnPhase::PlayerTurn
    }

    /// True while at least one monster remains.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.monsters.is_empty()
    }

    /// Everything resolved so far.
    #[must_use]
    pub fn history(&self) -> &CombatLog {
        &self.log
    }

    /// Close the encounter, releasing the player and the context.
    #[must_use]
    pub fn finish(self) -> EncounterSummary {
        let cleared = !self.is_active();
        tracing::debug!(cleared, turns = self.log.turn(), "encounter closed");
        EncounterSummary::new(cleared, self.player.is_defeated(), self.log)
    }

    fn monster_index(&self, id: MonsterId) -> Option<usize> {
        self.monsters.iter().position(|m| m.id() == id)
    }

    // === Turn flow ===

    /// Begin a player turn: statuses decay, a new hand is drawn and
    /// energy refills.
    pub fn start_new_turn(&mut self) {
        self.phase = TurnPhase::PlayerTurn;
        self.player.new_turn(&mut self.ctx.rng);
        self.log.start_turn();
    }

    /// Hand the turn to the monsters.
    ///
    /// The player's hand is discarded and every monster's statuses decay.
    /// Does nothing outside the player's turn or once the encounter is over.
    pub fn end_player_turn(&mut self) {
        if self.phase != TurnPhase::PlayerTurn || !self.is_active() {
            return;
        }

        self.phase = TurnPhase::MonsterTurn;
        self.player.end_turn();
        for monster in &mut self.monsters {
            monster.new_turn();
        }
    }

    /// Let every monster act in order, then start the next player turn.
    ///
    /// Does nothing unless it is the monsters' turn.
    pub fn enemy_turn(&mut self) {
        if self.phase != TurnPhase::MonsterTurn {
            return;
        }

        for monster in &mut self.monsters {
            let intent = monster.action();

            EffectResolver::apply_statuses(self.player.stats_mut(), &intent.status, &DEBUFFS);
            if let Some(strength) = intent.status(StatusKind::Strength) {
                monster.stats_mut().add_strength(strength);
            }

            let damage = EffectResolver::attack_damage(
                intent.base_damage(),
                monster.stats(),
                Some(self.player.stats()),
            );
            self.player.stats_mut().apply_damage(damage);

            tracing::debug!(
                monster = %monster.id(),
                kind = %monster.kind(),
                damage,
                player_hp = self.player.hp(),
                "monster acted"
            );
            self.log.record(CombatAction::MonsterActed {
                monster: monster.id(),
                damage,
                weak: intent.status(StatusKind::Weak).unwrap_or(0),
                vulnerable: intent.status(StatusKind::Vulnerable).unwrap_or(0),
                strength: intent.status(StatusKind::Strength).unwrap_or(0),
            });
        }

        self.start_new_turn();
    }

    // === Card plays ===

    /// Play the first hand card named `name`, optionally at a monster.
    ///
    /// Returns false, with nothing changed, if the play is not allowed.
    pub fn player_apply_card(&mut self, name: &str, target: Option<MonsterId>) -> bool {
        self.try_apply_card(name, target).is_ok()
    }

    /// Play a card, reporting why it was refused.
    ///
    /// Checks run in this order:
    /// 1. it must be the player's turn
    /// 2. a targeted card needs a target
    /// 3. a given target must be a living monster
    /// 4. the card must be in hand and affordable
    pub fn try_apply_card(
        &mut self,
        name: &str,
        target: Option<MonsterId>,
    ) -> std::result::Result<CardPlay, PlayRejection> {
        let target_index = match self.validate_play(name, target) {
            Ok(index) => index,
            Err(rejection) => {
                tracing::debug!(card = name, ?target, %rejection, "card play rejected");
                return Err(rejection);
            }
        };

        let Some(card) = self.player.play_card(name) else {
            return Err(PlayRejection::CardNotInHand(name.to_string()));
        };

        // A card that needs no target never touches one.
        let target_index = if card.requires_target { target_index } else { None };
        Ok(self.resolve_card(card, target_index))
    }

    /// Run every check without changing state. Returns the target's index.
    fn validate_play(
        &self,
        name: &str,
        target: Option<MonsterId>,
    ) -> std::result::Result<Option<usize>, PlayRejection> {
        if self.phase != TurnPhase::PlayerTurn {
            return Err(PlayRejection::WrongPhase);
        }

        let card = self.player.find_in_hand(name);
        if card.is_some_and(|c| c.requires_target) && target.is_none() {
            return Err(PlayRejection::TargetRequired(name.to_string()));
        }

        let target_index = match target {
            Some(id) => Some(
                self.monster_index(id)
                    .ok_or(PlayRejection::UnknownTarget(id))?,
            ),
            None => None,
        };

        let card = card.ok_or_else(|| PlayRejection::CardNotInHand(name.to_string()))?;
        if card.cost > self.player.energy() {
            return Err(PlayRejection::InsufficientEnergy {
                card: name.to_string(),
                cost: card.cost,
                energy: self.player.energy(),
            });
        }

        Ok(target_index)
    }

    /// Apply a paid-for card.
    fn resolve_card(&mut self, card: Card, target_index: Option<usize>) -> CardPlay {
        let player = self.player.stats_mut();
        player.add_block(card.block);
        if let Some(strength) = card.strength() {
            player.add_strength(strength);
        }

        if let Some(index) = target_index {
            EffectResolver::apply_statuses(self.monsters[index].stats_mut(), &card.status, &DEBUFFS);
        }

        let damage = EffectResolver::attack_damage(
            card.damage,
            self.player.stats(),
            target_index.map(|index| self.monsters[index].stats()),
        );

        let mut play = CardPlay {
            card,
            target: None,
            damage: 0,
            defeated: false,
        };

        if let Some(index) = target_index {
            let monster = &mut self.monsters[index];
            monster.stats_mut().apply_damage(damage);
            play.target = Some(monster.id());
            play.damage = damage;
            play.defeated = monster.is_defeated();
        }

        tracing::debug!(
            card = %play.card.name,
            target = ?play.target,
            damage = play.damage,
            energy = self.player.energy(),
            "card played"
        );
        self.log.record(CombatAction::CardPlayed {
            card: play.card.name.clone(),
            target: play.target,
            damage: play.damage,
        });

        if let (true, Some(index)) = (play.defeated, target_index) {
            let monster = self.monsters.remove(index);
            tracing::info!(monster = %monster.id(), kind = %monster.kind(), "monster defeated");
            self.log.record(CombatAction::MonsterDefeated {
                monster: monster.id(),
            });
            if self.monsters.is_empty() {
                tracing::info!(turn = self.log.turn(), "encounter cleared");
            }
        }

        play
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRegistry;

    fn player(cards: &[&str]) -> Player {
        let registry = CardRegistry::standard();
        Player::new(80, registry.create_all(cards.iter().copied()).unwrap()).unwrap()
    }

    fn spec(monsters: &[(&str, i64)]) -> EncounterSpec {
        monsters.iter().copied().collect()
    }

    #[test]
    fn test_construction_starts_player_turn() {
        let mut p = player(&["Strike", "Defend"]);
        let mut ctx = CombatContext::seeded(1);
        let encounter = Encounter::new(&mut p, &spec(&[("Cultist", 48)]), &mut ctx).unwrap();

        assert!(encounter.is_player_turn());
        assert!(encounter.is_active());
        assert_eq!(encounter.player().hand().len(), 2);
        assert_eq!(encounter.player().energy(), 3);
        assert_eq!(encounter.history().turn(), 1);
    }

    #[test]
    fn test_construction_folds_discard() {
        let mut p = player(&["Strike", "Defend", "Bash"]);
        let mut ctx = CombatContext::seeded(1);

        {
            let mut encounter = Encounter::new(&mut p, &spec(&[("Louse", 3)]), &mut ctx).unwrap();
            assert!(encounter.player_apply_card("Strike", Some(MonsterId(0))));
            assert!(!encounter.is_active());
        }
        assert_eq!(p.discard().len(), 1);

        let encounter = Encounter::new(&mut p, &spec(&[("Louse", 3)]), &mut ctx).unwrap();
        assert!(encounter.player().discard().is_empty());
        assert_eq!(encounter.player().piles().total(), 3);
    }

    #[test]
    fn test_ids_continue_across_encounters() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);

        let first: Vec<_> = Encounter::new(&mut p, &spec(&[("Louse", 5), ("JawWorm", 44)]), &mut ctx)
            .unwrap()
            .monsters()
            .iter()
            .map(Monster::id)
            .collect();
        let second: Vec<_> = Encounter::new(&mut p, &spec(&[("Cultist", 48)]), &mut ctx)
            .unwrap()
            .monsters()
            .iter()
            .map(Monster::id)
            .collect();

        assert_eq!(first, vec![MonsterId(0), MonsterId(1)]);
        assert_eq!(second, vec![MonsterId(2)]);
    }

    #[test]
    fn test_unknown_monster_consumes_nothing() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);

        assert!(matches!(
            Encounter::new(&mut p, &spec(&[("Louse", 5), ("Slime", 10)]), &mut ctx),
            Err(EngineError::UnknownMonster(ref name)) if name == "Slime"
        ));
        assert_eq!(ctx.ids.peek(), MonsterId(0));
    }

    #[test]
    fn test_reversed_louse_range_is_an_error() {
        let mut p = player(&["Strike"]);
        let config: crate::core::EngineConfig =
            serde_json::from_str(r#"{"louse_damage_min": 7, "louse_damage_max": 5}"#).unwrap();
        let mut ctx = CombatContext::seeded(1).with_config(config);

        assert!(matches!(
            Encounter::new(&mut p, &spec(&[("Louse", 10)]), &mut ctx),
            Err(EngineError::InvalidConfig(_))
        ));
        assert_eq!(ctx.ids.peek(), MonsterId(0));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut rng = GameRng::new(2);
        let config = ctx.config;

        let monsters = vec![
            Monster::new(MonsterId(4), MonsterKind::Louse, 10, &mut rng, &config).unwrap(),
            Monster::new(MonsterId(4), MonsterKind::Cultist, 10, &mut rng, &config).unwrap(),
        ];
        assert!(matches!(
            Encounter::from_monsters(&mut p, monsters, &mut ctx),
            Err(EngineError::Invariant(_))
        ));
    }

    #[test]
    fn test_rejections_in_order() {
        let mut p = player(&["Strike", "Defend", "Bash", "Bash"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("JawWorm", 44)]), &mut ctx).unwrap();

        assert_eq!(
            encounter.try_apply_card("Strike", None).unwrap_err(),
            PlayRejection::TargetRequired("Strike".to_string())
        );
        assert_eq!(
            encounter.try_apply_card("Strike", Some(MonsterId(9))).unwrap_err(),
            PlayRejection::UnknownTarget(MonsterId(9))
        );
        // unknown target is checked before the hand
        assert_eq!(
            encounter.try_apply_card("Eruption", Some(MonsterId(9))).unwrap_err(),
            PlayRejection::UnknownTarget(MonsterId(9))
        );
        assert_eq!(
            encounter.try_apply_card("Eruption", Some(MonsterId(0))).unwrap_err(),
            PlayRejection::CardNotInHand("Eruption".to_string())
        );

        assert!(encounter.player_apply_card("Bash", Some(MonsterId(0))));
        assert_eq!(
            encounter.try_apply_card("Bash", Some(MonsterId(0))).unwrap_err(),
            PlayRejection::InsufficientEnergy {
                card: "Bash".to_string(),
                cost: 2,
                energy: 1
            }
        );

        encounter.end_player_turn();
        assert_eq!(
            encounter.try_apply_card("Defend", None).unwrap_err(),
            PlayRejection::WrongPhase
        );
    }

    #[test]
    fn test_untargeted_card_ignores_given_target() {
        let mut p = player(&["Survivor", "Defend"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("Cultist", 20)]), &mut ctx).unwrap();

        assert!(encounter.player_apply_card("Survivor", None));
        // strength 1 now, but Defend still deals nothing to the named monster
        let play = encounter.try_apply_card("Defend", Some(MonsterId(0))).unwrap();
        assert_eq!(play.target, None);
        assert_eq!(play.damage, 0);
        assert_eq!(encounter.monster(MonsterId(0)).unwrap().hp(), 20);
        assert_eq!(encounter.player().stats().block(), 13);
        assert_eq!(encounter.player().stats().strength(), 1);
    }

    #[test]
    fn test_neutralize_debuffs_target() {
        let mut p = player(&["Neutralize", "Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("JawWorm", 44)]), &mut ctx).unwrap();

        let play = encounter.try_apply_card("Neutralize", Some(MonsterId(0))).unwrap();
        // vulnerable lands before damage: 3 -> 4
        assert_eq!(play.damage, 4);

        let worm = encounter.monster(MonsterId(0)).unwrap();
        assert_eq!(worm.stats().weak(), 1);
        assert_eq!(worm.stats().vulnerable(), 2);
        assert_eq!(worm.hp(), 40);

        let play = encounter.try_apply_card("Strike", Some(MonsterId(0))).unwrap();
        assert_eq!(play.damage, 9);
        assert_eq!(encounter.player().energy(), 2);
    }

    #[test]
    fn test_defeated_monster_removed_in_order() {
        let mut p = player(&["Strike", "Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(
            &mut p,
            &spec(&[("Louse", 20), ("Louse", 6), ("Cultist", 30)]),
            &mut ctx,
        )
        .unwrap();

        let play = encounter.try_apply_card("Strike", Some(MonsterId(1))).unwrap();
        assert!(play.defeated);

        let ids: Vec<_> = encounter.monsters().iter().map(Monster::id).collect();
        assert_eq!(ids, vec![MonsterId(0), MonsterId(2)]);
        assert!(!encounter.player_apply_card("Strike", Some(MonsterId(1))));
    }

    #[test]
    fn test_enemy_turn_requires_monster_phase() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("Louse", 10)]), &mut ctx).unwrap();

        encounter.enemy_turn();
        assert_eq!(encounter.player().hp(), 80);
        assert_eq!(encounter.history().turn(), 1);
    }

    #[test]
    fn test_full_round() {
        let mut p = player(&["Defend", "Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("Cultist", 48)]), &mut ctx).unwrap();

        encounter.end_player_turn();
        assert_eq!(encounter.phase(), TurnPhase::MonsterTurn);
        assert!(encounter.player().hand().is_empty());

        // first Cultist action: 0 damage, weak 0
        encounter.enemy_turn();
        assert!(encounter.is_player_turn());
        assert_eq!(encounter.player().hp(), 80);
        assert_eq!(encounter.player().hand().len(), 2);

        assert!(encounter.player_apply_card("Defend", None));
        encounter.end_player_turn();

        // second action: 7 damage, weak 1; Defend absorbs 5
        encounter.enemy_turn();
        assert_eq!(encounter.player().hp(), 78);
        assert_eq!(encounter.player().stats().weak(), 0);
        assert_eq!(encounter.history().turn(), 3);
    }

    #[test]
    fn test_end_turn_is_guarded() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("JawWorm", 44)]), &mut ctx).unwrap();

        encounter.end_player_turn();
        encounter.end_player_turn();
        assert_eq!(encounter.phase(), TurnPhase::MonsterTurn);
        assert_eq!(encounter.player().discard().len(), 1);
    }

    #[test]
    fn test_finish_reports_outcome() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);

        let open = Encounter::new(&mut p, &spec(&[("Cultist", 48)]), &mut ctx).unwrap();
        let summary = open.finish();
        assert!(!summary.cleared());
        assert!(!summary.player_defeated());
        assert_eq!(summary.turns(), 1);

        let mut encounter = Encounter::new(&mut p, &spec(&[("Louse", 2)]), &mut ctx).unwrap();
        encounter.player_apply_card("Strike", Some(MonsterId(1)));
        let summary = encounter.finish();
        assert!(summary.cleared());
        assert_eq!(summary.history().len(), 3);
    }

    #[test]
    fn test_history_records_play_and_defeat() {
        let mut p = player(&["Strike"]);
        let mut ctx = CombatContext::seeded(1);
        let mut encounter = Encounter::new(&mut p, &spec(&[("Louse", 4)]), &mut ctx).unwrap();

        encounter.player_apply_card("Strike", Some(MonsterId(0)));

        let actions: Vec<_> = encounter.history().iter().map(|r| r.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                CombatAction::TurnStarted,
                CombatAction::CardPlayed {
                    card: "Strike".to_string(),
                    target: Some(MonsterId(0)),
                    damage: 6,
                },
                CombatAction::MonsterDefeated {
                    monster: MonsterId(0)
                },
            ]
        );
    }
}
