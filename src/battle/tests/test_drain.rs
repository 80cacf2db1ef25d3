#[cfg(test)]
mod tests {
    use crate::battle::mediator::AttackSink;
    use crate::battle::state::BattleEvent;
    use crate::battle::tests::common::{
        create_duel, create_test_battle, health, open_gate, tick, InstantStage,
        TestCombatantBuilder,
    };
    use crate::battle::timers::DELAY_SWITCH_TURN;
    use crate::moves::Attack;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::Side;

    #[rstest]
    #[case(1)]
    #[case(17)]
    #[case(50)]
    #[case(120)]
    fn test_drain_is_linear_and_hands_the_turn_to_the_receiver(#[case] power: u32) {
        let mut battle = create_duel();
        let mut stage = InstantStage::default();
        open_gate(&mut battle, &mut stage);
        battle.send_attack(Side::Trainer, Attack::new("thunderbolt", power));

        for elapsed in 1..=power {
            tick(&mut battle, &mut stage, 1);
            assert_eq!(health(&battle, Side::Opponent), 200 - elapsed as i32);
        }
        let onix = battle.current(Side::Opponent).unwrap();
        assert_eq!(onix.state.health_drain_remaining, Some(0));
        assert_eq!(battle.turn(), Side::Trainer);
        assert!(battle.current(Side::Trainer).unwrap().state.attacking);
        battle.take_events();

        tick(&mut battle, &mut stage, 1);

        let onix = battle.current(Side::Opponent).unwrap();
        assert_eq!(onix.health, 200 - power as i32);
        assert_eq!(onix.state.health_drain_remaining, None);
        assert_eq!(battle.turn(), Side::Opponent);
        assert!(!battle.current(Side::Trainer).unwrap().state.attacking);
        assert_eq!(
            battle.take_events(),
            vec![BattleEvent::DrainFinished {
                side: Side::Opponent,
                name: "onix".to_string(),
                remaining_health: 200 - power as i32,
            }]
        );
    }

    #[test]
    fn test_fifty_power_hit_leaves_one_fifty_after_fifty_ticks() {
        let mut battle = create_duel();
        let mut stage = InstantStage::default();
        open_gate(&mut battle, &mut stage);

        battle.send_attack(Side::Trainer, Attack::new("thunderbolt", 50));
        tick(&mut battle, &mut stage, 50);

        assert_eq!(health(&battle, Side::Opponent), 150);
        assert_eq!(health(&battle, Side::Trainer), 200);
        assert_eq!(battle.turn(), Side::Trainer);
    }

    #[test]
    fn test_trainer_drain_keeps_the_switch_delay_running() {
        let mut battle = create_duel();
        let mut stage = InstantStage::default();
        open_gate(&mut battle, &mut stage);
        let before = battle.timers().get(DELAY_SWITCH_TURN).unwrap().remaining();

        battle.send_attack(Side::Opponent, Attack::new("rock-throw", 20));
        tick(&mut battle, &mut stage, 21);

        assert_eq!(health(&battle, Side::Trainer), 180);
        assert_eq!(battle.current(Side::Trainer).unwrap().state.health_drain_remaining, None);
        assert_eq!(battle.turn(), Side::Trainer);
        assert!(!battle.current(Side::Opponent).unwrap().state.attacking);
        // Only an opponent-side drain resets the switch delay.
        assert_eq!(
            battle.timers().get(DELAY_SWITCH_TURN).unwrap().remaining(),
            before.saturating_sub(21)
        );
    }

    #[test]
    fn test_every_opponent_turn_pays_the_switch_delay() {
        let mut battle = create_duel();
        let mut stage = InstantStage::default();
        open_gate(&mut battle, &mut stage);

        battle.send_attack(Side::Trainer, Attack::new("thundershock", 5));
        tick(&mut battle, &mut stage, 6);
        assert_eq!(battle.turn(), Side::Opponent);
        assert_eq!(battle.timers().get(DELAY_SWITCH_TURN).unwrap().remaining(), 29);

        tick(&mut battle, &mut stage, 28);
        assert_eq!(battle.current(Side::Trainer).unwrap().state.health_drain_remaining, None);
        assert!(!battle.current(Side::Opponent).unwrap().state.attacking);

        tick(&mut battle, &mut stage, 1);
        let drain = battle.current(Side::Trainer).unwrap().state.health_drain_remaining;
        assert!(matches!(drain, Some(40 | 50 | 60 | 70)), "unexpected drain {:?}", drain);
        assert!(battle.current(Side::Opponent).unwrap().state.attacking);
    }

    #[test]
    fn test_opponent_drain_waits_for_the_choose_delay() {
        let mut battle = create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").build()],
            vec![TestCombatantBuilder::new("onix").build()],
        );
        let mut stage = InstantStage::default();
        tick(&mut battle, &mut stage, 2);
        assert!(battle.current(Side::Trainer).unwrap().state.ready);

        // The opponent side is untouched until the choose delay has run out.
        tick(&mut battle, &mut stage, 57);
        assert!(!battle.current(Side::Opponent).unwrap().state.ready);
        assert_eq!(battle.message(), "");

        tick(&mut battle, &mut stage, 1);
        assert_eq!(battle.message(), "Opp chose onix");
    }

    #[test]
    fn test_health_stops_at_zero_when_the_hit_overshoots() {
        let mut battle = create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").build()],
            vec![TestCombatantBuilder::new("onix").with_health(10).build()],
        );
        let mut stage = InstantStage::default();
        open_gate(&mut battle, &mut stage);

        battle.send_attack(Side::Trainer, Attack::new("thunderbolt", 50));
        tick(&mut battle, &mut stage, 10);
        let onix = battle.current(Side::Opponent).unwrap();
        assert_eq!(onix.health, 0);
        assert_eq!(onix.state.health_drain_remaining, Some(40));

        tick(&mut battle, &mut stage, 1);
        assert_eq!(health(&battle, Side::Opponent), 0);
        assert_eq!(battle.message(), "onix has fainted");
    }
}
