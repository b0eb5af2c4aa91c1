#[cfg(test)]
mod confusion_test {
    use anyhow::Result;
    use duel::{
        battle::{
            Battle,
            Side,
        },
        data::{
            DataStore,
            Status,
        },
        teams::CombatantData,
    };
    use duel_test_utils::{
        TestBattleBuilder,
        assert_new_logs_eq,
        combatant,
        get_controlled_rng_for_battle,
        skip_new_logs,
        test_data_store,
    };

    fn make_battle(data: &dyn DataStore, a: CombatantData, b: CombatantData) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_combatant(Side::A, a)
            .with_combatant(Side::B, b)
            .build(data)
    }

    #[test]
    fn confused_combatant_may_still_act() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Gengar", &["Confuse Ray"]),
            combatant("Mew", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Gengar,A|name:Confuse Ray|target:Mew,B",
                "status|mon:Mew,B|status:Confusion",
                "activate|mon:Mew,B|condition:Confusion",
                "move|mon:Mew,B|name:Splash",
                "residual",
            ],
        );
        assert_eq!(battle.combatant(Side::B).status_turns, 4);
    }

    #[test]
    fn confused_combatant_hits_itself() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Gengar", &["Confuse Ray"]),
            combatant("Mew", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        // Accuracy, duration, then the self-hit chance.
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(3, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Gengar,A|name:Confuse Ray|target:Mew,B",
                "status|mon:Mew,B|status:Confusion",
                "activate|mon:Mew,B|condition:Confusion",
                "damage|mon:Mew,B|health:158/175|from:Confusion",
                "residual",
            ],
        );
    }

    #[test]
    fn confusion_wears_off() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Splash"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        battle
            .combatant_mut(Side::A)
            .try_set_status(Status::Confusion, 1);
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "activate|mon:Mew,A|condition:Confusion",
                "move|mon:Mew,A|name:Splash",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "curestatus|mon:Mew,A|status:Confusion",
                "turn|turn:2",
                "move|mon:Mew,A|name:Splash",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
    }
}
