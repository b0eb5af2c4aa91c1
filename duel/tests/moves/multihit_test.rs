#[cfg(test)]
mod multihit_test {
    use anyhow::Result;
    use duel::{
        battle::{
            Battle,
            Side,
        },
        data::DataStore,
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
    fn hits_up_to_five_times() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Venusaur", &["Bullet Seed"]),
            combatant("Snorlax", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Venusaur,A|name:Bullet Seed|target:Snorlax,B",
                "damage|mon:Snorlax,B|health:213/235",
                "damage|mon:Snorlax,B|health:191/235",
                "damage|mon:Snorlax,B|health:169/235",
                "damage|mon:Snorlax,B|health:147/235",
                "damage|mon:Snorlax,B|health:125/235",
                "hitcount|hits:5",
                "move|mon:Snorlax,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn hit_count_is_drawn_from_weighted_table() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Venusaur", &["Bullet Seed"]),
            combatant("Snorlax", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        // Accuracy, then the hit count.
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(2, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Venusaur,A|name:Bullet Seed|target:Snorlax,B",
                "damage|mon:Snorlax,B|health:213/235",
                "damage|mon:Snorlax,B|health:191/235",
                "hitcount|hits:2",
                "move|mon:Snorlax,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn fixed_hit_count_logs_effectiveness_once() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Machamp", &["Double Kick"]),
            combatant("Snorlax", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Machamp,A|name:Double Kick|target:Snorlax,B",
                "super-effective|mon:Snorlax,B",
                "damage|mon:Snorlax,B|health:160/235",
                "damage|mon:Snorlax,B|health:85/235",
                "hitcount|hits:2",
                "move|mon:Snorlax,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn stops_when_target_faints() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Machamp", &["Double Kick"]),
            combatant("Snorlax", &["Splash"]),
        )
        .unwrap();
        battle.combatant_mut(Side::B).current_hp = 30;
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Machamp,A|name:Double Kick|target:Snorlax,B",
                "super-effective|mon:Snorlax,B",
                "damage|mon:Snorlax,B|health:0/235",
                "faint|mon:Snorlax,B",
                "hitcount|hits:1",
                "residual",
                "win|side:A|name:Machamp",
            ],
        );
    }
}
