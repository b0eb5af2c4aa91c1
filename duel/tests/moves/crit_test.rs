#[cfg(test)]
mod crit_test {
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
    fn critical_hit_multiplies_damage() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Pikachu", &["Tackle"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(2, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Pikachu,A|name:Tackle|target:Magikarp,B",
                "crit|mon:Magikarp,B",
                "damage|mon:Magikarp,B|health:66/95",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn critical_hit_ignores_lowered_attack() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Pikachu", &["Tackle"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        battle.combatant_mut(Side::A).boosts.atk = -2;
        battle.combatant_mut(Side::B).boosts.def = 2;
        skip_new_logs(&mut battle);

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(2, 0)]);
        let outcome = battle.play_turn(0, 0).unwrap();
        assert_eq!(outcome.combatant(Side::B).current_hp, 66);
    }

    #[test]
    fn focus_energy_and_high_crit_move_always_crit() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Focus Energy", "Slash"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(1, 0).is_ok());
        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(1, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Slash|target:Magikarp,B",
                "damage|mon:Magikarp,B|health:44/95",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,A|name:Focus Energy",
                "critboost|mon:Mew,A|stage:2",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:3",
                "move|mon:Mew,A|name:Slash|target:Magikarp,B",
                "crit|mon:Magikarp,B",
                "damage|mon:Magikarp,B|health:0/95",
                "faint|mon:Magikarp,B",
                "residual",
                "win|side:A|name:Mew",
            ],
        );
    }

    #[test]
    fn crit_stage_is_capped() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Focus Energy"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(0, 0).is_ok());
        assert_eq!(battle.combatant(Side::A).crit_stage, 3);
        assert!(
            battle
                .all_logs()
                .any(|log| log == "critboost|mon:Mew,A|stage:3")
        );
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_eq!(battle.combatant(Side::A).crit_stage, 3);
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:3",
                "move|mon:Mew,A|name:Focus Energy",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
    }
}
