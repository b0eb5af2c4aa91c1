#[cfg(test)]
mod stat_stages_test {
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
    fn raised_attack_increases_damage() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Swords Dance", "Tackle"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(1, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Swords Dance",
                "boost|mon:Mew,A|stat:atk|by:2",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,A|name:Tackle|target:Magikarp,B",
                "damage|mon:Magikarp,B|health:37/95",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn stages_are_capped() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Swords Dance"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        battle.combatant_mut(Side::A).boosts.atk = 5;
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Swords Dance",
                "boost|mon:Mew,A|stat:atk|by:1",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,A|name:Swords Dance",
                "boost|mon:Mew,A|stat:atk|by:0",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
        assert_eq!(battle.combatant(Side::A).boosts.atk, 6);
    }

    #[test]
    fn lowered_attack_decreases_damage() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Growl"]),
            combatant("Magikarp", &["Tackle"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Growl|target:Magikarp,B",
                "unboost|mon:Magikarp,B|stat:atk|by:1",
                "move|mon:Magikarp,B|name:Tackle|target:Mew,A",
                "damage|mon:Mew,A|health:171/175",
                "residual",
            ],
        );
    }
}
