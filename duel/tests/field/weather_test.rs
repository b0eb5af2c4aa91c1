#[cfg(test)]
mod weather_test {
    use anyhow::Result;
    use duel::{
        battle::{
            Battle,
            Side,
        },
        data::{
            DataStore,
            Weather,
        },
        teams::CombatantData,
    };
    use duel_test_utils::{
        TestBattleBuilder,
        assert_new_logs_eq,
        combatant,
        skip_new_logs,
        test_data_store,
    };

    fn make_battle(
        data: &dyn DataStore,
        field_duration: u8,
        a: CombatantData,
        b: CombatantData,
    ) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_controlled_rng(true)
            .with_field_duration(field_duration)
            .with_combatant(Side::A, a)
            .with_combatant(Side::B, b)
            .build(data)
    }

    #[test]
    fn rain_boosts_water_moves() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            5,
            combatant("Blastoise", &["Rain Dance", "Water Gun"]),
            combatant("Mew", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(1, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,B|name:Splash",
                "move|mon:Blastoise,A|name:Rain Dance",
                "weather|weather:Rain",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,B|name:Splash",
                "move|mon:Blastoise,A|name:Water Gun|target:Mew,B",
                "damage|mon:Mew,B|health:136/175",
                "residual",
            ],
        );
        assert_eq!(battle.field().weather, Some(Weather::Rain));
        assert_eq!(battle.field().weather_turns, 3);
    }

    #[test]
    fn sun_boosts_fire_moves() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            5,
            combatant("Charizard", &["Sunny Day", "Ember"]),
            combatant("Venusaur", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(1, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Charizard,A|name:Sunny Day",
                "weather|weather:Sun",
                "move|mon:Venusaur,B|name:Splash",
                "residual",
                "turn|turn:2",
                "move|mon:Charizard,A|name:Ember|target:Venusaur,B",
                "super-effective|mon:Venusaur,B",
                "damage|mon:Venusaur,B|health:61/155",
                "move|mon:Venusaur,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn weather_expires() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            2,
            combatant("Blastoise", &["Rain Dance", "Splash"]),
            combatant("Mew", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(1, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,B|name:Splash",
                "move|mon:Blastoise,A|name:Rain Dance",
                "weather|weather:Rain",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,B|name:Splash",
                "move|mon:Blastoise,A|name:Splash",
                "residual",
                "clearweather|weather:Rain",
            ],
        );
        assert_eq!(battle.field().weather, None);
    }

    #[test]
    fn sandstorm_damages_unprotected_types() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            5,
            combatant("Mew", &["Splash"]),
            combatant("Tyranitar", &["Sandstorm"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Splash",
                "move|mon:Tyranitar,B|name:Sandstorm",
                "weather|weather:Sandstorm",
                "residual",
                "damage|mon:Mew,A|health:165/175|from:Sandstorm",
            ],
        );
    }

    #[test]
    fn hail_damages_unprotected_types() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            5,
            combatant("Mew", &["Splash"]),
            combatant("Lapras", &["Hail"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Splash",
                "move|mon:Lapras,B|name:Hail",
                "weather|weather:Hail",
                "residual",
                "damage|mon:Mew,A|health:165/175|from:Hail",
            ],
        );
    }

    #[test]
    fn field_move_fails_when_conditions_cannot_last() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            0,
            combatant("Mew", &["Sunny Day", "Grassy Terrain"]),
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
                "move|mon:Mew,A|name:Sunny Day",
                "fail|mon:Mew,A",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:2",
                "move|mon:Mew,A|name:Grassy Terrain",
                "fail|mon:Mew,A",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
        assert_eq!(battle.field().weather, None);
        assert_eq!(battle.field().terrain, None);
    }
}
