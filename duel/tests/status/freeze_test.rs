#[cfg(test)]
mod freeze_test {
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
    fn frozen_combatant_cannot_act() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Tackle"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        assert_eq!(
            battle.combatant_mut(Side::A).try_set_status(Status::Freeze, 2),
            duel::mons::StatusInfliction::Inflicted
        );
        skip_new_logs(&mut battle);

        assert!(battle.play_turn(0, 0).is_ok());
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "cant|mon:Mew,A|reason:Freeze",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "turn|turn:2",
                "cant|mon:Mew,A|reason:Freeze",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
                "curestatus|mon:Mew,A|status:Freeze",
            ],
        );
    }

    #[test]
    fn thaws_before_acting() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Tackle"]),
            combatant("Magikarp", &["Splash"]),
        )
        .unwrap();
        battle
            .combatant_mut(Side::A)
            .try_set_status(Status::Freeze, 3);
        skip_new_logs(&mut battle);

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "curestatus|mon:Mew,A|status:Freeze",
                "move|mon:Mew,A|name:Tackle|target:Magikarp,B",
                "damage|mon:Magikarp,B|health:65/95",
                "move|mon:Magikarp,B|name:Splash",
                "residual",
            ],
        );
    }

    #[test]
    fn secondary_effect_freezes() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Ice Beam"]),
            combatant("Magikarp", &["Tackle"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(4, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Ice Beam|target:Magikarp,B",
                "not-very-effective|mon:Magikarp,B",
                "damage|mon:Magikarp,B|health:35/95",
                "status|mon:Magikarp,B|status:Freeze",
                "cant|mon:Magikarp,B|reason:Freeze",
                "residual",
            ],
        );
    }

    #[test]
    fn ice_types_cannot_be_frozen() {
        let data = test_data_store().unwrap();
        let mut battle = make_battle(
            &data,
            combatant("Mew", &["Ice Beam"]),
            combatant("Lapras", &["Splash"]),
        )
        .unwrap();
        skip_new_logs(&mut battle);

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(4, 0)]);
        assert!(battle.play_turn(0, 0).is_ok());
        assert_new_logs_eq(
            &mut battle,
            &[
                "turn|turn:1",
                "move|mon:Mew,A|name:Ice Beam|target:Lapras,B",
                "not-very-effective|mon:Lapras,B",
                "damage|mon:Lapras,B|health:195/205",
                "move|mon:Lapras,B|name:Splash",
                "residual",
            ],
        );
        assert_eq!(battle.combatant(Side::B).status, None);
    }
}
