#[cfg(test)]
mod validation_test {
    use duel::{
        rng::SeededRandomSource,
        teams::{
            CombatantData,
            EvPreset,
            IvPreset,
            validate_combatant,
        },
    };
    use duel_test_utils::{
        assert_error_message,
        combatant,
        test_data_store,
    };

    #[test]
    fn accepts_combatant_from_json() {
        let data = test_data_store().unwrap();
        let combatant: CombatantData = serde_json::from_str(
            r#"{
                "name": "Sparky",
                "species": "Pikachu",
                "moves": ["Thunderbolt", "Quick Attack", "Thunder Wave"],
                "item": "Life Orb",
                "evs": {"spa": 252, "spe": 252, "hp": 4}
            }"#,
        )
        .unwrap();
        assert_eq!(combatant.level, 50);
        assert!(validate_combatant(&combatant, &data).is_ok());
    }

    #[test]
    fn reports_all_problems() {
        let data = test_data_store().unwrap();
        let combatant = CombatantData {
            level: 0,
            item: Some("Rare Candy".to_owned()),
            ..combatant("Mew", &["Tackle", "Swift", "Psychic", "Recover", "Rest"])
        };
        assert_error_message(
            validate_combatant(&combatant, &data),
            "validation failed: Level 0 (on Mew) is outside of [1, 100].; Mew has 5 moves, but the maximum is 4.; Item Rare Candy does not exist.",
        );
    }

    #[test]
    fn preset_spreads_are_legal() {
        let data = test_data_store().unwrap();
        let mut source = SeededRandomSource::new(Some(42));
        for iv_preset in [
            IvPreset::Perfect,
            IvPreset::PhysicalAttacker,
            IvPreset::SpecialAttacker,
            IvPreset::Random,
        ] {
            for ev_preset in [
                EvPreset::None,
                EvPreset::PhysicalSweeper,
                EvPreset::SpecialSweeper,
                EvPreset::PhysicalTank,
                EvPreset::SpecialTank,
                EvPreset::Balanced,
                EvPreset::Random,
            ] {
                let combatant = CombatantData {
                    ivs: iv_preset.generate(&mut source),
                    evs: ev_preset.generate(&mut source),
                    ..combatant("Machamp", &["Double Kick", "Earthquake"])
                };
                assert!(
                    validate_combatant(&combatant, &data).is_ok(),
                    "{iv_preset} / {ev_preset}"
                );
            }
        }
    }
}
