#[cfg(test)]
mod determinism_test {
    use duel::{
        battle::{
            BattleOutcome,
            BattleResult,
            MoveChooser,
            RandomMoveChooser,
            Side,
            SpeedTieResolution,
        },
        teams::CombatantData,
    };
    use duel_test_utils::{
        TestBattleBuilder,
        combatant,
        test_data_store,
    };
    use pretty_assertions::assert_eq;

    fn play(seed: u64) -> (BattleResult, Vec<String>) {
        let data = test_data_store().unwrap();
        let mut battle = TestBattleBuilder::new()
            .with_seed(seed)
            .with_speed_tie_resolution(SpeedTieResolution::Random)
            .with_combatant(
                Side::A,
                combatant("Mew", &["Tackle", "Psychic", "Thunder Wave", "Recover"]),
            )
            .with_combatant(
                Side::B,
                combatant("Snorlax", &["Tackle", "Double-Edge", "Rest", "Growl"]),
            )
            .build(&data)
            .unwrap();
        let result = battle
            .run(&mut RandomMoveChooser, &mut RandomMoveChooser)
            .unwrap();
        (result, battle.all_logs().map(|log| log.to_owned()).collect())
    }

    #[test]
    fn same_seed_produces_same_battle() {
        assert_eq!(play(123456), play(123456));
    }

    #[test]
    fn different_seeds_produce_different_battles() {
        let logs = (0..5).map(|seed| play(seed).1).collect::<Vec<_>>();
        assert!(logs.iter().skip(1).any(|other| other != &logs[0]));
    }

    #[test]
    fn every_battle_reaches_terminal_state() {
        for seed in 0..20 {
            let (result, logs) = play(seed);
            assert!(result.turns >= 1 && result.turns <= 100, "{result:?}");
            let last = logs.last().map(|log| log.as_str());
            match result.outcome {
                BattleOutcome::Win(side) => {
                    assert!(last.is_some_and(|log| log.starts_with(&format!("win|side:{side}"))))
                }
                BattleOutcome::Tie => assert_eq!(last, Some("tie")),
                BattleOutcome::Draw => assert_eq!(last, Some("draw")),
            }
        }
    }

    fn holding(item: &str, species: &str, moves: &[&str]) -> CombatantData {
        CombatantData {
            item: Some(item.to_owned()),
            ..combatant(species, moves)
        }
    }

    fn matchups() -> Vec<(CombatantData, CombatantData)> {
        vec![
            (
                holding(
                    "Black Sludge",
                    "Snorlax",
                    &["Double-Edge", "Rest", "Tackle", "Sandstorm"],
                ),
                holding(
                    "Leftovers",
                    "Venusaur",
                    &["Giga Drain", "Grassy Terrain", "Toxic", "Recover"],
                ),
            ),
            (
                holding(
                    "Life Orb",
                    "Pikachu",
                    &["Thunderbolt", "Quick Attack", "Electric Terrain", "Thunder Wave"],
                ),
                holding(
                    "Black Sludge",
                    "Gengar",
                    &["Shadow Ball", "Will-O-Wisp", "Confuse Ray", "Hail"],
                ),
            ),
            (
                holding(
                    "Sitrus Berry",
                    "Mew",
                    &["Psychic", "Recover", "Swords Dance", "Rain Dance"],
                ),
                holding(
                    "Focus Sash",
                    "Tyranitar",
                    &["Stone Edge", "Earthquake", "Bite", "Sunny Day"],
                ),
            ),
            (
                holding(
                    "Focus Band",
                    "Charizard",
                    &["Flamethrower", "Slash", "Focus Energy", "Sunny Day"],
                ),
                holding(
                    "Sitrus Berry",
                    "Lapras",
                    &["Ice Beam", "Water Gun", "Rest", "Spore"],
                ),
            ),
            (
                holding(
                    "Life Orb",
                    "Machamp",
                    &["Double Kick", "Double-Edge", "Bullet Seed", "Rest"],
                ),
                holding(
                    "Leftovers",
                    "Umbreon",
                    &["Bite", "Toxic", "Double Team", "Giga Drain"],
                ),
            ),
        ]
    }

    #[test]
    fn health_stays_within_bounds_every_turn() {
        let data = test_data_store().unwrap();
        let matchups = matchups();
        for seed in 0..100 {
            let (a, b) = &matchups[seed as usize % matchups.len()];
            let mut battle = TestBattleBuilder::new()
                .with_seed(seed)
                .with_speed_tie_resolution(SpeedTieResolution::Random)
                .with_combatant(Side::A, a.clone())
                .with_combatant(Side::B, b.clone())
                .build(&data)
                .unwrap();

            let mut fainted = [false, false];
            while !battle.is_over() {
                let mon_a = battle.combatant(Side::A).clone();
                let mon_b = battle.combatant(Side::B).clone();
                let slot_a = RandomMoveChooser
                    .choose_move(&mon_a, &mon_b, battle.random_source_mut())
                    .unwrap();
                let slot_b = RandomMoveChooser
                    .choose_move(&mon_b, &mon_a, battle.random_source_mut())
                    .unwrap();
                let outcome = battle.play_turn(slot_a, slot_b).unwrap();

                for side in Side::BOTH {
                    let snapshot = outcome.combatant(side);
                    assert!(
                        snapshot.current_hp <= snapshot.max_hp,
                        "seed {seed}, turn {}: {snapshot:?}",
                        outcome.turn
                    );
                    assert_eq!(snapshot.current_hp, battle.combatant(side).current_hp);
                    if fainted[side.index()] {
                        assert_eq!(snapshot.current_hp, 0, "seed {seed}: revived {snapshot:?}");
                    }
                    fainted[side.index()] = snapshot.current_hp == 0;
                }
            }
        }
    }
}
