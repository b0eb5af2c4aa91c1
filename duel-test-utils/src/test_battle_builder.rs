use anyhow::Result;
use duel::{
    battle::{
        Battle,
        BattleEngineOptions,
        BattleOptions,
        RandomizeBaseDamage,
        Side,
        SpeedTieResolution,
    },
    error::WrapOptionError,
    teams::CombatantData,
};
use duel_data::{
    DataStore,
    StatTable,
};

use crate::ControlledRandomSource;

/// Creates a level 50 combatant with perfect IVs and no EVs.
pub fn combatant(species: &str, moves: &[&str]) -> CombatantData {
    CombatantData {
        name: None,
        species: species.to_owned(),
        level: 50,
        ivs: StatTable::uniform(31),
        evs: StatTable::default(),
        moves: moves.iter().map(|name| (*name).to_owned()).collect(),
        item: None,
    }
}

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    combatants: [Option<CombatantData>; 2],
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    ///
    /// Speed ties are resolved in favor of side A by default, so that tests do not depend on the
    /// random sequence for ordering.
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions {
                speed_tie_resolution: SpeedTieResolution::Keep,
                ..Default::default()
            },
            combatants: [None, None],
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self, data: &dyn DataStore) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.random_source_factory =
                |seed: Option<u64>| Box::new(ControlledRandomSource::neutral(seed));
        }
        let [a, b] = self.combatants;
        let a = a.wrap_expectation("side A has no combatant")?;
        let b = b.wrap_expectation("side B has no combatant")?;
        Battle::new(&a, &b, data, self.options, self.engine_options)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Uses a [`ControlledRandomSource`] that produces neutral values unless faked.
    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_speed_tie_resolution(mut self, resolution: SpeedTieResolution) -> Self {
        self.engine_options.speed_tie_resolution = resolution;
        self
    }

    pub fn with_base_damage_randomization(mut self, randomize: RandomizeBaseDamage) -> Self {
        self.engine_options.randomize_base_damage = randomize;
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.engine_options.turn_limit = turn_limit;
        self
    }

    pub fn with_field_duration(mut self, field_duration: u8) -> Self {
        self.engine_options.field_duration = field_duration;
        self
    }

    pub fn with_combatant(mut self, side: Side, data: CombatantData) -> Self {
        self.combatants[side.index()] = Some(data);
        self
    }
}
