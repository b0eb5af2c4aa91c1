use duel_prng::{
    RandomSource,
    SeededRandomSource,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Battle engine option for how the random factor in the damage calculation is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Draw the random factor from the battle's random source.
    ///
    /// This is the default behavior.
    Randomize,
    /// Always use the maximum random factor.
    Max,
    /// Always use the minimum random factor.
    Min,
}

/// How the battle engine should resolve ties when ordering actions by speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTieResolution {
    /// Flip a coin using the battle's random source.
    Random,
    /// Side A moves first.
    Keep,
    /// Side B moves first.
    Reverse,
}

fn default_random_source_factory() -> fn(seed: Option<u64>) -> Box<dyn RandomSource> {
    |seed: Option<u64>| Box::new(SeededRandomSource::new(seed))
}

fn default_turn_limit() -> u32 {
    100
}

fn default_field_duration() -> u8 {
    5
}

fn default_randomize() -> RandomizeBaseDamage {
    RandomizeBaseDamage::Randomize
}

fn default_random() -> SpeedTieResolution {
    SpeedTieResolution::Random
}

/// Options that change how the battle engine itself behaves, which is not specific to any
/// individual battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Number of turns after which the battle ends in a draw.
    #[serde(default = "default_turn_limit")]
    pub turn_limit: u32,
    /// Number of turns weather and terrain last after being set by a move.
    #[serde(default = "default_field_duration")]
    pub field_duration: u8,
    /// Describes how the random factor in the damage calculation is drawn.
    ///
    /// Pinning the factor is useful for tests against the damage formula.
    #[serde(default = "default_randomize")]
    pub randomize_base_damage: RandomizeBaseDamage,
    /// Describes how speed ties are resolved.
    ///
    /// Many tests involve speed ties, which complicates results when the random sequence shifts.
    #[serde(default = "default_random")]
    pub speed_tie_resolution: SpeedTieResolution,
    /// Function for creating the battle's random source.
    ///
    /// Primarily useful for tests that need fine-grained control over randomness.
    #[serde(skip, default = "default_random_source_factory")]
    pub random_source_factory: fn(seed: Option<u64>) -> Box<dyn RandomSource>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            turn_limit: default_turn_limit(),
            field_duration: default_field_duration(),
            randomize_base_damage: default_randomize(),
            speed_tie_resolution: default_random(),
            random_source_factory: default_random_source_factory(),
        }
    }
}

/// Options for a single battle.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Seed for the battle's random source.
    ///
    /// Battles created with the same seed, combatants and choices play out identically.
    #[serde(default)]
    pub seed: Option<u64>,
}
