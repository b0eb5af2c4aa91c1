use duel_data::{
    Stat,
    StatTable,
};
use duel_prng::{
    RandomSource,
    roll,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

const MAX_IV: u16 = 31;
const MAX_EV: u16 = 252;
const MAX_TOTAL_EVS: u16 = 510;

/// A preset IV spread.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum IvPreset {
    /// 31 in every stat.
    #[string = "Perfect"]
    #[alias = "Competitive"]
    Perfect,
    /// 31 in every stat except special attack, which is 0.
    #[string = "Physical Attacker"]
    PhysicalAttacker,
    /// 31 in every stat except attack, which is 0.
    #[string = "Special Attacker"]
    SpecialAttacker,
    /// A uniform draw from 0 to 31 in every stat.
    #[string = "Random"]
    Random,
}

impl IvPreset {
    /// Generates the spread.
    ///
    /// Only [`IvPreset::Random`] draws from the source.
    pub fn generate(&self, source: &mut dyn RandomSource) -> StatTable {
        match self {
            Self::Perfect => StatTable::uniform(MAX_IV),
            Self::PhysicalAttacker => StatTable {
                spa: 0,
                ..StatTable::uniform(MAX_IV)
            },
            Self::SpecialAttacker => StatTable {
                atk: 0,
                ..StatTable::uniform(MAX_IV)
            },
            Self::Random => Stat::ALL
                .into_iter()
                .map(|stat| (stat, roll::range_inclusive(source, 0, MAX_IV as u64) as u16))
                .collect(),
        }
    }
}

/// A preset EV spread.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum EvPreset {
    #[string = "None"]
    None,
    /// 252 attack and speed.
    #[string = "Physical Sweeper"]
    PhysicalSweeper,
    /// 252 special attack and speed.
    #[string = "Special Sweeper"]
    SpecialSweeper,
    /// 252 HP and defense.
    #[string = "Physical Tank"]
    PhysicalTank,
    /// 252 HP and special defense.
    #[string = "Special Tank"]
    SpecialTank,
    /// 85 in every stat.
    #[string = "Balanced"]
    Balanced,
    /// See [`random_evs`].
    #[string = "Random"]
    Random,
}

impl EvPreset {
    /// Generates the spread.
    ///
    /// Only [`EvPreset::Random`] draws from the source.
    pub fn generate(&self, source: &mut dyn RandomSource) -> StatTable {
        match self {
            Self::None => StatTable::default(),
            Self::PhysicalSweeper => StatTable {
                hp: 4,
                atk: MAX_EV,
                spe: MAX_EV,
                ..Default::default()
            },
            Self::SpecialSweeper => StatTable {
                hp: 4,
                spa: MAX_EV,
                spe: MAX_EV,
                ..Default::default()
            },
            Self::PhysicalTank => StatTable {
                hp: MAX_EV,
                atk: 4,
                def: MAX_EV,
                ..Default::default()
            },
            Self::SpecialTank => StatTable {
                hp: MAX_EV,
                spa: 4,
                spd: MAX_EV,
                ..Default::default()
            },
            Self::Balanced => StatTable::uniform(85),
            Self::Random => random_evs(source),
        }
    }
}

/// Generates a random EV spread that respects the per-stat and total limits.
///
/// Stats are drawn in order, each from whatever is left of the total. Speed takes the remainder,
/// capped at the per-stat limit.
pub fn random_evs(source: &mut dyn RandomSource) -> StatTable {
    let mut evs = StatTable::default();
    let mut remaining = MAX_TOTAL_EVS;
    for stat in Stat::ALL {
        let value = if stat == Stat::Spe {
            remaining.min(MAX_EV)
        } else {
            roll::range_inclusive(source, 0, remaining.min(MAX_EV) as u64) as u16
        };
        evs.set(stat, value);
        remaining -= value;
    }
    evs
}
