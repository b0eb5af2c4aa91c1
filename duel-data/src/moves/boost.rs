use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A stat that can be raised or lowered in stages during battle.
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
pub enum Boost {
    #[string = "atk"]
    #[alias = "attack"]
    Atk,
    #[string = "def"]
    #[alias = "defense"]
    Def,
    #[string = "spa"]
    #[alias = "special-attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "special-defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "speed"]
    Spe,
    #[string = "acc"]
    #[alias = "accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "evasion"]
    Evasion,
}

impl Boost {
    /// All boosts, in table order.
    pub const ALL: [Boost; 7] = [
        Boost::Atk,
        Boost::Def,
        Boost::SpAtk,
        Boost::SpDef,
        Boost::Spe,
        Boost::Accuracy,
        Boost::Evasion,
    ];

    /// Maximum magnitude of a stage.
    pub const MAX_STAGE: i8 = 6;
}

impl TryFrom<Stat> for Boost {
    type Error = anyhow::Error;
    fn try_from(value: Stat) -> Result<Self, Self::Error> {
        match value {
            Stat::HP => Err(anyhow::Error::msg("HP cannot be boosted")),
            Stat::Atk => Ok(Self::Atk),
            Stat::Def => Ok(Self::Def),
            Stat::SpAtk => Ok(Self::SpAtk),
            Stat::SpDef => Ok(Self::SpDef),
            Stat::Spe => Ok(Self::Spe),
        }
    }
}

/// A table of stages for every boostable stat.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Returns the value for the given boost.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        }
    }

    /// Sets the value for the given boost.
    pub fn set(&mut self, boost: Boost, value: i8) {
        *self.get_mut(boost) = value;
    }

    /// Adds `delta` stages to the given boost, clamping to [-6, 6].
    ///
    /// Returns the change actually applied.
    pub fn boost(&mut self, boost: Boost, delta: i8) -> i8 {
        let value = self.get_mut(boost);
        let before = *value;
        *value = before
            .saturating_add(delta)
            .clamp(-Boost::MAX_STAGE, Boost::MAX_STAGE);
        *value - before
    }

    /// Iterates over all non-zero entries, in table order.
    pub fn non_zero_entries(&self) -> impl Iterator<Item = (Boost, i8)> + '_ {
        Boost::ALL
            .into_iter()
            .map(|boost| (boost, self.get(boost)))
            .filter(|(_, value)| *value != 0)
    }

    /// Checks if every stage is zero.
    pub fn is_empty(&self) -> bool {
        self.non_zero_entries().next().is_none()
    }
}
