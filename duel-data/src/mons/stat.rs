use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat.
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
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "attack"]
    Atk,
    #[string = "def"]
    #[alias = "defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "special-attack"]
    #[alias = "special attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "special-defense"]
    #[alias = "special defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "speed"]
    Spe,
}

impl Stat {
    /// All stats, in table order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];

    /// The human-readable name of the stat.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HP => "HP",
            Self::Atk => "Attack",
            Self::Def => "Defense",
            Self::SpAtk => "Special Attack",
            Self::SpDef => "Special Defense",
            Self::Spe => "Speed",
        }
    }
}

/// Iterator over the entries of a [`StatTable`].
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    index: usize,
}

impl Iterator for StatTableEntries<'_> {
    type Item = (Stat, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = *Stat::ALL.get(self.index)?;
        self.index += 1;
        Some((stat, self.table.get(stat)))
    }
}

/// A table of values for every stat.
///
/// Used for base stats, IVs, EVs and calculated stats alike.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatTable {
    /// A table with every stat set to the same value.
    pub fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries(&self) -> StatTableEntries<'_> {
        StatTableEntries {
            table: self,
            index: 0,
        }
    }

    /// Sums up all stats in the table.
    pub fn sum(&self) -> u32 {
        self.entries().map(|(_, value)| value as u32).sum()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'s> IntoIterator for &'s StatTable {
    type IntoIter = StatTableEntries<'s>;
    type Item = (Stat, u16);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
