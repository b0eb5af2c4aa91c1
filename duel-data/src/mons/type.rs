use std::fmt;

use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0f64,
            Self::Weak => 0.5,
            Self::Normal => 1f64,
            Self::Strong => 2f64,
        }
    }
}

impl From<f64> for TypeEffectiveness {
    fn from(value: f64) -> Self {
        if value <= f64::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f64::EPSILON {
            Self::Weak
        } else if value <= 1f64 + f64::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f64(self.multiplier()),
            _ => serializer.serialize_u32(self.multiplier() as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TypeEffectivenessVisitor)
    }
}

/// A type chart, keyed by attacking type and then defending type.
///
/// Pairs missing from the chart are neutral.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: HashMap<Type, HashMap<Type, TypeEffectiveness>>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart from `(attacking, defending, effectiveness)` entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Type, Type, TypeEffectiveness)>,
    {
        let mut chart = Self::new();
        for (attacking, defending, effectiveness) in entries {
            chart.set(attacking, defending, effectiveness);
        }
        chart
    }

    /// Sets the effectiveness of one type against another.
    pub fn set(&mut self, attacking: Type, defending: Type, effectiveness: TypeEffectiveness) {
        self.types
            .entry(attacking)
            .or_default()
            .insert(defending, effectiveness);
    }

    /// The effectiveness of an attacking type against a single defending type.
    pub fn get(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// The combined multiplier of an attacking type against all defending types.
    pub fn effectiveness<'t, I>(&self, attacking: Type, defending: I) -> f64
    where
        I: IntoIterator<Item = &'t Type>,
    {
        defending
            .into_iter()
            .map(|defending| self.get(attacking, *defending).multiplier())
            .product()
    }

    /// The standard eighteen-type chart.
    pub fn standard() -> Self {
        use Type::*;
        use TypeEffectiveness::{
            None as Immune,
            Strong as Se,
            Weak as Nve,
        };
        let rows: [(Type, &[(Type, TypeEffectiveness)]); 18] = [
            (Normal, &[(Rock, Nve), (Ghost, Immune), (Steel, Nve)]),
            (
                Fire,
                &[
                    (Fire, Nve),
                    (Water, Nve),
                    (Grass, Se),
                    (Ice, Se),
                    (Bug, Se),
                    (Rock, Nve),
                    (Dragon, Nve),
                    (Steel, Se),
                ],
            ),
            (
                Water,
                &[
                    (Fire, Se),
                    (Water, Nve),
                    (Grass, Nve),
                    (Ground, Se),
                    (Rock, Se),
                    (Dragon, Nve),
                ],
            ),
            (
                Electric,
                &[
                    (Water, Se),
                    (Electric, Nve),
                    (Grass, Nve),
                    (Ground, Immune),
                    (Flying, Se),
                    (Dragon, Nve),
                ],
            ),
            (
                Grass,
                &[
                    (Fire, Nve),
                    (Water, Se),
                    (Grass, Nve),
                    (Poison, Nve),
                    (Ground, Se),
                    (Flying, Nve),
                    (Bug, Nve),
                    (Rock, Se),
                    (Dragon, Nve),
                    (Steel, Nve),
                ],
            ),
            (
                Ice,
                &[
                    (Fire, Nve),
                    (Water, Nve),
                    (Grass, Se),
                    (Ice, Nve),
                    (Ground, Se),
                    (Flying, Se),
                    (Dragon, Se),
                    (Steel, Nve),
                ],
            ),
            (
                Fighting,
                &[
                    (Normal, Se),
                    (Ice, Se),
                    (Poison, Nve),
                    (Flying, Nve),
                    (Psychic, Nve),
                    (Bug, Nve),
                    (Rock, Se),
                    (Ghost, Immune),
                    (Dark, Se),
                    (Steel, Se),
                    (Fairy, Nve),
                ],
            ),
            (
                Poison,
                &[
                    (Grass, Se),
                    (Poison, Nve),
                    (Ground, Nve),
                    (Rock, Nve),
                    (Ghost, Nve),
                    (Steel, Immune),
                    (Fairy, Se),
                ],
            ),
            (
                Ground,
                &[
                    (Fire, Se),
                    (Electric, Se),
                    (Grass, Nve),
                    (Poison, Se),
                    (Flying, Immune),
                    (Bug, Nve),
                    (Rock, Se),
                    (Steel, Se),
                ],
            ),
            (
                Flying,
                &[
                    (Electric, Nve),
                    (Grass, Se),
                    (Fighting, Se),
                    (Bug, Se),
                    (Rock, Nve),
                    (Steel, Nve),
                ],
            ),
            (
                Psychic,
                &[
                    (Fighting, Se),
                    (Poison, Se),
                    (Psychic, Nve),
                    (Dark, Immune),
                    (Steel, Nve),
                ],
            ),
            (
                Bug,
                &[
                    (Fire, Nve),
                    (Grass, Se),
                    (Fighting, Nve),
                    (Poison, Nve),
                    (Flying, Nve),
                    (Psychic, Se),
                    (Ghost, Nve),
                    (Dark, Se),
                    (Steel, Nve),
                    (Fairy, Nve),
                ],
            ),
            (
                Rock,
                &[
                    (Fire, Se),
                    (Ice, Se),
                    (Fighting, Nve),
                    (Ground, Nve),
                    (Flying, Se),
                    (Bug, Se),
                    (Steel, Nve),
                ],
            ),
            (
                Ghost,
                &[(Normal, Immune), (Psychic, Se), (Ghost, Se), (Dark, Nve)],
            ),
            (Dragon, &[(Dragon, Se), (Steel, Nve), (Fairy, Immune)]),
            (
                Dark,
                &[
                    (Fighting, Nve),
                    (Psychic, Se),
                    (Ghost, Se),
                    (Dark, Nve),
                    (Fairy, Nve),
                ],
            ),
            (
                Steel,
                &[
                    (Fire, Nve),
                    (Water, Nve),
                    (Electric, Nve),
                    (Ice, Se),
                    (Rock, Se),
                    (Steel, Nve),
                    (Fairy, Se),
                ],
            ),
            (
                Fairy,
                &[
                    (Fire, Nve),
                    (Fighting, Se),
                    (Poison, Nve),
                    (Dragon, Se),
                    (Dark, Se),
                    (Steel, Nve),
                ],
            ),
        ];
        Self::from_entries(rows.into_iter().flat_map(|(attacking, row)| {
            row.iter()
                .map(move |(defending, effectiveness)| (attacking, *defending, *effectiveness))
        }))
    }
}
