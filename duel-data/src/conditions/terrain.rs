use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Type;

/// Terrain on the field.
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
pub enum Terrain {
    #[string = "Grassy Terrain"]
    #[alias = "grassy"]
    Grassy,
    #[string = "Electric Terrain"]
    #[alias = "electric"]
    Electric,
    #[string = "Psychic Terrain"]
    #[alias = "psychic"]
    Psychic,
    #[string = "Misty Terrain"]
    #[alias = "misty"]
    Misty,
}

impl Terrain {
    /// The move type powered up by the terrain.
    pub fn boosted_type(&self) -> Type {
        match self {
            Self::Grassy => Type::Grass,
            Self::Electric => Type::Electric,
            Self::Psychic => Type::Psychic,
            Self::Misty => Type::Fairy,
        }
    }
}
