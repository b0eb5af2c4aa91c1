use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// One of the two sides of a battle.
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
pub enum Side {
    #[string = "A"]
    A,
    #[string = "B"]
    B,
}

impl Side {
    /// Both sides, in order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The opposing side.
    pub fn other(&self) -> Side {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// The index of the side in a two-element array.
    pub fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}
