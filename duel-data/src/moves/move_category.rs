use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The damage class of a move.
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
pub enum MoveCategory {
    /// Uses the attack and defense stats.
    #[string = "Physical"]
    Physical,
    /// Uses the special attack and special defense stats.
    #[string = "Special"]
    Special,
    /// Deals no direct damage.
    #[string = "Status"]
    Status,
}
