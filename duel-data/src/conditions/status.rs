use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A major status condition.
///
/// A combatant holds at most one status at a time.
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
pub enum Status {
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Bad Poison"]
    #[alias = "tox"]
    #[alias = "badly-poisoned"]
    #[alias = "badly poisoned"]
    BadlyPoisoned,
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Confusion"]
    Confusion,
}
