use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Weather on the field.
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
pub enum Weather {
    #[string = "Sun"]
    #[alias = "sunny"]
    #[alias = "harsh sunlight"]
    Sun,
    #[string = "Rain"]
    #[alias = "rainy"]
    Rain,
    #[string = "Sandstorm"]
    #[alias = "sand"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
}
