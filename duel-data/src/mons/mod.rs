mod species_data;
mod stat;
mod r#type;

pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
};
