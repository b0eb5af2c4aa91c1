mod combatant_data;
mod presets;
mod validator;

pub use combatant_data::CombatantData;
pub use presets::{
    EvPreset,
    IvPreset,
    random_evs,
};
pub use validator::{
    validate_combatant,
    validate_item_data,
    validate_move_data,
};
