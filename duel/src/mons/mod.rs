mod calculations;
mod combatant;
mod comparison;
mod status;

pub use calculations::{
    accuracy_stage_multiplier,
    calculate_stat,
    calculate_stats,
    crit_chance_denominator,
    stage_multiplier,
};
pub use combatant::{
    Combatant,
    CombatantSnapshot,
    MoveSlot,
    StatusInfliction,
};
pub use comparison::{
    StatComparison,
    compare_stats,
};
pub use status::{
    is_immune_to_status,
    residual_status_damage,
    status_duration,
};
