mod battle;
mod battle_logs;
mod battle_options;
mod choice;
mod damage;
mod field;
mod outcome;
mod side;
mod turn;

pub use battle::Battle;
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
    RandomizeBaseDamage,
    SpeedTieResolution,
};
pub use choice::{
    FixedMoveChooser,
    MoveChooser,
    RandomMoveChooser,
};
pub use damage::{
    Damage,
    DamageContext,
    Effectiveness,
    calculate_damage,
    random_factor,
    type_effectiveness,
};
pub use field::{
    Field,
    FieldExpiry,
};
pub use outcome::{
    BattleOutcome,
    BattleResult,
    TurnOutcome,
};
pub use side::Side;
use turn::TurnResolver;
