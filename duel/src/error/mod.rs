mod battle_errors;
mod general;
mod validation_error;
mod wrap;

pub use battle_errors::{
    BattleEndedError,
    InvalidChoiceError,
    MissingMoveDataError,
};
pub use general::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use validation_error::ValidationError;
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};

pub type Error = anyhow::Error;
