use thiserror::Error;

/// A chosen move has no static record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{combatant} has no data for move {name}")]
pub struct MissingMoveDataError {
    pub combatant: String,
    pub name: String,
}

/// A move choice does not refer to a move slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{combatant} has no move in slot {slot}")]
pub struct InvalidChoiceError {
    pub combatant: String,
    pub slot: usize,
}

/// A turn was requested after the battle reached its terminal state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("battle is already over")]
pub struct BattleEndedError;
