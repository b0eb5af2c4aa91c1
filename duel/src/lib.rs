//! A battle engine for resolving one-on-one, turn-based encounters between two combatants.
//!
//! Combatants are built from [`teams::CombatantData`] and static records in a
//! [`data::DataStore`]. A [`battle::Battle`] resolves one turn at a time, reporting each turn's
//! events in a [`battle::TurnOutcome`], until one side faints, both do, or the turn limit is
//! reached.

extern crate alloc;

pub mod battle;
pub mod error;
pub mod log;
pub mod mons;
pub mod teams;

/// Static data used by the engine.
pub mod data {
    pub use duel_data::*;
}

/// Random number generation used by the engine.
pub mod rng {
    pub use duel_prng::*;
}
