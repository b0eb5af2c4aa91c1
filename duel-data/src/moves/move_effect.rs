use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    BoostTable,
    Fraction,
    Status,
    Terrain,
    Weather,
};

/// The combatant a stat-stage change applies to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    /// The user of the move.
    User,
    /// The opponent.
    #[default]
    Target,
}

/// A single effect of a move, tagged by its category.
///
/// The category set is closed. Data that names an unknown category fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MoveEffect {
    /// Inflicts a status on the target.
    Status { status: Status },
    /// Changes stat stages.
    StatStages {
        #[serde(default)]
        target: EffectTarget,
        boosts: BoostTable,
    },
    /// Sets the weather.
    Weather { weather: Weather },
    /// Sets the terrain.
    Terrain { terrain: Terrain },
    /// Makes the target flinch.
    Flinch,
    /// Raises the user's critical-hit stage.
    CritBoost { stages: u8 },
    /// Hits multiple times in one use.
    MultiHit { min: u8, max: u8 },
    /// The user loses a fraction of the damage dealt.
    Recoil { fraction: Fraction },
    /// The user recovers a fraction of the damage dealt.
    Drain { fraction: Fraction },
    /// The user recovers a fraction of its maximum HP.
    Heal { fraction: Fraction },
    /// The user fully recovers and falls asleep.
    Rest,
}

impl MoveEffect {
    /// Checks if the effect acts on the opponent.
    pub fn affects_target(&self) -> bool {
        match self {
            Self::Status { .. } | Self::Flinch => true,
            Self::StatStages { target, .. } => *target == EffectTarget::Target,
            _ => false,
        }
    }
}
