use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    Id,
    Identifiable,
    MoveCategory,
    MoveEffect,
    Type,
};

fn default_effect_chance() -> u8 {
    100
}

/// Static data for a single move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Damage class.
    pub category: MoveCategory,
    /// Elemental type.
    #[serde(alias = "type")]
    pub primary_type: Type,
    /// Base power. Absent for status moves.
    #[serde(default)]
    pub base_power: Option<u32>,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Move priority, which takes precedence over speed when ordering actions.
    #[serde(default)]
    pub priority: i8,
    /// Percent chance for secondary effects to activate.
    #[serde(default = "default_effect_chance")]
    pub effect_chance: u8,
    /// Critical-hit stage bonus.
    #[serde(default)]
    pub crit_stage: u8,
    /// Effects, applied in a fixed order after the move hits.
    #[serde(default)]
    pub effects: Vec<MoveEffect>,
}

impl MoveData {
    /// The base power of the move, or 0 if it deals no direct damage.
    pub fn power(&self) -> u32 {
        match self.category {
            MoveCategory::Status => 0,
            _ => self.base_power.unwrap_or(0),
        }
    }

    /// Checks if the move deals direct damage.
    pub fn is_damaging(&self) -> bool {
        self.power() > 0
    }

    /// Checks if the move acts on the opponent at all.
    ///
    /// Moves that only affect the user or the field never miss.
    pub fn affects_target(&self) -> bool {
        self.is_damaging() || self.effects.iter().any(|effect| effect.affects_target())
    }

    /// The hit-count range of the move, if it hits multiple times.
    pub fn multi_hit(&self) -> Option<(u8, u8)> {
        self.effects.iter().find_map(|effect| match effect {
            MoveEffect::MultiHit { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    /// Checks if the move has the full-heal-and-sleep effect.
    pub fn is_rest(&self) -> bool {
        self.effects
            .iter()
            .any(|effect| matches!(effect, MoveEffect::Rest))
    }
}

impl Identifiable for MoveData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
