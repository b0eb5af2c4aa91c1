use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Fraction,
    Id,
    Identifiable,
    Stat,
    Type,
};

/// The effect of a held item, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeldItemEffect {
    /// Heals a fraction of maximum HP at the end of every turn.
    ///
    /// If restricted to a type, holders without that type lose the same fraction instead.
    HealPerTurn {
        fraction: Fraction,
        #[serde(default)]
        restricted_to: Option<Type>,
    },
    /// Heals once when HP drops to or below a threshold. Consumed on use.
    ConditionalHeal {
        threshold: Fraction,
        fraction: Fraction,
    },
    /// Multiplies one or more stats.
    StatBoost {
        stats: Vec<Stat>,
        multiplier: Fraction,
    },
    /// Multiplies damage dealt, at the cost of a fraction of maximum HP per move.
    DamageBoostWithRecoil {
        multiplier: Fraction,
        recoil: Fraction,
    },
    /// Survives a lethal hit at full HP with 1 HP left. Consumed on use.
    SurviveLethalHit,
    /// Has a chance to survive any lethal hit with 1 HP left.
    SurviveLethalChance { chance: Fraction },
    /// Has a chance to move first among moves of the same priority.
    PriorityChance { chance: Fraction },
    /// Multiplies damage of moves of one type.
    TypeBoost {
        #[serde(rename = "type")]
        boosted_type: Type,
        multiplier: Fraction,
    },
    /// Multiplies damage of super-effective moves.
    EffectivenessBoost { multiplier: Fraction },
}

impl HeldItemEffect {
    /// The multiplier applied to the given stat, if any.
    pub fn stat_multiplier(&self, stat: Stat) -> Option<Fraction> {
        match self {
            Self::StatBoost { stats, multiplier } if stats.contains(&stat) => Some(*multiplier),
            _ => None,
        }
    }
}

/// Data for a single held item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Effect of the item.
    pub effect: HeldItemEffect,
}

impl Identifiable for ItemData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
