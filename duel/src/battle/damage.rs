use std::fmt::{
    self,
    Display,
};

use duel_data::{
    HeldItemEffect,
    MoveCategory,
    MoveData,
    Stat,
    Status,
    Type,
    TypeChart,
    TypeEffectiveness,
};
use duel_prng::{
    RandomSource,
    roll,
};
use num::rational::Ratio;

use crate::{
    battle::{
        Field,
        RandomizeBaseDamage,
    },
    mons::Combatant,
};

/// How effective a move was against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    /// The move deals no direct damage.
    Status,
    Immune,
    Resisted,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    /// Classifies a combined type multiplier.
    pub fn from_multiplier(multiplier: Ratio<u64>) -> Self {
        let one = Ratio::from_integer(1);
        if multiplier == Ratio::from_integer(0) {
            Self::Immune
        } else if multiplier < one {
            Self::Resisted
        } else if multiplier > one {
            Self::SuperEffective
        } else {
            Self::Neutral
        }
    }
}

impl Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Status => "status",
            Self::Immune => "immune",
            Self::Resisted => "not-very-effective",
            Self::Neutral => "neutral",
            Self::SuperEffective => "super-effective",
        };
        write!(f, "{label}")
    }
}

/// The result of a damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Damage {
    pub amount: u16,
    pub effectiveness: Effectiveness,
}

/// Everything that goes into a single damage calculation.
pub struct DamageContext<'d> {
    pub attacker: &'d Combatant,
    pub defender: &'d Combatant,
    pub move_data: &'d MoveData,
    pub field: &'d Field,
    pub type_chart: &'d TypeChart,
    pub critical: bool,
    /// Random factor in `[0.85, 1.00]`.
    pub random_factor: Ratio<u64>,
}

/// The combined multiplier of an attacking type against all of the defender's types.
pub fn type_effectiveness(chart: &TypeChart, attacking: Type, defending: &[Type]) -> Ratio<u64> {
    defending
        .iter()
        .map(|defending| match chart.get(attacking, *defending) {
            TypeEffectiveness::None => Ratio::from_integer(0),
            TypeEffectiveness::Weak => Ratio::new(1, 2),
            TypeEffectiveness::Normal => Ratio::from_integer(1),
            TypeEffectiveness::Strong => Ratio::from_integer(2),
        })
        .fold(Ratio::from_integer(1), |acc, multiplier| acc * multiplier)
}

/// Draws the random factor for a damage calculation.
///
/// Only [`RandomizeBaseDamage::Randomize`] consumes a value from the source.
pub fn random_factor(option: RandomizeBaseDamage, source: &mut dyn RandomSource) -> Ratio<u64> {
    match option {
        RandomizeBaseDamage::Randomize => Ratio::new(85 + roll::range(source, 0, 16), 100),
        RandomizeBaseDamage::Max => Ratio::from_integer(1),
        RandomizeBaseDamage::Min => Ratio::new(85, 100),
    }
}

fn item_modifier(
    attacker: &Combatant,
    move_type: Type,
    effectiveness: Ratio<u64>,
) -> Ratio<u64> {
    match attacker.item_effect() {
        Some(HeldItemEffect::DamageBoostWithRecoil { multiplier, .. }) => multiplier.as_ratio(),
        Some(HeldItemEffect::TypeBoost {
            boosted_type,
            multiplier,
        }) if *boosted_type == move_type => multiplier.as_ratio(),
        Some(HeldItemEffect::EffectivenessBoost { multiplier })
            if effectiveness > Ratio::from_integer(1) =>
        {
            multiplier.as_ratio()
        }
        _ => Ratio::from_integer(1),
    }
}

/// Calculates the damage a single hit deals.
///
/// All intermediate values are exact. The result is truncated once, at the very end, and is at
/// least 1 for any damaging move the defender is not immune to.
pub fn calculate_damage(context: &DamageContext) -> Damage {
    let DamageContext {
        attacker,
        defender,
        move_data,
        field,
        type_chart,
        critical,
        random_factor,
    } = *context;

    let power = move_data.power();
    if power == 0 {
        return Damage {
            amount: 0,
            effectiveness: Effectiveness::Status,
        };
    }

    let effectiveness = type_effectiveness(type_chart, move_data.primary_type, &defender.types());
    if effectiveness == Ratio::from_integer(0) {
        return Damage {
            amount: 0,
            effectiveness: Effectiveness::Immune,
        };
    }

    let physical = move_data.category == MoveCategory::Physical;
    let (attack_stat, defense_stat) = if physical {
        (Stat::Atk, Stat::Def)
    } else {
        (Stat::SpAtk, Stat::SpDef)
    };

    // Critical hits ignore stat stages that are unfavorable to the attacker.
    let mut attack = attacker.effective_stat(attack_stat);
    let mut defense = defender.effective_stat(defense_stat);
    if critical {
        attack = attack.max(attacker.stat_at_stage(attack_stat, 0));
        defense = defense.min(defender.stat_at_stage(defense_stat, 0));
    }
    if physical && attacker.status == Some(Status::Burn) {
        attack /= 2;
    }
    let defense = defense.max(1) as u64;

    let level = attacker.level as u64;
    let base = (Ratio::new(2 * level, 5) + 2) * power as u64 * attack as u64 / defense / 50 + 2;

    let mut damage = base;
    if attacker.has_type(move_data.primary_type) {
        damage *= Ratio::new(3, 2);
    }
    damage *= effectiveness;
    if critical {
        damage *= Ratio::new(3, 2);
    }
    damage *= field.weather_modifier(move_data.primary_type);
    damage *= field.terrain_modifier(move_data.primary_type);
    damage *= item_modifier(attacker, move_data.primary_type, effectiveness);
    damage *= random_factor;

    let amount = damage.to_integer().clamp(1, u16::MAX as u64) as u16;
    Damage {
        amount,
        effectiveness: Effectiveness::from_multiplier(effectiveness),
    }
}
