use duel_data::{
    Stat,
    StatTable,
};
use num::rational::Ratio;

/// Calculates a single battle stat from its base value, IV, EV and level.
pub fn calculate_stat(base: u16, iv: u16, ev: u16, level: u8, is_hp: bool) -> u16 {
    let level = level as u32;
    let value = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level / 100;
    let value = if is_hp { value + level + 10 } else { value + 5 };
    value as u16
}

/// Calculates all battle stats from a base stat table, IVs, EVs and level.
pub fn calculate_stats(
    base_stats: &StatTable,
    ivs: &StatTable,
    evs: &StatTable,
    level: u8,
) -> StatTable {
    base_stats
        .entries()
        .map(|(stat, base)| {
            (
                stat,
                calculate_stat(base, ivs.get(stat), evs.get(stat), level, stat == Stat::HP),
            )
        })
        .collect()
}

/// The multiplier for a stat stage on attack, defense, special attack, special defense or
/// speed.
pub fn stage_multiplier(stage: i8) -> Ratio<u64> {
    let magnitude = stage.unsigned_abs() as u64;
    if stage >= 0 {
        Ratio::new(2 + magnitude, 2)
    } else {
        Ratio::new(2, 2 + magnitude)
    }
}

/// The multiplier for the combined accuracy and evasion stage of a hit check.
pub fn accuracy_stage_multiplier(stage: i8) -> Ratio<u64> {
    let magnitude = stage.unsigned_abs() as u64;
    if stage >= 0 {
        Ratio::new(3 + magnitude, 3)
    } else {
        Ratio::new(3, 3 + magnitude)
    }
}

/// The denominator of the one-in-N chance for a critical hit at the given stage.
pub fn crit_chance_denominator(stage: u8) -> u64 {
    const DENOMINATORS: [u64; 4] = [24, 8, 2, 1];
    DENOMINATORS[stage.min(3) as usize]
}
