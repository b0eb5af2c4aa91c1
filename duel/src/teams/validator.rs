use std::fmt::Display;

use anyhow::Result;
use duel_data::{
    DataStore,
    Fraction,
    HeldItemEffect,
    Id,
    ItemData,
    MoveData,
    MoveEffect,
};
use itertools::Itertools;

use crate::{
    error::ValidationError,
    teams::CombatantData,
};

/// The maximum length of a combatant name.
const MAX_NAME_LENGTH: usize = 30;
const MAX_LEVEL: u8 = 100;
const MAX_IV: u16 = 31;
const MAX_EV: u16 = 252;
const MAX_TOTAL_EVS: u32 = 510;
const MAX_MOVES: usize = 4;

fn lookup<T, F>(kind: &str, name: &str, problems: &mut ValidationError, get: F) -> Option<T>
where
    F: FnOnce(&Id) -> Result<Option<T>>,
{
    match get(&Id::from(name)) {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            problems.add_problem(format!("{kind} {name} does not exist."));
            None
        }
        Err(error) => {
            problems.add_problem(format!(
                "Failed to look up {} {name}: {error}.",
                kind.to_lowercase()
            ));
            None
        }
    }
}

fn check_fraction<N>(
    owner: N,
    what: &str,
    fraction: Fraction,
    at_most_one: bool,
    problems: &mut ValidationError,
) where
    N: Display,
{
    if fraction.denominator() == 0 {
        problems.add_problem(format!("{owner} has a {what} with a zero denominator."));
    } else if at_most_one && fraction.numerator() > fraction.denominator() {
        problems.add_problem(format!("{owner} has a {what} of {fraction}, which exceeds 1."));
    }
}

/// Validates the effect parameters of a move.
pub fn validate_move_data(move_data: &MoveData, problems: &mut ValidationError) {
    let name = &move_data.name;
    if move_data.effect_chance > 100 {
        problems.add_problem(format!(
            "Move {name} has an effect chance of {}%, which exceeds 100%.",
            move_data.effect_chance
        ));
    }
    for effect in &move_data.effects {
        match effect {
            MoveEffect::MultiHit { min, max } => {
                if *min == 0 {
                    problems.add_problem(format!("Move {name} must hit at least once."));
                } else if min > max {
                    problems.add_problem(format!(
                        "Move {name} has a hit range of {min}-{max}, which is empty."
                    ));
                }
            }
            MoveEffect::StatStages { boosts, .. } => {
                if boosts.is_empty() {
                    problems.add_problem(format!("Move {name} has a stat change of 0 stages."));
                }
            }
            MoveEffect::Recoil { fraction } => {
                check_fraction(format!("Move {name}"), "recoil", *fraction, true, problems)
            }
            MoveEffect::Drain { fraction } => {
                check_fraction(format!("Move {name}"), "drain", *fraction, true, problems)
            }
            MoveEffect::Heal { fraction } => {
                check_fraction(format!("Move {name}"), "heal", *fraction, true, problems)
            }
            _ => (),
        }
    }
}

/// Validates the effect parameters of an item.
pub fn validate_item_data(item: &ItemData, problems: &mut ValidationError) {
    let owner = format!("Item {}", item.name);
    match item.effect {
        HeldItemEffect::HealPerTurn { fraction, .. } => {
            check_fraction(&owner, "heal", fraction, true, problems)
        }
        HeldItemEffect::ConditionalHeal {
            threshold,
            fraction,
        } => {
            check_fraction(&owner, "threshold", threshold, true, problems);
            check_fraction(&owner, "heal", fraction, true, problems);
        }
        HeldItemEffect::StatBoost { multiplier, .. }
        | HeldItemEffect::TypeBoost { multiplier, .. }
        | HeldItemEffect::EffectivenessBoost { multiplier } => {
            check_fraction(&owner, "multiplier", multiplier, false, problems)
        }
        HeldItemEffect::DamageBoostWithRecoil { multiplier, recoil } => {
            check_fraction(&owner, "multiplier", multiplier, false, problems);
            check_fraction(&owner, "recoil", recoil, true, problems);
        }
        HeldItemEffect::SurviveLethalChance { chance }
        | HeldItemEffect::PriorityChance { chance } => {
            check_fraction(&owner, "chance", chance, true, problems)
        }
        HeldItemEffect::SurviveLethalHit => (),
    }
}

/// Validates a combatant against the data store, collecting every problem found.
///
/// Moves without data are allowed. They fail when used.
pub fn validate_combatant(data: &CombatantData, store: &dyn DataStore) -> Result<()> {
    let mut problems = ValidationError::default();

    lookup("Species", &data.species, &mut problems, |id| {
        store.get_species(id)
    });
    let name = data.name.as_deref().unwrap_or(&data.species);

    if let Some(nickname) = &data.name {
        if nickname.is_empty() {
            problems.add_problem("Nickname cannot be empty.");
        }
        if nickname.len() > MAX_NAME_LENGTH {
            problems.add_problem(format!(
                "Nickname \"{nickname}\" is too long (should be {MAX_NAME_LENGTH} characters or fewer)."
            ));
        }
        if nickname.contains(['|', ',']) {
            problems.add_problem(format!(
                "Nickname \"{nickname}\" contains illegal characters."
            ));
        }
    }

    if data.level == 0 || data.level > MAX_LEVEL {
        problems.add_problem(format!(
            "Level {} (on {name}) is outside of [1, {MAX_LEVEL}].",
            data.level
        ));
    }

    for (stat, value) in data.ivs.entries() {
        if value > MAX_IV {
            problems.add_problem(format!(
                "{} IV {value} (on {name}) exceeds the maximum of {MAX_IV}.",
                stat.display_name()
            ));
        }
    }
    for (stat, value) in data.evs.entries() {
        if value > MAX_EV {
            problems.add_problem(format!(
                "{} EV {value} (on {name}) exceeds the maximum of {MAX_EV}.",
                stat.display_name()
            ));
        }
    }
    let total_evs = data.evs.sum();
    if total_evs > MAX_TOTAL_EVS {
        problems.add_problem(format!(
            "EVs (on {name}) total {total_evs}, which exceeds the maximum of {MAX_TOTAL_EVS}."
        ));
    }

    if data.moves.is_empty() {
        problems.add_problem(format!("{name} has no moves."));
    }
    if data.moves.len() > MAX_MOVES {
        problems.add_problem(format!(
            "{name} has {} moves, but the maximum is {MAX_MOVES}.",
            data.moves.len()
        ));
    }
    for duplicate in data
        .moves
        .iter()
        .map(|name| Id::from(name.as_str()))
        .duplicates()
    {
        problems.add_problem(format!("{name} knows {duplicate} more than once."));
    }
    for move_name in &data.moves {
        match store.get_move(&Id::from(move_name.as_str())) {
            Ok(Some(move_data)) => validate_move_data(&move_data, &mut problems),
            Ok(None) => (),
            Err(error) => {
                problems.add_problem(format!("Failed to look up move {move_name}: {error}."))
            }
        }
    }

    if let Some(item) = &data.item {
        if let Some(item) = lookup("Item", item, &mut problems, |id| store.get_item(id)) {
            validate_item_data(&item, &mut problems);
        }
    }

    problems.into_result()?;
    Ok(())
}
