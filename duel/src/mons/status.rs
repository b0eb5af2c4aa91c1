use duel_data::{
    Status,
    Type,
};

/// The inclusive range of turns a status lasts, for statuses that wear off on their own.
pub fn status_duration(status: Status) -> Option<(u64, u64)> {
    match status {
        Status::Sleep | Status::Freeze => Some((1, 3)),
        Status::Confusion => Some((2, 5)),
        _ => None,
    }
}

/// Checks if a combatant with the given types can never receive the status.
pub fn is_immune_to_status(status: Status, types: &[Type]) -> bool {
    let immune = |typ: Type| types.contains(&typ);
    match status {
        Status::Burn => immune(Type::Fire),
        Status::Freeze => immune(Type::Ice),
        Status::Poison | Status::BadlyPoisoned => immune(Type::Poison) || immune(Type::Steel),
        Status::Paralysis => immune(Type::Electric),
        Status::Sleep | Status::Confusion => false,
    }
}

/// End-of-turn damage dealt by the status.
///
/// `turns` is the status counter, which only matters for badly-poisoned damage.
pub fn residual_status_damage(status: Status, max_hp: u16, turns: u8) -> Option<u16> {
    let damage = match status {
        Status::Poison => max_hp / 8,
        Status::Burn => max_hp / 16,
        Status::BadlyPoisoned => (max_hp as u32 * turns as u32 / 16) as u16,
        _ => return None,
    };
    Some(damage.max(1))
}
