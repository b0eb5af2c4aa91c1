use std::fmt::Display;

use duel_data::{
    Boost,
    Status,
};

use crate::{
    battle::{
        BattleOutcome,
        Effectiveness,
    },
    log::Event,
    log_event,
    mons::Combatant,
};

fn with_source(mut event: Event, from: Option<&str>) -> Event {
    if let Some(from) = from {
        event.extend(&("from", from));
    }
    event
}

pub fn start() -> Event {
    log_event!("start")
}

pub fn combatant(mon: &Combatant) -> Event {
    log_event!(
        "combatant",
        ("side", mon.side),
        ("name", &mon.name),
        ("species", &mon.species.name),
        ("level", mon.level),
        ("health", mon.health()),
    )
}

pub fn turn(turn: u32) -> Event {
    log_event!("turn", ("turn", turn))
}

pub fn use_move(mon: &Combatant, move_name: &str, target: Option<&Combatant>) -> Event {
    let mut event = log_event!("move", ("mon", mon.ident()), ("name", move_name));
    if let Some(target) = target {
        event.extend(&("target", target.ident()));
    }
    event
}

pub fn cant<R>(mon: &Combatant, reason: R) -> Event
where
    R: Display,
{
    log_event!("cant", ("mon", mon.ident()), ("reason", reason))
}

pub fn fail(mon: &Combatant) -> Event {
    log_event!("fail", ("mon", mon.ident()))
}

pub fn fail_move(mon: &Combatant, move_name: &str, reason: &str) -> Event {
    log_event!(
        "fail",
        ("mon", mon.ident()),
        ("move", move_name),
        ("reason", reason),
    )
}

pub fn no_target(mon: &Combatant) -> Event {
    log_event!("notarget", ("mon", mon.ident()))
}

pub fn miss(mon: &Combatant, target: &Combatant) -> Event {
    log_event!("miss", ("mon", mon.ident()), ("target", target.ident()))
}

pub fn immune(mon: &Combatant) -> Event {
    log_event!("immune", ("mon", mon.ident()))
}

pub fn critical_hit(mon: &Combatant) -> Event {
    log_event!("crit", ("mon", mon.ident()))
}

pub fn effectiveness(mon: &Combatant, effectiveness: Effectiveness) -> Event {
    log_event!(effectiveness, ("mon", mon.ident()))
}

pub fn hit_count(hits: u8) -> Event {
    log_event!("hitcount", ("hits", hits))
}

pub fn damage(mon: &Combatant, from: Option<&str>) -> Event {
    with_source(
        log_event!("damage", ("mon", mon.ident()), ("health", mon.health())),
        from,
    )
}

pub fn heal(mon: &Combatant, from: Option<&str>) -> Event {
    with_source(
        log_event!("heal", ("mon", mon.ident()), ("health", mon.health())),
        from,
    )
}

pub fn faint(mon: &Combatant) -> Event {
    log_event!("faint", ("mon", mon.ident()))
}

pub fn status(mon: &Combatant, status: Status, from: Option<&str>) -> Event {
    with_source(
        log_event!("status", ("mon", mon.ident()), ("status", status)),
        from,
    )
}

pub fn cure_status(mon: &Combatant, status: Status) -> Event {
    log_event!("curestatus", ("mon", mon.ident()), ("status", status))
}

pub fn boost(mon: &Combatant, boost: Boost, delta: i8, applied: i8) -> Event {
    let title = if delta > 0 { "boost" } else { "unboost" };
    log_event!(
        title,
        ("mon", mon.ident()),
        ("stat", boost),
        ("by", applied.unsigned_abs()),
    )
}

pub fn crit_boost(mon: &Combatant) -> Event {
    log_event!("critboost", ("mon", mon.ident()), ("stage", mon.crit_stage))
}

pub fn activate_item(mon: &Combatant, item: &str) -> Event {
    log_event!("activate", ("mon", mon.ident()), ("item", item))
}

pub fn activate_condition<C>(mon: &Combatant, condition: C) -> Event
where
    C: Display,
{
    log_event!("activate", ("mon", mon.ident()), ("condition", condition))
}

pub fn end_item(mon: &Combatant, item: &str) -> Event {
    log_event!("enditem", ("mon", mon.ident()), ("item", item))
}

pub fn weather<W>(weather: W) -> Event
where
    W: Display,
{
    log_event!("weather", ("weather", weather))
}

pub fn clear_weather<W>(weather: W) -> Event
where
    W: Display,
{
    log_event!("clearweather", ("weather", weather))
}

pub fn terrain<T>(terrain: T) -> Event
where
    T: Display,
{
    log_event!("terrain", ("terrain", terrain))
}

pub fn clear_terrain<T>(terrain: T) -> Event
where
    T: Display,
{
    log_event!("clearterrain", ("terrain", terrain))
}

pub fn residual() -> Event {
    log_event!("residual")
}

pub fn outcome(outcome: BattleOutcome, winner: Option<&Combatant>) -> Event {
    match (outcome, winner) {
        (BattleOutcome::Win(side), Some(winner)) => {
            log_event!("win", ("side", side), ("name", &winner.name))
        }
        (BattleOutcome::Win(side), None) => log_event!("win", ("side", side)),
        (BattleOutcome::Tie, _) => log_event!("tie"),
        (BattleOutcome::Draw, _) => log_event!("draw"),
    }
}
