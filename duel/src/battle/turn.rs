use std::cmp::Ordering;

use anyhow::Result;
use duel_data::{
    BoostTable,
    EffectTarget,
    Fraction,
    HeldItemEffect,
    MoveData,
    MoveEffect,
    Status,
    Terrain,
    Type,
    TypeChart,
};
use duel_prng::{
    RandomSource,
    roll,
};
use num::rational::Ratio;

use crate::{
    battle::{
        BattleEngineOptions,
        DamageContext,
        Effectiveness,
        Field,
        Side,
        SpeedTieResolution,
        battle_logs,
        calculate_damage,
        random_factor,
        type_effectiveness,
    },
    error::{
        MissingMoveDataError,
        WrapOptionError,
    },
    log::Event,
    mons::{
        Combatant,
        StatusInfliction,
        accuracy_stage_multiplier,
        crit_chance_denominator,
        residual_status_damage,
        status_duration,
    },
};

const FORWARD: [Side; 2] = [Side::A, Side::B];
const REVERSE: [Side; 2] = [Side::B, Side::A];

/// Hit counts for a 2-5 hit move, weighted 35/35/15/15.
const TWO_TO_FIVE_HITS: [u8; 20] = [
    2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5,
];

fn to_hp(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

/// Resolves a single turn of a battle.
///
/// The resolver borrows all battle state for the duration of the turn and collects every event
/// it produces. Random values are drawn from the battle's source in a fixed order, so a turn is
/// fully reproducible from the source's state.
pub struct TurnResolver<'b> {
    combatants: &'b mut [Combatant; 2],
    field: &'b mut Field,
    source: &'b mut dyn RandomSource,
    type_chart: &'b TypeChart,
    options: &'b BattleEngineOptions,
    events: Vec<Event>,
}

impl<'b> TurnResolver<'b> {
    pub fn new(
        combatants: &'b mut [Combatant; 2],
        field: &'b mut Field,
        source: &'b mut dyn RandomSource,
        type_chart: &'b TypeChart,
        options: &'b BattleEngineOptions,
    ) -> Self {
        Self {
            combatants,
            field,
            source,
            type_chart,
            options,
            events: Vec::new(),
        }
    }

    /// Resolves the turn for the given move slots, indexed by side.
    ///
    /// Choices must already be validated against each combatant's moveset.
    pub fn resolve(mut self, choices: [usize; 2]) -> Result<Vec<Event>> {
        let order = self.action_order(choices);
        log::debug!(
            "action order: {} then {}",
            self.mon(order[0]).ident(),
            self.mon(order[1]).ident()
        );
        for side in order {
            self.run_action(side, choices[side.index()])?;
        }
        self.end_of_turn(order);
        Ok(self.events)
    }

    fn mon(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    fn mon_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    fn move_data(&self, side: Side, slot: usize) -> Option<&MoveData> {
        self.mon(side)
            .move_slot(slot)
            .and_then(|slot| slot.data.as_ref())
    }

    fn roll_fraction(&mut self, fraction: Fraction) -> bool {
        fraction.denominator() > 0
            && roll::chance(
                self.source,
                fraction.numerator() as u64,
                fraction.denominator() as u64,
            )
    }

    fn roll_effect_chance(&mut self, move_data: &MoveData) -> bool {
        move_data.effect_chance >= 100
            || roll::chance(self.source, move_data.effect_chance as u64, 100)
    }

    fn action_order(&mut self, choices: [usize; 2]) -> [Side; 2] {
        let priority = Side::BOTH.map(|side| {
            self.move_data(side, choices[side.index()])
                .map(|move_data| move_data.priority)
                .unwrap_or(0)
        });
        if priority[0] != priority[1] {
            return if priority[0] > priority[1] {
                FORWARD
            } else {
                REVERSE
            };
        }

        match Side::BOTH.map(|side| self.roll_priority_item(side)) {
            [true, false] => return FORWARD,
            [false, true] => return REVERSE,
            _ => (),
        }

        let speed = Side::BOTH.map(|side| self.mon(side).action_speed());
        match speed[0].cmp(&speed[1]) {
            Ordering::Greater => FORWARD,
            Ordering::Less => REVERSE,
            Ordering::Equal => match self.options.speed_tie_resolution {
                SpeedTieResolution::Random => {
                    if roll::coin_flip(self.source) {
                        FORWARD
                    } else {
                        REVERSE
                    }
                }
                SpeedTieResolution::Keep => FORWARD,
                SpeedTieResolution::Reverse => REVERSE,
            },
        }
    }

    fn roll_priority_item(&mut self, side: Side) -> bool {
        let Some(item) = self.mon(side).item.clone() else {
            return false;
        };
        let HeldItemEffect::PriorityChance { chance } = item.effect else {
            return false;
        };
        if !self.roll_fraction(chance) {
            return false;
        }
        let event = battle_logs::activate_item(self.mon(side), &item.name);
        self.log(event);
        true
    }

    fn run_action(&mut self, side: Side, slot: usize) -> Result<()> {
        if self.mon(side).is_fainted() || !self.can_act(side) {
            return Ok(());
        }
        let move_slot = self
            .mon(side)
            .move_slot(slot)
            .cloned()
            .wrap_expectation(format!("{} has no move in slot {slot}", self.mon(side).ident()))?;
        let Some(move_data) = move_slot.data else {
            let error = MissingMoveDataError {
                combatant: self.mon(side).ident(),
                name: move_slot.name.clone(),
            };
            log::warn!("{error}");
            let event = battle_logs::fail_move(self.mon(side), &move_slot.name, "Missing move data");
            self.log(event);
            return Ok(());
        };
        self.use_move(side, &move_data);
        Ok(())
    }

    /// Checks whether the combatant is able to act, resolving conditions that act first.
    fn can_act(&mut self, side: Side) -> bool {
        if self.mon(side).flinch {
            self.mon_mut(side).flinch = false;
            let event = battle_logs::cant(self.mon(side), "Flinch");
            self.log(event);
            return false;
        }
        match self.mon(side).status {
            Some(Status::Sleep) => {
                let event = battle_logs::cant(self.mon(side), Status::Sleep);
                self.log(event);
                false
            }
            Some(Status::Freeze) => {
                if roll::chance(self.source, 1, 5) {
                    self.cure_status(side);
                    true
                } else {
                    let event = battle_logs::cant(self.mon(side), Status::Freeze);
                    self.log(event);
                    false
                }
            }
            Some(Status::Paralysis) => {
                if roll::chance(self.source, 1, 4) {
                    let event = battle_logs::cant(self.mon(side), Status::Paralysis);
                    self.log(event);
                    false
                } else {
                    true
                }
            }
            Some(Status::Confusion) => {
                let event = battle_logs::activate_condition(self.mon(side), Status::Confusion);
                self.log(event);
                if roll::chance(self.source, 1, 3) {
                    let amount = (self.mon(side).max_hp() / 10).max(1);
                    self.damage(side, amount, Some("Confusion"));
                    false
                } else {
                    true
                }
            }
            _ => true,
        }
    }

    fn use_move(&mut self, user: Side, move_data: &MoveData) {
        let target = user.other();
        let event = battle_logs::use_move(
            self.mon(user),
            &move_data.name,
            move_data.affects_target().then(|| self.mon(target)),
        );
        self.log(event);

        if move_data.is_rest() {
            self.rest(user);
            return;
        }

        if move_data.affects_target() {
            if self.mon(target).is_fainted() {
                let event = battle_logs::no_target(self.mon(user));
                self.log(event);
                return;
            }
            if self.field.terrain == Some(Terrain::Psychic)
                && move_data.priority > 0
                && !self.mon(target).has_type(Type::Dark)
            {
                let event = battle_logs::activate_condition(self.mon(target), Terrain::Psychic);
                self.log(event);
                return;
            }
            if !self.accuracy_check(user, target, move_data) {
                let event = battle_logs::miss(self.mon(user), self.mon(target));
                self.log(event);
                return;
            }
        }

        if move_data.is_damaging() {
            let Some(dealt) = self.hit_target(user, target, move_data) else {
                return;
            };
            self.apply_damage_effects(user, move_data, dealt);
        }
        self.apply_secondary_effects(user, target, move_data);
    }

    fn accuracy_check(&mut self, user: Side, target: Side, move_data: &MoveData) -> bool {
        let Some(accuracy) = move_data.accuracy.percentage() else {
            return true;
        };
        let stage = (self.mon(user).boosts.acc - self.mon(target).boosts.eva).clamp(-6, 6);
        let accuracy = (accuracy_stage_multiplier(stage) * accuracy as u64).to_integer();
        let hit = roll::chance(self.source, accuracy, 100);
        log::trace!("accuracy check at {accuracy}%: {hit}");
        hit
    }

    fn hit_count(&mut self, move_data: &MoveData) -> u8 {
        match move_data.multi_hit() {
            None => 1,
            Some((min, max)) if min >= max => min,
            Some((2, 5)) => roll::sample_slice(self.source, &TWO_TO_FIVE_HITS)
                .copied()
                .unwrap_or(2),
            Some((min, max)) => roll::range_inclusive(self.source, min as u64, max as u64) as u8,
        }
    }

    /// Deals the move's damage, returning the total dealt, or [`None`] if the target is immune.
    fn hit_target(&mut self, user: Side, target: Side, move_data: &MoveData) -> Option<u32> {
        let effectiveness = type_effectiveness(
            self.type_chart,
            move_data.primary_type,
            &self.mon(target).types(),
        );
        if effectiveness == Ratio::from_integer(0) {
            let event = battle_logs::immune(self.mon(target));
            self.log(event);
            return None;
        }

        let hits = self.hit_count(move_data);
        let crit_stage = self
            .mon(user)
            .crit_stage
            .saturating_add(move_data.crit_stage)
            .min(Combatant::MAX_CRIT_STAGE);
        let mut total = 0;
        let mut landed = 0;
        for hit in 0..hits {
            if self.mon(user).is_fainted() || self.mon(target).is_fainted() {
                break;
            }
            let critical = roll::chance(self.source, 1, crit_chance_denominator(crit_stage));
            log::trace!("critical hit roll at stage {crit_stage}: {critical}");
            let random_factor = random_factor(self.options.randomize_base_damage, self.source);
            let damage = calculate_damage(&DamageContext {
                attacker: self.mon(user),
                defender: self.mon(target),
                move_data,
                field: &*self.field,
                type_chart: self.type_chart,
                critical,
                random_factor,
            });

            if critical {
                let event = battle_logs::critical_hit(self.mon(target));
                self.log(event);
            }
            if hit == 0
                && matches!(
                    damage.effectiveness,
                    Effectiveness::SuperEffective | Effectiveness::Resisted
                )
            {
                let event = battle_logs::effectiveness(self.mon(target), damage.effectiveness);
                self.log(event);
            }

            let amount = self.survive_lethal_hit(target, damage.amount);
            total += self.damage(target, amount, None) as u32;
            landed += 1;
        }

        if move_data.multi_hit().is_some() {
            self.log(battle_logs::hit_count(landed));
        }
        Some(total)
    }

    /// Clamps lethal damage if the target holds an item that lets it survive.
    fn survive_lethal_hit(&mut self, target: Side, amount: u16) -> u16 {
        let mon = self.mon(target);
        if amount < mon.current_hp {
            return amount;
        }
        let at_full_hp = mon.current_hp == mon.max_hp();
        let survive = mon.current_hp - 1;
        let Some(item) = mon.item.clone() else {
            return amount;
        };
        match item.effect {
            HeldItemEffect::SurviveLethalHit if at_full_hp => {
                self.mon_mut(target).consume_item();
                let event = battle_logs::end_item(self.mon(target), &item.name);
                self.log(event);
                survive
            }
            HeldItemEffect::SurviveLethalChance { chance } => {
                if !self.roll_fraction(chance) {
                    return amount;
                }
                let event = battle_logs::activate_item(self.mon(target), &item.name);
                self.log(event);
                survive
            }
            _ => amount,
        }
    }

    /// Damages a combatant, logging the result.
    fn damage(&mut self, side: Side, amount: u16, from: Option<&str>) -> u16 {
        if self.mon(side).is_fainted() {
            return 0;
        }
        let dealt = self.mon_mut(side).damage(amount);
        let event = battle_logs::damage(self.mon(side), from);
        self.log(event);
        if self.mon(side).is_fainted() {
            let event = battle_logs::faint(self.mon(side));
            self.log(event);
        } else {
            self.check_conditional_heal(side);
        }
        dealt
    }

    /// Heals a combatant, logging the result.
    ///
    /// Fainted and full-health combatants are not healed.
    fn heal(&mut self, side: Side, amount: u16, from: Option<&str>) -> u16 {
        let mon = self.mon(side);
        if mon.is_fainted() || mon.current_hp == mon.max_hp() {
            return 0;
        }
        let healed = self.mon_mut(side).heal(amount);
        let event = battle_logs::heal(self.mon(side), from);
        self.log(event);
        healed
    }

    fn check_conditional_heal(&mut self, side: Side) {
        let mon = self.mon(side);
        let Some(item) = mon.item.clone() else {
            return;
        };
        let HeldItemEffect::ConditionalHeal {
            threshold,
            fraction,
        } = item.effect
        else {
            return;
        };
        let max_hp = mon.max_hp() as u32;
        if mon.current_hp as u32 > threshold.of(max_hp) {
            return;
        }
        self.mon_mut(side).consume_item();
        let event = battle_logs::end_item(self.mon(side), &item.name);
        self.log(event);
        self.heal(side, to_hp(fraction.of(max_hp).max(1)), Some(item.name.as_str()));
    }

    fn cure_status(&mut self, side: Side) {
        if let Some(status) = self.mon_mut(side).cure_status() {
            let event = battle_logs::cure_status(self.mon(side), status);
            self.log(event);
        }
    }

    fn rest(&mut self, user: Side) {
        let mon = self.mon(user);
        if mon.current_hp == mon.max_hp() {
            let event = battle_logs::fail(mon);
            self.log(event);
            return;
        }
        self.cure_status(user);
        self.mon_mut(user).try_set_status(Status::Sleep, 2);
        let event = battle_logs::status(self.mon(user), Status::Sleep, Some("Rest"));
        self.log(event);
        let max_hp = self.mon(user).max_hp();
        self.heal(user, max_hp, Some("Rest"));
    }

    fn apply_damage_effects(&mut self, user: Side, move_data: &MoveData, dealt: u32) {
        if dealt > 0 {
            for effect in &move_data.effects {
                match effect {
                    MoveEffect::Recoil { fraction } => {
                        self.damage(user, to_hp(fraction.of(dealt).max(1)), Some("Recoil"));
                    }
                    MoveEffect::Drain { fraction } => {
                        self.heal(user, to_hp(fraction.of(dealt).max(1)), Some("Drain"));
                    }
                    _ => (),
                }
            }
        }

        let Some(item) = self.mon(user).item.clone() else {
            return;
        };
        if let HeldItemEffect::DamageBoostWithRecoil { recoil, .. } = item.effect {
            let amount = to_hp(recoil.of(self.mon(user).max_hp() as u32));
            if amount > 0 {
                self.damage(user, amount, Some(item.name.as_str()));
            }
        }
    }

    fn apply_secondary_effects(&mut self, user: Side, target: Side, move_data: &MoveData) {
        let status_move = !move_data.is_damaging();

        for effect in &move_data.effects {
            if let MoveEffect::Status { status } = effect {
                self.apply_status(target, *status, move_data, status_move);
            }
        }

        for effect in &move_data.effects {
            if let MoveEffect::StatStages {
                target: effect_target,
                boosts,
            } = effect
            {
                match effect_target {
                    EffectTarget::User => {
                        if !self.mon(user).is_fainted() {
                            self.apply_boosts(user, boosts);
                        }
                    }
                    EffectTarget::Target => {
                        if !self.mon(target).is_fainted() && self.roll_effect_chance(move_data) {
                            self.apply_boosts(target, boosts);
                        }
                    }
                }
            }
        }

        for effect in &move_data.effects {
            match effect {
                MoveEffect::Weather { weather } => {
                    if self
                        .field
                        .set_weather(*weather, self.options.field_duration)
                    {
                        self.log(battle_logs::weather(weather));
                    } else {
                        let event = battle_logs::fail(self.mon(user));
                        self.log(event);
                    }
                }
                MoveEffect::Terrain { terrain } => {
                    if self
                        .field
                        .set_terrain(*terrain, self.options.field_duration)
                    {
                        self.log(battle_logs::terrain(terrain));
                    } else {
                        let event = battle_logs::fail(self.mon(user));
                        self.log(event);
                    }
                }
                _ => (),
            }
        }

        if move_data
            .effects
            .iter()
            .any(|effect| matches!(effect, MoveEffect::Flinch))
            && !self.mon(target).is_fainted()
            && self.roll_effect_chance(move_data)
        {
            self.mon_mut(target).flinch = true;
        }

        for effect in &move_data.effects {
            if let MoveEffect::CritBoost { stages } = effect {
                if self.mon(user).is_fainted() {
                    continue;
                }
                if self.mon_mut(user).boost_crit_stage(*stages) == 0 {
                    continue;
                }
                let event = battle_logs::crit_boost(self.mon(user));
                self.log(event);
            }
        }

        for effect in &move_data.effects {
            if let MoveEffect::Heal { fraction } = effect {
                self.heal_effect(user, *fraction);
            }
        }
    }

    fn apply_status(
        &mut self,
        target: Side,
        status: Status,
        move_data: &MoveData,
        status_move: bool,
    ) {
        if self.mon(target).is_fainted() || !self.roll_effect_chance(move_data) {
            return;
        }
        match self.mon(target).status_infliction(status) {
            StatusInfliction::Inflicted => (),
            StatusInfliction::Immune => {
                if status_move {
                    let event = battle_logs::immune(self.mon(target));
                    self.log(event);
                }
                return;
            }
            StatusInfliction::AlreadyHasStatus | StatusInfliction::Fainted => {
                if status_move {
                    let event = battle_logs::fail(self.mon(target));
                    self.log(event);
                }
                return;
            }
        }
        let turns = match status_duration(status) {
            Some((min, max)) => roll::range_inclusive(self.source, min, max) as u8,
            None if status == Status::BadlyPoisoned => 1,
            None => 0,
        };
        self.mon_mut(target).try_set_status(status, turns);
        let event = battle_logs::status(self.mon(target), status, None);
        self.log(event);
    }

    fn apply_boosts(&mut self, side: Side, boosts: &BoostTable) {
        for (boost, delta) in boosts.non_zero_entries() {
            let applied = self.mon_mut(side).boosts.boost(boost, delta);
            let event = battle_logs::boost(self.mon(side), boost, delta, applied);
            self.log(event);
        }
    }

    fn heal_effect(&mut self, user: Side, fraction: Fraction) {
        let mon = self.mon(user);
        if mon.is_fainted() {
            return;
        }
        if mon.current_hp == mon.max_hp() {
            let event = battle_logs::fail(mon);
            self.log(event);
            return;
        }
        let amount = to_hp(fraction.of(mon.max_hp() as u32).max(1));
        self.heal(user, amount, None);
    }

    fn end_of_turn(&mut self, order: [Side; 2]) {
        self.log(battle_logs::residual());
        for side in order {
            self.residual_status(side);
            self.residual_item(side);
            self.residual_field(side);
            self.tick_status(side);
        }
        for side in Side::BOTH {
            self.mon_mut(side).flinch = false;
        }

        let expiry = self.field.tick();
        if let Some(weather) = expiry.weather {
            self.log(battle_logs::clear_weather(weather));
        }
        if let Some(terrain) = expiry.terrain {
            self.log(battle_logs::clear_terrain(terrain));
        }
    }

    fn residual_status(&mut self, side: Side) {
        let mon = self.mon(side);
        if mon.is_fainted() {
            return;
        }
        let Some(status) = mon.status else {
            return;
        };
        let Some(amount) = residual_status_damage(status, mon.max_hp(), mon.status_turns) else {
            return;
        };
        self.damage(side, amount, Some(status.to_string().as_str()));
        if status == Status::BadlyPoisoned {
            let mon = self.mon_mut(side);
            mon.status_turns = mon.status_turns.saturating_add(1);
        }
    }

    fn residual_item(&mut self, side: Side) {
        let mon = self.mon(side);
        if mon.is_fainted() {
            return;
        }
        let Some(item) = mon.item.clone() else {
            return;
        };
        let HeldItemEffect::HealPerTurn {
            fraction,
            restricted_to,
        } = item.effect
        else {
            return;
        };
        let amount = to_hp(fraction.of(mon.max_hp() as u32).max(1));
        match restricted_to {
            Some(typ) if !mon.has_type(typ) => {
                self.damage(side, amount, Some(item.name.as_str()));
            }
            _ => {
                self.heal(side, amount, Some(item.name.as_str()));
            }
        }
    }

    fn residual_field(&mut self, side: Side) {
        let mon = self.mon(side);
        if mon.is_fainted() {
            return;
        }
        let amount = (mon.max_hp() / 16).max(1);
        let weather_damage = self.field.weather_damages(&mon.types());
        if let Some(weather) = self.field.weather {
            if weather_damage {
                self.damage(side, amount, Some(weather.to_string().as_str()));
            }
        }
        if self.field.terrain == Some(Terrain::Grassy) {
            self.heal(side, amount, Some(Terrain::Grassy.to_string().as_str()));
        }
    }

    fn tick_status(&mut self, side: Side) {
        let mon = self.mon_mut(side);
        if mon.is_fainted() {
            return;
        }
        let Some(status) = mon.status else {
            return;
        };
        if status_duration(status).is_none() {
            return;
        }
        mon.status_turns = mon.status_turns.saturating_sub(1);
        if mon.status_turns == 0 {
            self.cure_status(side);
        }
    }
}
