use anyhow::Result;
use duel_data::{
    Boost,
    BoostTable,
    DataStore,
    HeldItemEffect,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    Stat,
    StatTable,
    Status,
    Type,
};

use crate::{
    battle::Side,
    error::{
        WrapOptionError,
        WrapResultError,
    },
    mons::{
        calculate_stats,
        is_immune_to_status,
        stage_multiplier,
    },
    teams::CombatantData,
};

/// A single move slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSlot {
    /// Name of the move, as chosen for the combatant.
    pub name: String,
    /// Static data for the move, if it was found when the combatant was created.
    pub data: Option<MoveData>,
}

/// The result of trying to inflict a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusInfliction {
    Inflicted,
    AlreadyHasStatus,
    Immune,
    Fainted,
}

/// A combatant's state at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantSnapshot {
    pub name: String,
    pub current_hp: u16,
    pub max_hp: u16,
    pub status: Option<Status>,
    pub boosts: BoostTable,
    pub item: Option<String>,
}

/// A single combatant in a battle.
///
/// Calculated stats are fixed at creation. Everything else is battle state, which is only
/// mutated by turn resolution.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub side: Side,
    pub species: SpeciesData,
    pub level: u8,
    pub stats: StatTable,
    pub moves: Vec<MoveSlot>,

    pub current_hp: u16,
    pub status: Option<Status>,
    /// Turns left for timed statuses, or turns elapsed for badly-poisoned damage.
    pub status_turns: u8,
    pub boosts: BoostTable,
    /// Critical-hit stage, from 0 to 3.
    pub crit_stage: u8,
    pub flinch: bool,
    pub item: Option<ItemData>,
}

impl Combatant {
    /// Maximum critical-hit stage.
    pub const MAX_CRIT_STAGE: u8 = 3;

    /// Creates a new combatant from data, resolving its records in the data store.
    ///
    /// Moves without data are kept and fail when used.
    pub fn new(data: &CombatantData, side: Side, store: &dyn DataStore) -> Result<Self> {
        let species = store
            .get_species(&Id::from(data.species.as_str()))?
            .wrap_not_found_error(format!("species {}", data.species))?;
        let item = match &data.item {
            Some(item) => Some(
                store
                    .get_item(&Id::from(item.as_str()))?
                    .wrap_not_found_error(format!("item {item}"))?,
            ),
            None => None,
        };
        let name = data.name.clone().unwrap_or_else(|| species.name.clone());
        let mut moves = Vec::with_capacity(data.moves.len());
        for move_name in &data.moves {
            let move_data = store
                .get_move(&Id::from(move_name.as_str()))
                .wrap_error_with_format(format_args!("failed to look up move {move_name}"))?;
            if move_data.is_none() {
                log::warn!("{name} knows {move_name}, which has no move data");
            }
            moves.push(MoveSlot {
                name: move_name.clone(),
                data: move_data,
            });
        }
        let stats = calculate_stats(&species.base_stats, &data.ivs, &data.evs, data.level);
        Ok(Self {
            name,
            side,
            species,
            level: data.level,
            current_hp: stats.hp,
            stats,
            moves,
            status: None,
            status_turns: 0,
            boosts: BoostTable::default(),
            crit_stage: 0,
            flinch: false,
            item,
        })
    }

    /// The identifier used for the combatant in battle events.
    pub fn ident(&self) -> String {
        format!("{},{}", self.name, self.side)
    }

    /// Current health, formatted for battle events.
    pub fn health(&self) -> String {
        format!("{}/{}", self.current_hp, self.max_hp())
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn types(&self) -> Vec<Type> {
        self.species.types()
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.species.primary_type == typ || self.species.secondary_type == Some(typ)
    }

    pub fn item_effect(&self) -> Option<&HeldItemEffect> {
        self.item.as_ref().map(|item| &item.effect)
    }

    /// Removes the held item, returning it.
    pub fn consume_item(&mut self) -> Option<ItemData> {
        self.item.take()
    }

    /// The move in the given slot.
    pub fn move_slot(&self, slot: usize) -> Option<&MoveSlot> {
        self.moves.get(slot)
    }

    /// The value of a stat at the given stage, including held-item multipliers.
    pub fn stat_at_stage(&self, stat: Stat, stage: i8) -> u16 {
        let mut value = stage_multiplier(stage) * self.stats.get(stat) as u64;
        if let Some(multiplier) = self
            .item_effect()
            .and_then(|effect| effect.stat_multiplier(stat))
        {
            value *= multiplier.as_ratio();
        }
        value.to_integer() as u16
    }

    /// The value of a stat after stat stages and held-item multipliers.
    pub fn effective_stat(&self, stat: Stat) -> u16 {
        let stage = Boost::try_from(stat)
            .map(|boost| self.boosts.get(boost))
            .unwrap_or(0);
        self.stat_at_stage(stat, stage)
    }

    /// The speed used for ordering actions.
    pub fn action_speed(&self) -> u16 {
        let speed = self.effective_stat(Stat::Spe);
        match self.status {
            Some(Status::Paralysis) => speed / 4,
            _ => speed,
        }
    }

    /// Applies damage, returning the HP actually lost.
    pub fn damage(&mut self, amount: u16) -> u16 {
        let amount = amount.min(self.current_hp);
        self.current_hp -= amount;
        amount
    }

    /// Restores HP, returning the HP actually gained.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let amount = amount.min(self.max_hp() - self.current_hp);
        self.current_hp += amount;
        amount
    }

    /// Checks whether the status could be inflicted right now, without inflicting it.
    pub fn status_infliction(&self, status: Status) -> StatusInfliction {
        if self.is_fainted() {
            StatusInfliction::Fainted
        } else if self.status.is_some() {
            StatusInfliction::AlreadyHasStatus
        } else if is_immune_to_status(status, &self.types()) {
            StatusInfliction::Immune
        } else {
            StatusInfliction::Inflicted
        }
    }

    /// Tries to inflict a status with the given counter.
    pub fn try_set_status(&mut self, status: Status, turns: u8) -> StatusInfliction {
        let result = self.status_infliction(status);
        if result != StatusInfliction::Inflicted {
            return result;
        }
        self.status = Some(status);
        self.status_turns = turns;
        StatusInfliction::Inflicted
    }

    /// Clears the status.
    pub fn cure_status(&mut self) -> Option<Status> {
        self.status_turns = 0;
        self.status.take()
    }

    /// Raises the critical-hit stage, returning the change actually applied.
    pub fn boost_crit_stage(&mut self, stages: u8) -> u8 {
        let before = self.crit_stage;
        self.crit_stage = before.saturating_add(stages).min(Self::MAX_CRIT_STAGE);
        self.crit_stage - before
    }

    /// A copy of the battle state.
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            current_hp: self.current_hp,
            max_hp: self.max_hp(),
            status: self.status,
            boosts: self.boosts.clone(),
            item: self.item.as_ref().map(|item| item.name.clone()),
        }
    }
}
