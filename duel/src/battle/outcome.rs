use crate::{
    battle::Side,
    mons::CombatantSnapshot,
};

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// One side won.
    Win(Side),
    /// Both combatants fainted on the same turn.
    Tie,
    /// The turn limit was reached.
    Draw,
}

/// The final result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleResult {
    pub outcome: BattleOutcome,
    /// Number of turns played.
    pub turns: u32,
}

/// Everything that happened in a single turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub turn: u32,
    /// Events logged during the turn, in order.
    pub events: Vec<String>,
    /// State of both combatants at the end of the turn, indexed by side.
    pub combatants: [CombatantSnapshot; 2],
    /// Set if the battle ended on this turn.
    pub result: Option<BattleResult>,
}

impl TurnOutcome {
    pub fn combatant(&self, side: Side) -> &CombatantSnapshot {
        &self.combatants[side.index()]
    }
}
