use duel_data::Stat;

use crate::{
    battle::Side,
    mons::Combatant,
};

/// A comparison of one calculated stat between two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatComparison {
    pub stat: Stat,
    pub a: u16,
    pub b: u16,
}

impl StatComparison {
    /// The side with the higher value, or [`None`] on a tie.
    pub fn advantage(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Compares the calculated stats of two combatants, in stat order.
pub fn compare_stats(a: &Combatant, b: &Combatant) -> Vec<StatComparison> {
    Stat::ALL
        .into_iter()
        .map(|stat| StatComparison {
            stat,
            a: a.stats.get(stat),
            b: b.stats.get(stat),
        })
        .collect()
}
