use duel_data::StatTable;
use serde::{
    Deserialize,
    Serialize,
};

fn default_level() -> u8 {
    50
}

/// Data for constructing a single combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantData {
    /// Nickname. Defaults to the species name.
    #[serde(default)]
    pub name: Option<String>,
    /// Species name.
    pub species: String,
    /// Level, from 1 to 100.
    #[serde(default = "default_level")]
    pub level: u8,
    /// Individual values, from 0 to 31 per stat.
    #[serde(default)]
    pub ivs: StatTable,
    /// Effort values, up to 252 per stat and 510 in total.
    #[serde(default)]
    pub evs: StatTable,
    /// Move names, in slot order.
    pub moves: Vec<String>,
    /// Held item name.
    #[serde(default)]
    pub item: Option<String>,
}
