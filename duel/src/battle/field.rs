use duel_data::{
    Terrain,
    Type,
    Weather,
};
use num::rational::Ratio;

/// Field conditions that expired at the end of a turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldExpiry {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
}

/// The battle field, which holds conditions shared by both combatants.
///
/// Weather and terrain each last a fixed number of turns, counted down at the end of every turn.
/// Setting a condition that is already active restarts its countdown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    pub weather: Option<Weather>,
    pub weather_turns: u8,
    pub terrain: Option<Terrain>,
    pub terrain_turns: u8,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weather for the given number of turns.
    ///
    /// Returns `false` without changing the field if `turns` is 0.
    pub fn set_weather(&mut self, weather: Weather, turns: u8) -> bool {
        if turns == 0 {
            return false;
        }
        self.weather = Some(weather);
        self.weather_turns = turns;
        true
    }

    /// Sets the terrain for the given number of turns.
    ///
    /// Returns `false` without changing the field if `turns` is 0.
    pub fn set_terrain(&mut self, terrain: Terrain, turns: u8) -> bool {
        if turns == 0 {
            return false;
        }
        self.terrain = Some(terrain);
        self.terrain_turns = turns;
        true
    }

    /// The damage multiplier the weather applies to a move of the given type.
    pub fn weather_modifier(&self, move_type: Type) -> Ratio<u64> {
        match (self.weather, move_type) {
            (Some(Weather::Sun), Type::Fire) | (Some(Weather::Rain), Type::Water) => {
                Ratio::new(3, 2)
            }
            (Some(Weather::Sun), Type::Water) | (Some(Weather::Rain), Type::Fire) => {
                Ratio::new(1, 2)
            }
            _ => Ratio::from_integer(1),
        }
    }

    /// The damage multiplier the terrain applies to a move of the given type.
    pub fn terrain_modifier(&self, move_type: Type) -> Ratio<u64> {
        match self.terrain {
            Some(terrain) if terrain.boosted_type() == move_type => Ratio::new(13, 10),
            _ => Ratio::from_integer(1),
        }
    }

    /// Checks if the weather damages a combatant with the given types at the end of the turn.
    pub fn weather_damages(&self, types: &[Type]) -> bool {
        let has = |typ: Type| types.contains(&typ);
        match self.weather {
            Some(Weather::Sandstorm) => !(has(Type::Rock) || has(Type::Ground) || has(Type::Steel)),
            Some(Weather::Hail) => !has(Type::Ice),
            _ => false,
        }
    }

    /// Counts down active conditions, clearing the ones that run out.
    pub fn tick(&mut self) -> FieldExpiry {
        let mut expiry = FieldExpiry::default();
        if self.weather.is_some() {
            self.weather_turns = self.weather_turns.saturating_sub(1);
            if self.weather_turns == 0 {
                expiry.weather = self.weather.take();
            }
        }
        if self.terrain.is_some() {
            self.terrain_turns = self.terrain_turns.saturating_sub(1);
            if self.terrain_turns == 0 {
                expiry.terrain = self.terrain.take();
            }
        }
        expiry
    }
}
