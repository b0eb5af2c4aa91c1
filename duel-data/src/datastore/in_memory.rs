use anyhow::{
    Context,
    Result,
};
use hashbrown::HashMap;

use crate::{
    DataStore,
    Id,
    Identifiable,
    ItemData,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// A [`DataStore`] holding already-materialized records in memory.
#[derive(Debug, Clone)]
pub struct InMemoryDataStore {
    type_chart: TypeChart,
    items: HashMap<Id, ItemData>,
    moves: HashMap<Id, MoveData>,
    species: HashMap<Id, SpeciesData>,
}

impl Default for InMemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDataStore {
    /// Creates an empty store using the standard type chart.
    pub fn new() -> Self {
        Self {
            type_chart: TypeChart::standard(),
            items: HashMap::new(),
            moves: HashMap::new(),
            species: HashMap::new(),
        }
    }

    /// Creates a store from JSON arrays of move, species and item records.
    pub fn from_json(moves: &str, species: &str, items: &str) -> Result<Self> {
        let mut store = Self::new();
        for data in serde_json::from_str::<Vec<MoveData>>(moves).context("invalid move data")? {
            store.add_move(data);
        }
        for data in
            serde_json::from_str::<Vec<SpeciesData>>(species).context("invalid species data")?
        {
            store.add_species(data);
        }
        for data in serde_json::from_str::<Vec<ItemData>>(items).context("invalid item data")? {
            store.add_item(data);
        }
        Ok(store)
    }

    /// Replaces the type chart.
    pub fn with_type_chart(mut self, type_chart: TypeChart) -> Self {
        self.type_chart = type_chart;
        self
    }

    pub fn add_item(&mut self, data: ItemData) {
        self.items.insert(data.id(), data);
    }

    pub fn add_move(&mut self, data: MoveData) {
        self.moves.insert(data.id(), data);
    }

    pub fn add_species(&mut self, data: SpeciesData) {
        self.species.insert(data.id(), data);
    }
}

impl DataStore for InMemoryDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_item(&self, id: &Id) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}
