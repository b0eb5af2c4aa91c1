use anyhow::Result;

use crate::{
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all resource data.
///
/// This trait can be implemented for different data sources, such as a remote API cache or disk.
/// All data must be resolved before a battle starts; the engine only performs raw lookups by ID.
pub trait DataStore: Send + Sync {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;

    /// Gets an item by ID.
    fn get_item(&self, id: &Id) -> Result<Option<ItemData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}
