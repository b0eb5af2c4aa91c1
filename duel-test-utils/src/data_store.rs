use anyhow::Result;
use duel_data::InMemoryDataStore;

/// Creates a data store containing all fixture data for tests.
///
/// Tests can add records of their own on top of the fixtures.
pub fn test_data_store() -> Result<InMemoryDataStore> {
    InMemoryDataStore::from_json(
        include_str!("../data/moves.json"),
        include_str!("../data/species.json"),
        include_str!("../data/items.json"),
    )
}
