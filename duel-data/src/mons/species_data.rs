use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    Identifiable,
    StatTable,
    Type,
};

/// Data for a single species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// Primary type.
    pub primary_type: Type,
    /// Secondary type, if any.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
}

impl SpeciesData {
    /// The one or two types of the species.
    pub fn types(&self) -> Vec<Type> {
        let mut types = vec![self.primary_type];
        types.extend(self.secondary_type);
        types
    }
}

impl Identifiable for SpeciesData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
