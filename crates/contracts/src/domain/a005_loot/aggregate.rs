use serde::{Deserialize, Serialize};

/// Item awarded in an archived raid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEntry {
    pub raid_id: String,
    pub date: String,
    pub character: String,
    pub item: String,
    pub priority: String,
    /// Wowhead item id, empty when the sheet has none
    pub item_id: String,
}
