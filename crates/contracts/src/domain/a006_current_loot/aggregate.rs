use serde::{Deserialize, Serialize};

/// Date label used for every entry of the running raid
pub const CURRENT_RAID_DATE: &str = "Current Raid";

/// Лут текущего рейда (лист "ICC25 Loot")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentLootEntry {
    pub boss: String,
    pub character: String,
    pub item: String,
    pub priority: String,
    /// Always [`CURRENT_RAID_DATE`]
    pub date: String,
    pub item_id: String,
}
