use serde::{Deserialize, Serialize};

use crate::domain::a005_loot::aggregate::LootEntry;
use crate::domain::a006_current_loot::aggregate::CurrentLootEntry;
use crate::domain::a007_character::aggregate::PlayerCharacter;

/// Where a player loot entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LootSource {
    Archive,
    Current,
}

/// Loot line of a player's history, archive and current raid merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLootEntry {
    pub source: LootSource,
    /// Empty for current raid loot
    pub raid_id: String,
    pub date: String,
    /// Empty for archived loot
    pub boss: String,
    pub character: String,
    pub item: String,
    pub priority: String,
    pub item_id: String,
}

impl From<LootEntry> for PlayerLootEntry {
    fn from(entry: LootEntry) -> Self {
        Self {
            source: LootSource::Archive,
            raid_id: entry.raid_id,
            date: entry.date,
            boss: String::new(),
            character: entry.character,
            item: entry.item,
            priority: entry.priority,
            item_id: entry.item_id,
        }
    }
}

impl From<CurrentLootEntry> for PlayerLootEntry {
    fn from(entry: CurrentLootEntry) -> Self {
        Self {
            source: LootSource::Current,
            raid_id: String::new(),
            date: entry.date,
            boss: entry.boss,
            character: entry.character,
            item: entry.item,
            priority: entry.priority,
            item_id: entry.item_id,
        }
    }
}

/// Drill-down view of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDetailsResponse {
    pub player: String,
    pub characters: Vec<PlayerCharacter>,
    pub loot: Vec<PlayerLootEntry>,
}
