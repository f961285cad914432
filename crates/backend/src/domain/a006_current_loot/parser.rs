use contracts::domain::a006_current_loot::aggregate::{CurrentLootEntry, CURRENT_RAID_DATE};

use crate::shared::sheets::cells::{cell_at, is_blank};
use crate::shared::sheets::ranges::current_loot as col;

pub fn parse_current_loot(rows: &[Vec<String>]) -> Vec<CurrentLootEntry> {
    rows.iter()
        .skip(1)
        .map(|row| CurrentLootEntry {
            boss: cell_at(row, col::BOSS).to_string(),
            character: cell_at(row, col::CHARACTER).to_string(),
            item: cell_at(row, col::ITEM).to_string(),
            priority: cell_at(row, col::PRIORITY).to_string(),
            date: CURRENT_RAID_DATE.to_string(),
            item_id: cell_at(row, col::ITEM_ID).to_string(),
        })
        .filter(|entry| !is_blank(&entry.item))
        .collect()
}
