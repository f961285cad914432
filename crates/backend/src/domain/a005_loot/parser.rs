use contracts::domain::a005_loot::aggregate::LootEntry;

use crate::shared::sheets::cells::{cell_at, compare_dates_desc, is_blank};
use crate::shared::sheets::ranges::loot_archive as col;

/// Newest first. Stable, so same-day entries keep sheet order and entries
/// with an unreadable date end up at the bottom in sheet order.
pub fn sort_loot_by_date(entries: &mut [LootEntry]) {
    entries.sort_by(|a, b| compare_dates_desc(&a.date, &b.date));
}

/// Разбор архива лута (строка 0: заголовок)
pub fn parse_loot_archive(rows: &[Vec<String>]) -> Vec<LootEntry> {
    let mut entries: Vec<LootEntry> = rows
        .iter()
        .skip(1)
        .map(|row| LootEntry {
            raid_id: cell_at(row, col::RAID_ID).to_string(),
            date: cell_at(row, col::DATE).to_string(),
            character: cell_at(row, col::CHARACTER).to_string(),
            item: cell_at(row, col::ITEM).to_string(),
            priority: cell_at(row, col::PRIORITY).to_string(),
            item_id: cell_at(row, col::ITEM_ID).to_string(),
        })
        .filter(|entry| !is_blank(&entry.item))
        .collect();

    sort_loot_by_date(&mut entries);
    entries
}
