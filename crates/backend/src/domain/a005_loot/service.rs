use contracts::domain::a005_loot::aggregate::LootEntry;

use super::parser::parse_loot_archive;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Архив лута, новые записи первыми
pub async fn get_loot_archive(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<LootEntry>, TransportError> {
    let raw = sheets.values(ranges::LOOT_ARCHIVE, options).await?;
    Ok(parse_loot_archive(&raw.values))
}
