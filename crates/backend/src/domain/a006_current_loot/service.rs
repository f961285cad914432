use contracts::domain::a006_current_loot::aggregate::CurrentLootEntry;

use super::parser::parse_current_loot;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Лут текущего рейда
pub async fn get_current_loot(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<CurrentLootEntry>, TransportError> {
    let raw = sheets.values(ranges::CURRENT_LOOT, options).await?;
    Ok(parse_current_loot(&raw.values))
}
