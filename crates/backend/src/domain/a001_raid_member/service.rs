use contracts::domain::a001_raid_member::aggregate::RaidMember;

use super::parser::parse_raid_setup;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Получение состава рейда
pub async fn get_raid_setup(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<RaidMember>, TransportError> {
    let table = sheets.table(ranges::RAID_SETUP, options).await?;
    let members = parse_raid_setup(&table);
    tracing::debug!("raid setup: {} rows, {} members", table.rows.len(), members.len());
    Ok(members)
}
