use contracts::domain::a003_raid_group::aggregate::GroupOverview;

use super::parser::{build_groups, BuffEnrichment};
use crate::domain::a001_raid_member::service::get_raid_setup;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Loads the buff table; any failure is reported, never raised.
pub async fn load_buffs(sheets: &SheetsService, options: FetchOptions) -> BuffEnrichment {
    match sheets.table(ranges::RAID_OVERVIEW, options).await {
        Ok(table) if table.headers.is_empty() => BuffEnrichment::Unavailable,
        Ok(table) => BuffEnrichment::Available(table),
        Err(e) => BuffEnrichment::Failed(e.to_string()),
    }
}

/// Обзор групп рейда: состав и баффы запрашиваются параллельно
pub async fn get_group_overview(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<GroupOverview>, TransportError> {
    let (members, buffs) = tokio::join!(
        get_raid_setup(sheets, options),
        load_buffs(sheets, options)
    );
    Ok(build_groups(&members?, &buffs))
}
