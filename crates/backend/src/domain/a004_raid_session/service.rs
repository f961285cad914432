use contracts::domain::a004_raid_session::aggregate::RaidSession;

use super::parser::parse_raid_archive;
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Архив рейдов
pub async fn get_raid_archive(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<Vec<RaidSession>, TransportError> {
    let raw = sheets.values(ranges::RAID_ARCHIVE, options).await?;
    let sessions = parse_raid_archive(&raw.values);
    tracing::debug!("raid archive: {} sessions", sessions.len());
    Ok(sessions)
}
