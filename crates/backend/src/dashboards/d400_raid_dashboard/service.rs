use contracts::dashboards::d400_raid_dashboard::dto::{DashboardBundle, RaidStats};

use super::stats::build_stats;
use crate::domain::a001_raid_member::parser::parse_raid_setup;
use crate::domain::a001_raid_member::service::get_raid_setup;
use crate::domain::a002_points::parser::parse_points;
use crate::domain::a003_raid_group::parser::{build_groups, BuffEnrichment};
use crate::domain::a004_raid_session::parser::parse_raid_archive;
use crate::domain::a005_loot::parser::parse_loot_archive;
use crate::domain::a006_current_loot::parser::parse_current_loot;
use crate::shared::sheets::batch::BatchValues;
use crate::shared::sheets::{ranges, to_table, FetchOptions, SheetsService, TransportError};

/// Buff table of the batch, `Unavailable` when the range came back empty
fn buffs_from_batch(batch: &BatchValues) -> BuffEnrichment {
    let table = to_table(batch.get(ranges::RAID_OVERVIEW));
    if table.headers.is_empty() {
        BuffEnrichment::Unavailable
    } else {
        BuffEnrichment::Available(table)
    }
}

/// Builds every dashboard section from one batch response
pub fn assemble_bundle(batch: &BatchValues) -> DashboardBundle {
    let members = parse_raid_setup(&to_table(batch.get(ranges::RAID_SETUP)));
    let groups = build_groups(&members, &buffs_from_batch(batch));
    let stats = build_stats(&members);

    DashboardBundle {
        points: parse_points(&to_table(batch.get(ranges::POINTS))),
        groups,
        stats,
        raid_archive: parse_raid_archive(batch.get(ranges::RAID_ARCHIVE)),
        loot_archive: parse_loot_archive(batch.get(ranges::LOOT_ARCHIVE)),
        current_loot: parse_current_loot(batch.get(ranges::CURRENT_LOOT)),
        members,
    }
}

/// Get the full dashboard in a single spreadsheet round trip
pub async fn get_dashboard_bundle(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<DashboardBundle, TransportError> {
    let batch = sheets
        .batch_values(&ranges::DASHBOARD_RANGES, options)
        .await?;
    let bundle = assemble_bundle(&batch);

    tracing::info!(
        "dashboard: {} members, {} points, {} groups, {} raids, {} archived loot, {} current loot",
        bundle.members.len(),
        bundle.points.len(),
        bundle.groups.len(),
        bundle.raid_archive.len(),
        bundle.loot_archive.len(),
        bundle.current_loot.len()
    );
    Ok(bundle)
}

/// Raid statistics on their own
pub async fn get_raid_stats(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<RaidStats, TransportError> {
    let members = get_raid_setup(sheets, options).await?;
    Ok(build_stats(&members))
}
