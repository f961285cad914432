use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_raid_member::aggregate::RaidMember;
use crate::domain::a002_points::aggregate::PointsEntry;
use crate::domain::a003_raid_group::aggregate::GroupOverview;
use crate::domain::a004_raid_session::aggregate::RaidSession;
use crate::domain::a005_loot::aggregate::LootEntry;
use crate::domain::a006_current_loot::aggregate::CurrentLootEntry;

/// Query of the read endpoints (dashboard and single sheets)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// Skip the response cache and reload from the spreadsheet
    #[serde(default)]
    pub force: bool,
}

/// Counts over the members placed in groups 1..=5
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidStats {
    pub total_members: u32,
    pub tanks: u32,
    pub healers: u32,
    pub melee: u32,
    pub ranged: u32,
    pub draenei: u32,
    /// Class name -> number of members
    pub class_distribution: BTreeMap<String, u32>,
    /// Group number -> number of members
    pub group_distribution: BTreeMap<i32, u32>,
}

/// Full dashboard snapshot, built from one batched spreadsheet request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardBundle {
    pub members: Vec<RaidMember>,
    pub points: Vec<PointsEntry>,
    pub groups: Vec<GroupOverview>,
    pub stats: RaidStats,
    pub raid_archive: Vec<RaidSession>,
    pub loot_archive: Vec<LootEntry>,
    pub current_loot: Vec<CurrentLootEntry>,
}
