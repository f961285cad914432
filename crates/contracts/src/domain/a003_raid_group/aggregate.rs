use serde::{Deserialize, Serialize};

use crate::domain::a001_raid_member::aggregate::RaidMember;

/// Name of the substitute pool, always present in the overview
pub const ERSATZ_GROUP_NAME: &str = "Ersatzspieler";

/// Number of regular raid groups in a 25-player raid
pub const RAID_GROUP_COUNT: i32 = 5;

/// Display name of a numbered raid group
pub fn group_name(number: i32) -> String {
    format!("Gruppe {}", number)
}

/// Группа рейда с участниками и баффами
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOverview {
    pub group_name: String,
    pub members: Vec<RaidMember>,
    /// Free text from the raid overview sheet, empty when unknown
    pub buffs: String,
    pub draenei_count: u32,
}

impl GroupOverview {
    pub fn empty(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            members: Vec::new(),
            buffs: String::new(),
            draenei_count: 0,
        }
    }

    pub fn is_ersatz(&self) -> bool {
        self.group_name == ERSATZ_GROUP_NAME
    }
}
