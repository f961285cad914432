//! Fixed sheet ranges and the column layout of the headerless sheets.
//!
//! The archive and loot sheets are read by column position, a layout change
//! in the spreadsheet means editing the constants here.

pub const RAID_SETUP: &str = "ICC25 Raidsetup!B1:J41";
pub const POINTS: &str = "Punkte!A1:E100";
pub const RAID_OVERVIEW: &str = "Raid-Overview!A1:I10";
pub const RAID_ARCHIVE: &str = "Raid Archive!A1:Z1000";
pub const LOOT_ARCHIVE: &str = "Loot Archive!A1:F1000";
pub const CURRENT_LOOT: &str = "ICC25 Loot!A1:E1000";
pub const CHARACTERS: &str = "Charaktere!A1:C100";

/// Ranges of the dashboard bundle, in request order
pub const DASHBOARD_RANGES: [&str; 6] = [
    RAID_SETUP,
    POINTS,
    RAID_OVERVIEW,
    RAID_ARCHIVE,
    LOOT_ARCHIVE,
    CURRENT_LOOT,
];

/// Ranges making up the loot corpus of the player view
pub const LOOT_CORPUS_RANGES: [&str; 2] = [CURRENT_LOOT, LOOT_ARCHIVE];

/// Raid-Overview: column holding the "Gruppe N" label
pub const OVERVIEW_LABEL_HEADER: &str = "ICC25 Gruppenansicht";
/// Raid-Overview: column holding the buff text
pub const OVERVIEW_BUFFS_HEADER: &str = "Raid Buffs";

pub mod raid_archive {
    pub const RAID_ID: usize = 0;
    pub const DATE: usize = 1;
    pub const POSITION: usize = 2;
    pub const CHARACTER: usize = 3;
    pub const ROLE: usize = 4;
    pub const CLASS: usize = 5;
}

pub mod loot_archive {
    pub const RAID_ID: usize = 0;
    pub const DATE: usize = 1;
    pub const CHARACTER: usize = 2;
    pub const ITEM: usize = 3;
    pub const PRIORITY: usize = 4;
    pub const ITEM_ID: usize = 5;
}

pub mod current_loot {
    pub const BOSS: usize = 0;
    pub const CHARACTER: usize = 1;
    pub const ITEM: usize = 2;
    pub const PRIORITY: usize = 3;
    pub const ITEM_ID: usize = 4;
}
