pub mod a001_raid_member;
pub mod a002_points;
pub mod a003_raid_group;
pub mod a004_raid_session;
pub mod a005_loot;
pub mod a006_current_loot;
pub mod a007_character;
