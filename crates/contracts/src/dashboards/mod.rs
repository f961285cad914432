pub mod d400_raid_dashboard;
