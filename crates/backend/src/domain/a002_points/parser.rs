use contracts::domain::a002_points::aggregate::PointsEntry;

use crate::shared::sheets::cells::{is_blank, parse_int};
use crate::shared::sheets::SheetTable;

const PLAYER: usize = 0;
const POINTS: usize = 1;
const TOKENS: usize = 4;

/// The points sheet carries a second header line under the first one.
const SUBHEADER_ROWS: usize = 1;

pub fn parse_points(table: &SheetTable) -> Vec<PointsEntry> {
    table
        .rows
        .iter()
        .skip(SUBHEADER_ROWS)
        .map(|row| PointsEntry {
            player: table.cell(row, PLAYER).to_string(),
            points: parse_int(table.cell(row, POINTS)).max(0) as u32,
            tokens: table.cell(row, TOKENS).to_string(),
        })
        .filter(|entry| !is_blank(&entry.player))
        .collect()
}
