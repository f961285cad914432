use contracts::domain::a001_raid_member::aggregate::{RaidMember, RowCategory};

use crate::shared::sheets::cells::{is_blank, parse_int};
use crate::shared::sheets::SheetTable;

// Column positions in "ICC25 Raidsetup!B1:J41"
const CHARACTER: usize = 0;
const PLAYER: usize = 1;
const CLASS: usize = 2;
const SPEC: usize = 3;
const ROLE: usize = 4;
const DRAENEI: usize = 5;
const MANUAL_GROUP: usize = 6;
const POSITION: usize = 7;
const FINAL_GROUP: usize = 8;

/// Data rows start on sheet row 2, below the header
const FIRST_DATA_ROW: u32 = 2;

/// Парсинг таблицы состава рейда
///
/// The slot (and with it the row category) is the sheet row number, so it
/// is assigned before blank rows are filtered out.
pub fn parse_raid_setup(table: &SheetTable) -> Vec<RaidMember> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let slot = index as u32 + FIRST_DATA_ROW;
            let cell = |column| table.cell(row, column).to_string();
            RaidMember {
                slot,
                character: cell(CHARACTER),
                player: cell(PLAYER),
                class: cell(CLASS),
                spec: cell(SPEC),
                role: cell(ROLE),
                draenei: cell(DRAENEI),
                manual_group: cell(MANUAL_GROUP),
                position: parse_int(table.cell(row, POSITION)),
                final_group: parse_int(table.cell(row, FINAL_GROUP)),
                row_category: RowCategory::from_slot(slot),
            }
        })
        .filter(|member| !is_blank(&member.character))
        .collect()
}
