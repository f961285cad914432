use contracts::domain::a007_character::aggregate::PlayerCharacter;

use crate::shared::sheets::cells::is_blank;
use crate::shared::sheets::SheetTable;

const CHARACTER: usize = 0;
const PLAYER: usize = 1;
const CLASS: usize = 2;

/// Like the points sheet, the character sheet has a second header line.
const SUBHEADER_ROWS: usize = 1;

/// All rows of the character ownership sheet
pub fn parse_characters(table: &SheetTable) -> Vec<PlayerCharacter> {
    table
        .rows
        .iter()
        .skip(SUBHEADER_ROWS)
        .map(|row| PlayerCharacter {
            character: table.cell(row, CHARACTER).to_string(),
            player: table.cell(row, PLAYER).to_string(),
            class: table.cell(row, CLASS).to_string(),
        })
        .filter(|c| !is_blank(&c.character))
        .collect()
}

/// Characters owned by `player`, exact name match
pub fn characters_of(characters: Vec<PlayerCharacter>, player: &str) -> Vec<PlayerCharacter> {
    characters
        .into_iter()
        .filter(|c| c.player == player)
        .collect()
}
