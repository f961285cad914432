use contracts::domain::a007_character::aggregate::PlayerCharacter;

use super::parser::{characters_of, parse_characters};
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Персонажи игрока (таблица владельцев кэшируется общим кэшем запросов)
pub async fn get_player_characters(
    sheets: &SheetsService,
    player: &str,
    options: FetchOptions,
) -> Result<Vec<PlayerCharacter>, TransportError> {
    let table = sheets.table(ranges::CHARACTERS, options).await?;
    Ok(characters_of(parse_characters(&table), player))
}
