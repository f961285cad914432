use contracts::domain::a007_character::aggregate::PlayerCharacter;
use contracts::projections::p900_player_loot::dto::{PlayerDetailsResponse, PlayerLootEntry};
use std::collections::HashSet;

use super::cache::LootCorpus;
use crate::domain::a005_loot::parser::parse_loot_archive;
use crate::domain::a006_current_loot::parser::parse_current_loot;
use crate::domain::a007_character::service::get_player_characters;
use crate::shared::sheets::cells::{compare_dates_desc, is_blank};
use crate::shared::sheets::{ranges, FetchOptions, SheetsService, TransportError};

/// Current and archived loot in one batch request
pub async fn load_loot_corpus(
    sheets: &SheetsService,
    options: FetchOptions,
) -> Result<LootCorpus, TransportError> {
    let batch = sheets
        .batch_values(&ranges::LOOT_CORPUS_RANGES, options)
        .await?;
    Ok(LootCorpus {
        current: parse_current_loot(batch.get(ranges::CURRENT_LOOT)),
        archive: parse_loot_archive(batch.get(ranges::LOOT_ARCHIVE)),
    })
}

/// Loot of the given characters, newest first
pub fn collect_player_loot(corpus: &LootCorpus, characters: &[PlayerCharacter]) -> Vec<PlayerLootEntry> {
    let names: HashSet<&str> = characters.iter().map(|c| c.character.as_str()).collect();

    let current = corpus
        .current
        .iter()
        .filter(|entry| names.contains(entry.character.as_str()))
        .cloned()
        .map(PlayerLootEntry::from);
    let archived = corpus
        .archive
        .iter()
        .filter(|entry| names.contains(entry.character.as_str()))
        .cloned()
        .map(PlayerLootEntry::from);

    let mut loot: Vec<PlayerLootEntry> = current
        .chain(archived)
        .filter(|entry| !is_blank(&entry.item))
        .collect();
    loot.sort_by(|a, b| compare_dates_desc(&a.date, &b.date));
    loot
}

/// История лута игрока по всем его персонажам
pub async fn get_player_loot_history(
    sheets: &SheetsService,
    player: &str,
    options: FetchOptions,
) -> Result<Vec<PlayerLootEntry>, TransportError> {
    let (characters, corpus) = tokio::try_join!(
        get_player_characters(sheets, player, options),
        sheets
            .player_loot()
            .get_or_load(|| load_loot_corpus(sheets, options)),
    )?;

    let loot = collect_player_loot(&corpus, &characters);
    tracing::debug!(
        "loot history for {}: {} characters, {} items",
        player,
        characters.len(),
        loot.len()
    );
    Ok(loot)
}

/// Characters and loot of a player, fetched concurrently
pub async fn get_player_details(
    sheets: &SheetsService,
    player: &str,
    options: FetchOptions,
) -> Result<PlayerDetailsResponse, TransportError> {
    let (characters, loot) = tokio::try_join!(
        get_player_characters(sheets, player, options),
        get_player_loot_history(sheets, player, options),
    )?;
    Ok(PlayerDetailsResponse {
        player: player.to_string(),
        characters,
        loot,
    })
}
