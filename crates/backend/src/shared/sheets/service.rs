use std::sync::Arc;
use std::time::Duration;

use super::batch::{demux, BatchValues};
use super::cache::{FetchOptions, RequestCache};
use super::client::{GoogleSheetsClient, RawRange, SheetsTransport};
use super::clock::{ClockPort, SystemClock};
use super::error::TransportError;
use super::table::{to_table, SheetTable};
use crate::projections::p900_player_loot::cache::PlayerLootCache;
use crate::shared::config::Config;

pub fn values_cache_key(spreadsheet_id: &str, range: &str) -> String {
    format!("values:{}:{}", spreadsheet_id, range)
}

/// Same set of ranges, same key, whatever the request order
pub fn batch_cache_key(spreadsheet_id: &str, ranges: &[String]) -> String {
    let mut sorted: Vec<&str> = ranges.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    format!("batch:{}:{}", spreadsheet_id, sorted.join("|"))
}

/// Доступ к таблице рейда: транспорт, кэш запросов и кэш лута игроков.
///
/// One instance lives for the whole process; `clear_cache` resets every
/// cache it owns.
pub struct SheetsService {
    transport: Arc<dyn SheetsTransport>,
    spreadsheet_id: String,
    values: RequestCache<Arc<RawRange>>,
    batches: RequestCache<Arc<BatchValues>>,
    player_loot: PlayerLootCache,
}

impl SheetsService {
    pub fn new(
        transport: Arc<dyn SheetsTransport>,
        spreadsheet_id: impl Into<String>,
        cache_ttl_ms: u64,
    ) -> Self {
        Self::with_clock(transport, spreadsheet_id, cache_ttl_ms, Arc::new(SystemClock))
    }

    pub fn with_clock(
        transport: Arc<dyn SheetsTransport>,
        spreadsheet_id: impl Into<String>,
        cache_ttl_ms: u64,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            transport,
            spreadsheet_id: spreadsheet_id.into(),
            values: RequestCache::new(clock.clone(), cache_ttl_ms),
            batches: RequestCache::new(clock, cache_ttl_ms),
            player_loot: PlayerLootCache::new(),
        }
    }

    /// Builds the Google client from configuration and environment credentials
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let client = GoogleSheetsClient::new(
            config.sheets.api_base_url.clone(),
            config.credentials.api_key.clone(),
            Duration::from_secs(config.sheets.request_timeout_secs),
        )?;
        Ok(Self::new(
            Arc::new(client),
            config.credentials.spreadsheet_id.clone(),
            config.sheets.cache_ttl_ms,
        ))
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn player_loot(&self) -> &PlayerLootCache {
        &self.player_loot
    }

    /// Without a spreadsheet id there is nothing to ask for; callers get
    /// empty ranges instead of an API error.
    fn is_unconfigured(&self) -> bool {
        self.spreadsheet_id.trim().is_empty()
    }

    /// Raw values of one range, through the request cache
    pub async fn values(
        &self,
        range: &str,
        options: FetchOptions,
    ) -> Result<Arc<RawRange>, TransportError> {
        if self.is_unconfigured() {
            tracing::warn!("spreadsheet id not configured, '{}' reads as empty", range);
            return Ok(Arc::new(RawRange {
                range: range.to_string(),
                values: Vec::new(),
            }));
        }

        let key = values_cache_key(&self.spreadsheet_id, range);
        let transport = self.transport.clone();
        let spreadsheet_id = self.spreadsheet_id.clone();
        let range = range.to_string();

        self.values
            .get_or_fetch(
                &key,
                move || async move {
                    transport
                        .get_values(&spreadsheet_id, &range)
                        .await
                        .map(Arc::new)
                },
                options,
            )
            .await
    }

    /// Values of one range, normalized into a header-keyed table
    pub async fn table(
        &self,
        range: &str,
        options: FetchOptions,
    ) -> Result<SheetTable, TransportError> {
        let raw = self.values(range, options).await?;
        Ok(to_table(&raw.values))
    }

    /// Several ranges in one round trip, through the request cache
    pub async fn batch_values(
        &self,
        ranges: &[&str],
        options: FetchOptions,
    ) -> Result<Arc<BatchValues>, TransportError> {
        let ranges: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();

        if self.is_unconfigured() {
            tracing::warn!("spreadsheet id not configured, batch reads as empty");
            return Ok(Arc::new(BatchValues::default()));
        }

        let key = batch_cache_key(&self.spreadsheet_id, &ranges);
        let transport = self.transport.clone();
        let spreadsheet_id = self.spreadsheet_id.clone();

        self.batches
            .get_or_fetch(
                &key,
                move || async move {
                    let response = transport.batch_get(&spreadsheet_id, &ranges).await?;
                    Ok(Arc::new(demux(&ranges, response)))
                },
                options,
            )
            .await
    }

    /// Drops every cached response and the player loot corpus
    pub async fn clear_cache(&self) {
        self.values.clear().await;
        self.batches.clear().await;
        self.player_loot.clear().await;
        tracing::info!("sheets cache cleared");
    }
}
