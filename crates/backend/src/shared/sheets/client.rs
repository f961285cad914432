use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::error::TransportError;

/// Значения одного диапазона: заголовок и строки, все ячейки строками
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRange {
    /// Range label as echoed by the API, e.g. `'ICC25 Loot'!A1:E1000`
    pub range: String,
    pub values: Vec<Vec<String>>,
}

/// Доступ к Google Sheets API
///
/// One call is one HTTP round trip, no retries. Retrying and caching
/// belong to the callers.
#[async_trait]
pub trait SheetsTransport: Send + Sync {
    /// GET `{spreadsheet_id}/values/{range}`
    async fn get_values(&self, spreadsheet_id: &str, range: &str)
        -> Result<RawRange, TransportError>;

    /// GET `{spreadsheet_id}/values:batchGet`, one result per requested range
    async fn batch_get(
        &self,
        spreadsheet_id: &str,
        ranges: &[String],
    ) -> Result<Vec<RawRange>, TransportError>;
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct ValueRangeDto {
    #[serde(default)]
    range: String,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct BatchGetDto {
    #[serde(default, rename = "valueRanges")]
    value_ranges: Vec<ValueRangeDto>,
}

impl From<ValueRangeDto> for RawRange {
    fn from(dto: ValueRangeDto) -> Self {
        RawRange {
            range: dto.range,
            values: dto
                .values
                .into_iter()
                .map(|row| row.into_iter().map(cell_to_string).collect())
                .collect(),
        }
    }
}

/// Formatted values come back as strings; numbers and booleans show up
/// when a cell is unformatted, null when a cell was cleared.
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn parse_value_range(body: &str) -> Result<RawRange, TransportError> {
    serde_json::from_str::<ValueRangeDto>(body)
        .map(RawRange::from)
        .map_err(|e| TransportError::InvalidJson(e.to_string()))
}

pub fn parse_batch_get(body: &str) -> Result<Vec<RawRange>, TransportError> {
    serde_json::from_str::<BatchGetDto>(body)
        .map(|dto| dto.value_ranges.into_iter().map(RawRange::from).collect())
        .map_err(|e| TransportError::InvalidJson(e.to_string()))
}

// ============================================================================
// HTTP client
// ============================================================================

/// HTTP-клиент для Google Sheets API v4 (API key auth)
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleSheetsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self::with_http_client(client, base_url, api_key))
    }

    pub fn with_http_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            self.base_url,
            spreadsheet_id,
            urlencoding::encode(range)
        )
    }

    pub fn batch_get_url(&self, spreadsheet_id: &str) -> String {
        format!("{}/{}/values:batchGet", self.base_url, spreadsheet_id)
    }

    /// Sends the request and returns the body of a successful response.
    /// The key travels as a query parameter, so reqwest errors are
    /// stripped of their URL before they leave this function.
    async fn get_body(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.without_url().to_string()))?;

        let status = response.status();
        tracing::debug!("Sheets API response: {} for {}", status, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sheets API request failed: {} {}", status, url);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.without_url().to_string()))
    }
}

#[async_trait]
impl SheetsTransport for GoogleSheetsClient {
    async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<RawRange, TransportError> {
        let url = self.values_url(spreadsheet_id, range);
        tracing::info!("Sheets API: GET values {}", range);
        let body = self.get_body(&url, &[]).await?;
        parse_value_range(&body)
    }

    async fn batch_get(
        &self,
        spreadsheet_id: &str,
        ranges: &[String],
    ) -> Result<Vec<RawRange>, TransportError> {
        let url = self.batch_get_url(spreadsheet_id);
        tracing::info!("Sheets API: batchGet {} ranges", ranges.len());
        let query: Vec<(&str, &str)> = ranges.iter().map(|r| ("ranges", r.as_str())).collect();
        let body = self.get_body(&url, &query).await?;
        parse_batch_get(&body)
    }
}
