//! Test doubles for the sheets layer.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::cache::DEFAULT_TTL_MS;
use super::client::{RawRange, SheetsTransport};
use super::clock::ClockPort;
use super::error::TransportError;
use super::service::SheetsService;

/// Builds an owned value grid from string literals
pub fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 5, 10, 20, 0, 0).unwrap()),
        }
    }

    pub fn advance_ms(&self, ms: i64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + Duration::milliseconds(ms);
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// In-memory spreadsheet that counts the requests it serves
#[derive(Default)]
pub struct FakeTransport {
    sheets: Mutex<HashMap<String, Vec<Vec<String>>>>,
    failures: Mutex<HashMap<String, TransportError>>,
    fail_next: AtomicUsize,
    delay_ms: u64,
    pub value_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    pub batch_requests: Mutex<Vec<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request waits `delay_ms` before answering
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    pub fn set_range(&self, range: &str, values: Vec<Vec<String>>) {
        self.sheets.lock().unwrap().insert(range.to_string(), values);
    }

    /// Requests touching `range` fail with `error`
    pub fn fail_range(&self, range: &str, error: TransportError) {
        self.failures.lock().unwrap().insert(range.to_string(), error);
    }

    /// The next `n` requests fail with HTTP 503
    pub fn fail_next(&self, n: usize) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    pub fn total_calls(&self) -> usize {
        self.value_calls.load(Ordering::SeqCst) + self.batch_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self, range: &str) -> Result<RawRange, TransportError> {
        if let Some(error) = self.failures.lock().unwrap().get(range) {
            return Err(error.clone());
        }
        let values = self
            .sheets
            .lock()
            .unwrap()
            .get(range)
            .cloned()
            .unwrap_or_default();
        Ok(RawRange {
            range: quote_sheet_name(range),
            values,
        })
    }

    async fn pre_request(&self) -> Result<(), TransportError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        let pending = self.fail_next.load(Ordering::SeqCst);
        if pending > 0 {
            self.fail_next.store(pending - 1, Ordering::SeqCst);
            return Err(TransportError::Status {
                status: 503,
                body: "backend error".to_string(),
            });
        }
        Ok(())
    }
}

/// Echo labels the way the API does: `'Sheet Name'!A1:B2`
fn quote_sheet_name(range: &str) -> String {
    match range.split_once('!') {
        Some((sheet, cells)) if sheet.contains(' ') => format!("'{}'!{}", sheet, cells),
        _ => range.to_string(),
    }
}

#[async_trait]
impl SheetsTransport for FakeTransport {
    async fn get_values(
        &self,
        _spreadsheet_id: &str,
        range: &str,
    ) -> Result<RawRange, TransportError> {
        self.value_calls.fetch_add(1, Ordering::SeqCst);
        self.pre_request().await?;
        self.respond(range).await
    }

    async fn batch_get(
        &self,
        _spreadsheet_id: &str,
        ranges: &[String],
    ) -> Result<Vec<RawRange>, TransportError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.batch_requests.lock().unwrap().push(ranges.to_vec());
        self.pre_request().await?;
        let mut out = Vec::with_capacity(ranges.len());
        for range in ranges {
            out.push(self.respond(range).await?);
        }
        Ok(out)
    }
}

/// Service over a fake transport with a manual clock
pub fn service_with(transport: Arc<FakeTransport>) -> (SheetsService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let service = SheetsService::with_clock(transport, "sheet-id", DEFAULT_TTL_MS, clock.clone());
    (service, clock)
}
