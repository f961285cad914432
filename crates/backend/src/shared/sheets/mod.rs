//! Google Sheets data access: raw range fetching, response caching,
//! and row normalization.

pub mod batch;
pub mod cache;
pub mod cells;
pub mod client;
pub mod clock;
pub mod error;
pub mod ranges;
pub mod service;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::FetchOptions;
pub use client::{GoogleSheetsClient, RawRange, SheetsTransport};
pub use error::TransportError;
pub use service::SheetsService;
pub use table::{to_table, SheetRow, SheetTable};
