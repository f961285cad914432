use std::sync::Arc;

use crate::shared::sheets::SheetsService;

/// Shared state of all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetsService>,
}

impl AppState {
    pub fn new(sheets: SheetsService) -> Self {
        Self {
            sheets: Arc::new(sheets),
        }
    }
}
