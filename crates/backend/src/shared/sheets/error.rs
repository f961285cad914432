use thiserror::Error;

/// Ошибки обращения к Google Sheets API
///
/// Clone is required: one failed request is handed to every caller
/// that was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Sheets API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON in Sheets API response: {0}")]
    InvalidJson(String),
}

impl TransportError {
    /// HTTP status for errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
