use serde::{Deserialize, Serialize};

/// Участник архивного рейда
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidSessionMember {
    pub character: String,
    pub role: String,
    pub class: String,
    pub position: i32,
}

/// One archived raid, reconstructed from a contiguous block of archive rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidSession {
    pub id: String,
    /// Date as written in the sheet (dd.mm.yyyy)
    pub date: String,
    pub members: Vec<RaidSessionMember>,
}

impl RaidSession {
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            members: Vec::new(),
        }
    }
}
