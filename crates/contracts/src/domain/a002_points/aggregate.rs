use serde::{Deserialize, Serialize};

/// Строка таблицы очков (лист "Punkte")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub player: String,
    pub points: u32,
    pub tokens: String,
}
