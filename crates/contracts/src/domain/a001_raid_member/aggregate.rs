use serde::{Deserialize, Serialize};

/// Last sheet row that still belongs to the confirmed lineup.
pub const LAST_DEFINITE_SLOT: u32 = 25;
/// Last sheet row of the substitute (Ersatzspieler) block.
pub const LAST_ERSATZ_SLOT: u32 = 31;

// ============================================================================
// Row category
// ============================================================================

/// Which block of the roster sheet a row sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    Definite,
    Ersatz,
    Unsure,
}

impl RowCategory {
    /// Category is a function of the 1-based sheet row alone.
    pub fn from_slot(slot: u32) -> Self {
        if slot <= LAST_DEFINITE_SLOT {
            RowCategory::Definite
        } else if slot <= LAST_ERSATZ_SLOT {
            RowCategory::Ersatz
        } else {
            RowCategory::Unsure
        }
    }
}

// ============================================================================
// Raid member
// ============================================================================

/// One character slot of the raid setup sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidMember {
    /// 1-based sheet row
    pub slot: u32,
    pub character: String,
    pub player: String,
    pub class: String,
    pub spec: String,
    /// "Tank" | "Heiler" | "Mdd" | "Rdd", anything else is passed through
    pub role: String,
    /// "Ja" marks a Draenei character
    pub draenei: String,
    /// Provisional group typed by the officers
    pub manual_group: String,
    pub position: i32,
    /// Confirmed group 1..=5, 0 when unassigned
    pub final_group: i32,
    pub row_category: RowCategory,
}

impl RaidMember {
    pub fn is_draenei(&self) -> bool {
        self.draenei == "Ja"
    }

    /// True when the member sits in one of the five raid groups
    pub fn has_final_group(&self) -> bool {
        (1..=5).contains(&self.final_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_category_thresholds() {
        assert_eq!(RowCategory::from_slot(2), RowCategory::Definite);
        assert_eq!(RowCategory::from_slot(25), RowCategory::Definite);
        assert_eq!(RowCategory::from_slot(26), RowCategory::Ersatz);
        assert_eq!(RowCategory::from_slot(31), RowCategory::Ersatz);
        assert_eq!(RowCategory::from_slot(32), RowCategory::Unsure);
        assert_eq!(RowCategory::from_slot(41), RowCategory::Unsure);
    }

    #[test]
    fn test_row_category_serializes_lowercase() {
        let json = serde_json::to_string(&RowCategory::Ersatz).unwrap();
        assert_eq!(json, "\"ersatz\"");
    }
}
