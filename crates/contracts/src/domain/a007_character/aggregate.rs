use serde::{Deserialize, Serialize};

/// Character ownership row: which player plays which character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub character: String,
    pub player: String,
    pub class: String,
}
