use contracts::domain::a004_raid_session::aggregate::{RaidSession, RaidSessionMember};

use crate::shared::sheets::cells::{cell_at, is_blank, parse_int};
use crate::shared::sheets::ranges::raid_archive as col;

/// Разбор архива рейдов
///
/// Rows of one raid are contiguous and share the id in column A. A new id
/// closes the open raid; a row with a blank id still belongs to it. Closed
/// raids are never reopened, a later block with a known id starts a new one.
pub fn parse_raid_archive(rows: &[Vec<String>]) -> Vec<RaidSession> {
    if rows.len() < 2 {
        return Vec::new();
    }

    let mut sessions = Vec::new();
    let mut current: Option<RaidSession> = None;

    for row in &rows[1..] {
        let raid_id = cell_at(row, col::RAID_ID);

        let starts_new = !is_blank(raid_id)
            && current.as_ref().map_or(true, |session| session.id != raid_id);
        if starts_new {
            if let Some(done) = current.take() {
                sessions.push(done);
            }
            current = Some(RaidSession::new(raid_id, cell_at(row, col::DATE)));
        }

        let character = cell_at(row, col::CHARACTER);
        if let Some(session) = current.as_mut() {
            if !is_blank(character) {
                session.members.push(RaidSessionMember {
                    character: character.to_string(),
                    role: cell_at(row, col::ROLE).to_string(),
                    class: cell_at(row, col::CLASS).to_string(),
                    position: parse_int(cell_at(row, col::POSITION)),
                });
            }
        }
    }

    if let Some(done) = current {
        sessions.push(done);
    }

    sessions
}
