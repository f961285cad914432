use contracts::domain::a001_raid_member::aggregate::{RaidMember, RowCategory};
use contracts::domain::a003_raid_group::aggregate::{
    group_name, GroupOverview, ERSATZ_GROUP_NAME, RAID_GROUP_COUNT,
};

use crate::shared::sheets::ranges::{OVERVIEW_BUFFS_HEADER, OVERVIEW_LABEL_HEADER};
use crate::shared::sheets::SheetTable;

/// Result of looking up the optional buff table.
///
/// Buffs only decorate the group overview, so a missing or failed lookup
/// leaves the buff texts empty instead of failing the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuffEnrichment {
    Available(SheetTable),
    Unavailable,
    Failed(String),
}

impl BuffEnrichment {
    fn table(&self) -> Option<&SheetTable> {
        match self {
            BuffEnrichment::Available(table) => Some(table),
            _ => None,
        }
    }
}

/// "Gruppe 1" must not match a label for "Gruppe 10".
fn label_names_group(label: &str, number: i32) -> bool {
    let needle = group_name(number);
    label.match_indices(&needle).any(|(start, _)| {
        !label[start + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

/// Buff text of the first overview row labelled with the group
pub fn find_group_buffs(table: &SheetTable, number: i32) -> Option<String> {
    table
        .rows
        .iter()
        .find(|row| label_names_group(row.get(OVERVIEW_LABEL_HEADER), number))
        .map(|row| row.get(OVERVIEW_BUFFS_HEADER).to_string())
}

fn count_draenei(members: &[RaidMember]) -> u32 {
    members.iter().filter(|m| m.is_draenei()).count() as u32
}

/// Распределение участников по группам
///
/// Members with a final group 1..=5 go to that group, unassigned
/// substitutes go to Ersatzspieler, unassigned unsure rows are left out.
/// Empty numbered groups are dropped, Ersatzspieler is always kept.
pub fn build_groups(members: &[RaidMember], buffs: &BuffEnrichment) -> Vec<GroupOverview> {
    let mut groups: Vec<GroupOverview> = (1..=RAID_GROUP_COUNT)
        .map(|n| GroupOverview::empty(group_name(n)))
        .collect();
    let mut ersatz = GroupOverview::empty(ERSATZ_GROUP_NAME);

    for member in members {
        if member.has_final_group() {
            groups[(member.final_group - 1) as usize]
                .members
                .push(member.clone());
        } else if member.row_category == RowCategory::Ersatz {
            ersatz.members.push(member.clone());
        }
    }

    if let BuffEnrichment::Failed(reason) = buffs {
        tracing::warn!("group buffs unavailable: {}", reason);
    }

    for (index, group) in groups.iter_mut().enumerate() {
        group.draenei_count = count_draenei(&group.members);
        if let Some(table) = buffs.table() {
            if let Some(text) = find_group_buffs(table, index as i32 + 1) {
                group.buffs = text;
            }
        }
    }
    ersatz.draenei_count = count_draenei(&ersatz.members);

    groups.retain(|group| !group.members.is_empty());
    groups.push(ersatz);
    groups
}
