use contracts::dashboards::d400_raid_dashboard::dto::RaidStats;
use contracts::domain::a001_raid_member::aggregate::RaidMember;

const ROLE_TANK: &str = "Tank";
const ROLE_HEALER: &str = "Heiler";
const ROLE_MELEE: &str = "Mdd";
const ROLE_RANGED: &str = "Rdd";

/// Build raid statistics
///
/// Only members with a final group 1..=5 count; substitutes and unsure
/// signups are left out of every number.
pub fn build_stats(members: &[RaidMember]) -> RaidStats {
    let mut stats = RaidStats::default();

    for member in members.iter().filter(|m| m.has_final_group()) {
        stats.total_members += 1;
        match member.role.as_str() {
            ROLE_TANK => stats.tanks += 1,
            ROLE_HEALER => stats.healers += 1,
            ROLE_MELEE => stats.melee += 1,
            ROLE_RANGED => stats.ranged += 1,
            _ => {}
        }
        if member.is_draenei() {
            stats.draenei += 1;
        }
        *stats
            .class_distribution
            .entry(member.class.clone())
            .or_insert(0) += 1;
        *stats
            .group_distribution
            .entry(member.final_group)
            .or_insert(0) += 1;
    }

    stats
}
