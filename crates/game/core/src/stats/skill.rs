//! Displayed skill values.
//!
//! Formula: total = base + trickle + IP + equipment + perks + buffs
//!
//! Every skill shown in the planner goes through [`compute_skill_total`]; do
//! not re-derive the sum elsewhere.

use super::bonus::BonusBreakdown;
use super::id::StatId;

/// Canonical skill total.
///
/// # Example
/// ```
/// # use aoplan_core::stats::compute_skill_total;
/// assert_eq!(compute_skill_total(5, 10, 245, 50, 25, 10), 345);
/// ```
pub fn compute_skill_total(
    base: i32,
    trickle: i32,
    ip_points: i32,
    equipment_bonus: i32,
    perk_bonus: i32,
    buff_bonus: i32,
) -> i32 {
    [
        base,
        trickle,
        ip_points,
        equipment_bonus,
        perk_bonus,
        buff_bonus,
    ]
    .into_iter()
    .fold(0, i32::wrapping_add)
}

/// The character-owned part of a skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillComponents {
    /// Breed/profession starting value.
    pub base: i32,
    /// Points trickled down from abilities.
    pub trickle: i32,
    /// Points bought with improvement points.
    pub ip: i32,
}

impl SkillComponents {
    pub const fn new(base: i32, trickle: i32, ip: i32) -> Self {
        Self { base, trickle, ip }
    }

    /// Value without any bonuses.
    pub fn raw(&self) -> i32 {
        compute_skill_total(self.base, self.trickle, self.ip, 0, 0, 0)
    }

    /// Value including the bonuses `breakdown` holds for `stat`.
    pub fn total_with(&self, stat: StatId, breakdown: &BonusBreakdown) -> i32 {
        compute_skill_total(
            self.base,
            self.trickle,
            self.ip,
            breakdown.equipment.get(stat),
            breakdown.perks.get(stat),
            breakdown.buffs.get(stat),
        )
    }
}
