//! Stat-bonus aggregation.
//!
//! Bonus sources (equipped items, perks, running buffs) carry effect records.
//! Only a whitelist of effect kinds means "modify a stat while active"; every
//! other kind describes behaviour this crate does not model and is skipped.
//!
//! ```text
//! BonusSource ──active?──▶ EffectRecord ──kind whitelisted?──▶ result[stat] += amount
//! ```
//!
//! Aggregation is plain summation, so it is independent of source order and
//! removing a source subtracts exactly what it added. Sums wrap on overflow,
//! which keeps both properties for any input.

use std::collections::{BTreeMap, BTreeSet};

use super::id::StatId;

/// Effect kinds that modify a stat while their source is active.
pub const DEFAULT_STAT_MODIFIER_KINDS: [i32; 4] = [53045, 53012, 53014, 53175];

/// One effect carried by a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectRecord {
    /// Catalog effect identifier.
    pub kind: i32,
    /// Stat the effect changes.
    pub stat: StatId,
    /// Signed change applied while active.
    pub amount: i32,
    /// Event that fires the effect (wear, use, ...).
    pub event: i32,
}

impl EffectRecord {
    pub const fn new(kind: i32, stat: StatId, amount: i32, event: i32) -> Self {
        Self {
            kind,
            stat,
            amount,
            event,
        }
    }
}

/// Which effect records count as stat bonuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusRules {
    pub stat_modifier_kinds: BTreeSet<i32>,
    /// When set, only effects fired by one of these events count.
    pub events: Option<BTreeSet<i32>>,
}

impl BonusRules {
    pub fn is_stat_modifier(&self, effect: &EffectRecord) -> bool {
        self.stat_modifier_kinds.contains(&effect.kind)
            && self
                .events
                .as_ref()
                .is_none_or(|events| events.contains(&effect.event))
    }
}

impl Default for BonusRules {
    fn default() -> Self {
        Self {
            stat_modifier_kinds: DEFAULT_STAT_MODIFIER_KINDS.into_iter().collect(),
            events: None,
        }
    }
}

/// Where a bonus comes from. Skill sheets show each category separately.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SourceKind {
    Equipment,
    Perk,
    Buff,
}

/// Anything that contributes stat-modifying effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusSource {
    pub name: String,
    pub kind: SourceKind,
    /// Only active sources contribute.
    pub active: bool,
    pub effects: Vec<EffectRecord>,
}

impl BonusSource {
    /// Creates an active source with no effects.
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            active: true,
            effects: Vec::new(),
        }
    }

    /// Adds an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectRecord) -> Self {
        self.effects.push(effect);
        self
    }

    /// Sets the activation state (builder pattern).
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Summed bonus per stat.
///
/// Stats whose bonuses cancel out are not stored, so two maps compare equal
/// exactly when every stat reads the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AggregatedBonusMap {
    values: BTreeMap<StatId, i32>,
}

impl AggregatedBonusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bonus on `stat`, `0` when none.
    pub fn get(&self, stat: StatId) -> i32 {
        self.values.get(&stat).copied().unwrap_or(0)
    }

    pub fn add(&mut self, stat: StatId, amount: i32) {
        let total = self.get(stat).wrapping_add(amount);
        if total == 0 {
            self.values.remove(&stat);
        } else {
            self.values.insert(stat, total);
        }
    }

    /// Adds every bonus of `other` into `self`.
    pub fn merge(&mut self, other: &AggregatedBonusMap) {
        for (stat, amount) in other.iter() {
            self.add(stat, amount);
        }
    }

    /// Per-stat `self - other`.
    pub fn difference(&self, other: &AggregatedBonusMap) -> AggregatedBonusMap {
        let mut result = self.clone();
        for (stat, amount) in other.iter() {
            result.add(stat, amount.wrapping_neg());
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatId, i32)> + '_ {
        self.values.iter().map(|(stat, amount)| (*stat, *amount))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StatId, i32)> for AggregatedBonusMap {
    fn from_iter<I: IntoIterator<Item = (StatId, i32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (stat, amount) in iter {
            map.add(stat, amount);
        }
        map
    }
}

/// Aggregated bonuses split by [`SourceKind`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusBreakdown {
    pub equipment: AggregatedBonusMap,
    pub perks: AggregatedBonusMap,
    pub buffs: AggregatedBonusMap,
}

impl BonusBreakdown {
    pub fn for_kind(&self, kind: SourceKind) -> &AggregatedBonusMap {
        match kind {
            SourceKind::Equipment => &self.equipment,
            SourceKind::Perk => &self.perks,
            SourceKind::Buff => &self.buffs,
        }
    }

    fn for_kind_mut(&mut self, kind: SourceKind) -> &mut AggregatedBonusMap {
        match kind {
            SourceKind::Equipment => &mut self.equipment,
            SourceKind::Perk => &mut self.perks,
            SourceKind::Buff => &mut self.buffs,
        }
    }

    /// All categories summed.
    pub fn total(&self) -> AggregatedBonusMap {
        let mut total = self.equipment.clone();
        total.merge(&self.perks);
        total.merge(&self.buffs);
        total
    }
}

/// Sums stat bonuses across sources under a set of [`BonusRules`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusAggregator {
    rules: BonusRules,
}

impl BonusAggregator {
    pub fn new(rules: BonusRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &BonusRules {
        &self.rules
    }

    /// What a single source adds, ignoring its activation state.
    pub fn contribution(&self, source: &BonusSource) -> AggregatedBonusMap {
        source
            .effects
            .iter()
            .filter(|effect| self.rules.is_stat_modifier(effect))
            .map(|effect| (effect.stat, effect.amount))
            .collect()
    }

    /// Sums the contributions of every active source.
    pub fn aggregate<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a BonusSource>,
    ) -> AggregatedBonusMap {
        let mut result = AggregatedBonusMap::new();
        for source in sources.into_iter().filter(|source| source.active) {
            result.merge(&self.contribution(source));
        }
        result
    }

    /// Like [`aggregate`](Self::aggregate), keeping categories apart.
    pub fn breakdown<'a>(&self, sources: impl IntoIterator<Item = &'a BonusSource>) -> BonusBreakdown {
        let mut breakdown = BonusBreakdown::default();
        for source in sources.into_iter().filter(|source| source.active) {
            breakdown
                .for_kind_mut(source.kind)
                .merge(&self.contribution(source));
        }
        breakdown
    }
}

/// Aggregates `sources` with the default effect whitelist.
pub fn aggregate_bonuses(sources: &[BonusSource]) -> AggregatedBonusMap {
    BonusAggregator::default().aggregate(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODIFY: i32 = DEFAULT_STAT_MODIFIER_KINDS[0];
    const WEAR: i32 = 14;

    fn ring() -> BonusSource {
        BonusSource::new("Ring of Computing", SourceKind::Equipment)
            .with_effect(EffectRecord::new(MODIFY, StatId::COMPUTER_LITERACY, 30, WEAR))
            .with_effect(EffectRecord::new(MODIFY, StatId::NANO_PROGRAMMING, 20, WEAR))
    }

    fn perk() -> BonusSource {
        BonusSource::new("Enhanced Nano Damage", SourceKind::Perk)
            .with_effect(EffectRecord::new(MODIFY, StatId::COMPUTER_LITERACY, 10, 0))
            .with_effect(EffectRecord::new(MODIFY, StatId::MATTER_CREATION, -5, 0))
    }

    fn buff() -> BonusSource {
        BonusSource::new("Cocoon", SourceKind::Buff)
            .with_effect(EffectRecord::new(MODIFY, StatId::MATTER_CREATION, 5, 0))
            .with_effect(EffectRecord::new(53012, StatId::TIME_AND_SPACE, 40, 0))
    }

    #[test]
    fn sums_whitelisted_effects_of_active_sources() {
        let result = aggregate_bonuses(&[ring(), perk()]);
        assert_eq!(result.get(StatId::COMPUTER_LITERACY), 40);
        assert_eq!(result.get(StatId::NANO_PROGRAMMING), 20);
        assert_eq!(result.get(StatId::MATTER_CREATION), -5);
        assert_eq!(result.get(StatId::PSYCHIC), 0);
    }

    #[test]
    fn order_of_sources_does_not_matter() {
        let forward = aggregate_bonuses(&[ring(), perk(), buff()]);
        let permutations = [
            [ring(), buff(), perk()],
            [perk(), ring(), buff()],
            [perk(), buff(), ring()],
            [buff(), ring(), perk()],
            [buff(), perk(), ring()],
        ];
        for sources in permutations {
            assert_eq!(aggregate_bonuses(&sources), forward);
        }
        assert_eq!(aggregate_bonuses(&[ring(), perk(), buff()]), forward);
    }

    #[test]
    fn inactive_sources_contribute_nothing() {
        let result = aggregate_bonuses(&[ring().with_active(false)]);
        assert!(result.is_empty());
    }

    #[test]
    fn other_effect_kinds_and_empty_sources_are_ignored() {
        let odd = BonusSource::new("Teleport Beacon", SourceKind::Equipment)
            .with_effect(EffectRecord::new(53033, StatId::STRENGTH, 999, WEAR));
        let empty = BonusSource::new("Broken data", SourceKind::Buff);

        let result = aggregate_bonuses(&[odd, empty, ring()]);
        assert_eq!(result, aggregate_bonuses(&[ring()]));
    }

    #[test]
    fn removing_a_source_subtracts_exactly_its_contribution() {
        let both = aggregate_bonuses(&[ring(), perk()]);
        let without_perk = aggregate_bonuses(&[ring()]);

        assert_eq!(both.difference(&without_perk), aggregate_bonuses(&[perk()]));
    }

    #[test]
    fn cancelling_bonuses_leave_no_entry() {
        let result = aggregate_bonuses(&[perk(), buff()]);
        assert_eq!(result.get(StatId::MATTER_CREATION), 0);
        assert!(!result.iter().any(|(stat, _)| stat == StatId::MATTER_CREATION));
    }

    #[test]
    fn event_filter_limits_counted_effects() {
        let rules = BonusRules {
            events: Some([WEAR].into_iter().collect()),
            ..BonusRules::default()
        };
        let aggregator = BonusAggregator::new(rules);

        let result = aggregator.aggregate(&[ring(), perk()]);
        assert_eq!(result, aggregate_bonuses(&[ring()]));
    }

    #[test]
    fn breakdown_keeps_categories_and_sums_to_total() {
        let sources = [ring(), perk(), buff()];
        let aggregator = BonusAggregator::default();
        let breakdown = aggregator.breakdown(&sources);

        assert_eq!(breakdown.equipment.get(StatId::COMPUTER_LITERACY), 30);
        assert_eq!(breakdown.perks.get(StatId::COMPUTER_LITERACY), 10);
        assert_eq!(breakdown.buffs.get(StatId::TIME_AND_SPACE), 40);
        assert_eq!(breakdown.total(), aggregator.aggregate(&sources));
    }

    #[test]
    fn sums_wrap_instead_of_overflowing() {
        let big = BonusSource::new("big", SourceKind::Buff)
            .with_effect(EffectRecord::new(MODIFY, StatId::STRENGTH, i32::MAX, 0));
        let more = BonusSource::new("more", SourceKind::Buff)
            .with_effect(EffectRecord::new(MODIFY, StatId::STRENGTH, 10, 0));

        let both = aggregate_bonuses(&[big.clone(), more.clone()]);
        assert_eq!(both.difference(&aggregate_bonuses(&[big])), aggregate_bonuses(&[more]));
    }
}
