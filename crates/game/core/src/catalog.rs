//! Static catalog entries (items, nanos, perks) and catalog-wide queries.
//!
//! Entries are immutable once built. Raw criteria coming from catalog files
//! are decoded into typed [`Criterion`]s here, which is the only place
//! operator codes are interpreted.

use std::collections::{BTreeSet, HashMap};

use crate::config::UnknownOperatorPolicy;
use crate::criteria::{
    Criterion, CriterionSequence, Evaluation, Evaluator, Operator, OperatorTable,
    is_eligible_for_actor,
};
use crate::error::CatalogError;
use crate::stats::{ActorStats, BonusSource, EffectRecord, SourceKind, StatId};

/// Catalog identifier of an entry (the game's AOID).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(pub u32);

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntryKind {
    Item,
    Nano,
    Perk,
}

/// Action a requirement list is attached to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Use,
    Wear,
    Wield,
    Cast,
}

/// An action and the criteria that gate it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub kind: ActionKind,
    pub criteria: CriterionSequence,
}

/// A criterion as stored in catalog files: the operator is still a raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawCriterion {
    pub stat: i32,
    pub operator: i32,
    pub value: i32,
}

/// A raw criterion dropped under [`UnknownOperatorPolicy::Skip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkippedCriterion {
    /// Position in the raw list.
    pub index: usize,
    pub raw: RawCriterion,
}

/// Decodes raw criteria in order.
///
/// Under [`UnknownOperatorPolicy::Skip`] an unknown code drops its criterion,
/// and a target modifier directly before it is dropped as well so that the
/// modifier cannot end up scoping an unrelated criterion.
pub fn decode_criteria(
    raw: &[RawCriterion],
    table: &OperatorTable,
    policy: UnknownOperatorPolicy,
) -> Result<(CriterionSequence, Vec<SkippedCriterion>), CatalogError> {
    let mut criteria: Vec<Criterion> = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();

    for (index, item) in raw.iter().enumerate() {
        match table.decode(item.operator) {
            Ok(operator) => criteria.push(Criterion::new(StatId(item.stat), operator, item.value)),
            Err(err) => match policy {
                UnknownOperatorPolicy::Reject => return Err(err),
                UnknownOperatorPolicy::Skip => {
                    if criteria
                        .last()
                        .is_some_and(|last| last.operator == Operator::TargetModifier)
                    {
                        criteria.pop();
                    }
                    skipped.push(SkippedCriterion { index, raw: *item });
                }
            },
        }
    }

    Ok((CriterionSequence::new(criteria), skipped))
}

/// An item, nano or perk.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    pub kind: EntryKind,
    pub actions: Vec<Action>,
    pub effects: Vec<EffectRecord>,
}

impl CatalogEntry {
    /// Criteria for `action`, if the entry defines that action.
    pub fn requirements(&self, action: ActionKind) -> Option<&CriterionSequence> {
        self.actions
            .iter()
            .find(|candidate| candidate.kind == action)
            .map(|candidate| &candidate.criteria)
    }

    /// Evaluates the criteria of `action`. An undefined action has no
    /// requirements.
    pub fn check(&self, action: ActionKind, actor: &ActorStats, evaluator: &Evaluator) -> Evaluation {
        match self.requirements(action) {
            Some(criteria) => evaluator.evaluate(criteria, actor),
            None => evaluator.evaluate(&CriterionSequence::empty(), actor),
        }
    }

    /// Eligibility of `actor` for `action` along the `filter` dimensions.
    pub fn is_eligible(
        &self,
        action: ActionKind,
        actor: &ActorStats,
        filter: &BTreeSet<StatId>,
    ) -> bool {
        self.requirements(action)
            .is_none_or(|criteria| is_eligible_for_actor(criteria, actor, filter))
    }

    /// This entry as a bonus source.
    pub fn bonus_source(&self, kind: SourceKind, active: bool) -> BonusSource {
        BonusSource {
            name: self.name.clone(),
            kind,
            active,
            effects: self.effects.clone(),
        }
    }
}

/// Immutable, id-indexed collection of entries.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id, position).is_some() {
                return Err(CatalogError::DuplicateEntry { id: entry.id });
            }
        }
        Ok(Self { entries, index })
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    /// Like [`get`](Self::get), as an error for callers that need one.
    pub fn entry(&self, id: EntryId) -> Result<&CatalogEntry, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownEntry { id })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates the `action` requirements of entry `id`.
    pub fn check(
        &self,
        id: EntryId,
        action: ActionKind,
        actor: &ActorStats,
        evaluator: &Evaluator,
    ) -> Result<Evaluation, CatalogError> {
        Ok(self.entry(id)?.check(action, actor, evaluator))
    }

    /// Entries that define `action` and whose criteria leave `actor`
    /// eligible along the `filter` dimensions.
    pub fn filter_eligible<'a>(
        &'a self,
        action: ActionKind,
        actor: &'a ActorStats,
        filter: &'a BTreeSet<StatId>,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |entry| {
            entry
                .requirements(action)
                .is_some_and(|criteria| is_eligible_for_actor(criteria, actor, filter))
        })
    }

    /// Bonus sources for the given entry ids. Unknown ids are returned
    /// separately so the caller can report them.
    pub fn bonus_sources(
        &self,
        ids: &[EntryId],
        kind: SourceKind,
    ) -> (Vec<BonusSource>, Vec<EntryId>) {
        let mut sources = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for &id in ids {
            match self.get(id) {
                Some(entry) => sources.push(entry.bonus_source(kind, true)),
                None => missing.push(id),
            }
        }
        (sources, missing)
    }
}
