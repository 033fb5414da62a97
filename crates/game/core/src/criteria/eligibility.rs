//! Catalog-level eligibility checks by profession, breed, side or expansion.
//!
//! Unlike [`evaluate_requirements`](super::evaluate_requirements), this query
//! only looks at a chosen set of "dimension" stats and ignores everything
//! else in the sequence. It answers "could an actor of this kind ever use
//! the entry", which is what catalog filtering needs.

use std::collections::{BTreeMap, BTreeSet};

use crate::stats::{ActorStats, StatId};

use super::operator::Operator;
use super::sequence::{CriterionSequence, Scope};

/// Per-dimension tally of relevant criteria.
#[derive(Default)]
struct Dimension {
    /// `Some(true)` once any `Equal` criterion on the stat passed.
    matched: Option<bool>,
    /// Some non-`Equal` comparison on the stat failed.
    failed: bool,
}

impl Dimension {
    fn passes(&self) -> bool {
        !self.failed && self.matched.unwrap_or(true)
    }
}

/// Decides whether `actor` is eligible for an entry guarded by `sequence`,
/// looking only at criteria on `filter_stat_ids`.
///
/// Rules:
/// - Criteria scoped to the target by a preceding target modifier never
///   count; they describe whom the action may hit, not who may use it.
/// - `Equal` criteria on the same stat are alternatives: one matching value
///   is enough (a nano usable by doctors or adventurers).
/// - Every other comparison (`LessThan`, `GreaterThan`, `StatBitSet`,
///   `NotEqual`, `StatBitNotSet`) must hold on its own, so ranges and
///   multi-bit masks keep their AND meaning.
/// - Different stats must all pass.
/// - No relevant criteria means eligible.
pub fn is_eligible_for_actor(
    sequence: &CriterionSequence,
    actor: &ActorStats,
    filter_stat_ids: &BTreeSet<StatId>,
) -> bool {
    let mut dimensions: BTreeMap<StatId, Dimension> = BTreeMap::new();

    for item in sequence.scoped() {
        let criterion = item.criterion;
        if item.scope == Scope::Target
            || !criterion.operator.is_comparison()
            || !filter_stat_ids.contains(&criterion.stat)
        {
            continue;
        }

        let passed = criterion.matches(actor);
        let dimension = dimensions.entry(criterion.stat).or_default();
        if criterion.operator == Operator::Equal {
            dimension.matched = Some(dimension.matched.unwrap_or(false) || passed);
        } else {
            dimension.failed |= !passed;
        }
    }

    dimensions.values().all(Dimension::passes)
}

/// The dimension stats used for catalog filtering when none are configured.
pub fn default_eligibility_stats() -> BTreeSet<StatId> {
    [
        StatId::PROFESSION,
        StatId::BREED,
        StatId::SIDE,
        StatId::EXPANSION,
    ]
    .into_iter()
    .collect()
}
