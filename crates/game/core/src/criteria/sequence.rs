//! Ordered criterion sequences and target scoping.

use crate::stats::{ActorStats, StatId};

use super::operator::Operator;

/// One atomic `(stat, operator, operand)` requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    pub stat: StatId,
    pub operator: Operator,
    pub operand: i32,
}

impl Criterion {
    pub const fn new(stat: StatId, operator: Operator, operand: i32) -> Self {
        Self {
            stat,
            operator,
            operand,
        }
    }

    /// A marker criterion. Markers ignore stat and operand.
    pub const fn marker(operator: Operator) -> Self {
        Self::new(StatId(0), operator, 0)
    }

    pub const fn equal(stat: StatId, operand: i32) -> Self {
        Self::new(stat, Operator::Equal, operand)
    }

    pub const fn greater_than(stat: StatId, operand: i32) -> Self {
        Self::new(stat, Operator::GreaterThan, operand)
    }

    pub const fn less_than(stat: StatId, operand: i32) -> Self {
        Self::new(stat, Operator::LessThan, operand)
    }

    pub const fn bit_set(stat: StatId, operand: i32) -> Self {
        Self::new(stat, Operator::StatBitSet, operand)
    }

    pub const fn bit_not_set(stat: StatId, operand: i32) -> Self {
        Self::new(stat, Operator::StatBitNotSet, operand)
    }

    pub const fn or() -> Self {
        Self::marker(Operator::LogicalOr)
    }

    pub const fn and() -> Self {
        Self::marker(Operator::LogicalAnd)
    }

    pub const fn on_target() -> Self {
        Self::marker(Operator::TargetModifier)
    }

    /// Evaluates this criterion against `actor`. Markers evaluate to `false`.
    pub fn matches(&self, actor: &ActorStats) -> bool {
        self.operator.compare(actor.get(self.stat), self.operand)
    }
}

impl core::fmt::Display for Criterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.operator.is_comparison() {
            write!(f, "{} {} {}", self.stat, self.operator.symbol(), self.operand)
        } else {
            f.write_str(self.operator.symbol())
        }
    }
}

/// Whom a criterion constrains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The acting character.
    Actor,
    /// The target of the action.
    Target,
}

/// A criterion paired with the scope it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopedCriterion<'a> {
    /// Position of the criterion in its sequence.
    pub index: usize,
    pub scope: Scope,
    pub criterion: &'a Criterion,
}

/// Structural problems a sequence can carry without being rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceIssue {
    /// A target modifier is the last criterion; it scopes nothing.
    DanglingTargetModifier { index: usize },
    /// A target modifier directly follows another one.
    RepeatedTargetModifier { index: usize },
}

impl core::fmt::Display for SequenceIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DanglingTargetModifier { index } => {
                write!(f, "target modifier at #{} has no following criterion", index)
            }
            Self::RepeatedTargetModifier { index } => {
                write!(f, "target modifier at #{} repeats the previous one", index)
            }
        }
    }
}

/// Criteria attached to one action, in authored order.
///
/// The order is part of the meaning: a target modifier scopes the criterion
/// after it, and OR markers split the comparisons around them. The sequence
/// is never reordered or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CriterionSequence {
    criteria: Vec<Criterion>,
}

impl CriterionSequence {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Walks every non-target-modifier criterion with its scope.
    ///
    /// A criterion following one or more consecutive target modifiers is
    /// [`Scope::Target`]; the modifiers themselves are not yielded. A trailing
    /// modifier is dropped silently.
    pub fn scoped(&self) -> Scoped<'_> {
        Scoped {
            inner: self.criteria.iter().enumerate(),
            pending_target: false,
        }
    }

    /// Comparisons that constrain the acting character.
    pub fn actor_criteria(&self) -> impl Iterator<Item = &Criterion> + '_ {
        self.scoped()
            .filter(|item| item.scope == Scope::Actor)
            .map(|item| item.criterion)
    }

    /// Criteria that constrain the target of the action.
    pub fn target_criteria(&self) -> impl Iterator<Item = &Criterion> + '_ {
        self.scoped()
            .filter(|item| item.scope == Scope::Target)
            .map(|item| item.criterion)
    }

    /// Reports structural oddities. Evaluation tolerates all of them.
    pub fn issues(&self) -> Vec<SequenceIssue> {
        let mut issues = Vec::new();
        let mut previous_was_marker = false;
        for (index, criterion) in self.criteria.iter().enumerate() {
            let is_marker = criterion.operator == Operator::TargetModifier;
            if is_marker && previous_was_marker {
                issues.push(SequenceIssue::RepeatedTargetModifier { index });
            }
            if is_marker && index + 1 == self.criteria.len() {
                issues.push(SequenceIssue::DanglingTargetModifier { index });
            }
            previous_was_marker = is_marker;
        }
        issues
    }
}

impl From<Vec<Criterion>> for CriterionSequence {
    fn from(criteria: Vec<Criterion>) -> Self {
        Self::new(criteria)
    }
}

impl FromIterator<Criterion> for CriterionSequence {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CriterionSequence {
    type Item = &'a Criterion;
    type IntoIter = core::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

/// Iterator returned by [`CriterionSequence::scoped`].
pub struct Scoped<'a> {
    inner: core::iter::Enumerate<core::slice::Iter<'a, Criterion>>,
    pending_target: bool,
}

impl<'a> Iterator for Scoped<'a> {
    type Item = ScopedCriterion<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, criterion) in self.inner.by_ref() {
            if criterion.operator == Operator::TargetModifier {
                self.pending_target = true;
                continue;
            }
            let scope = if core::mem::take(&mut self.pending_target) {
                Scope::Target
            } else {
                Scope::Actor
            };
            return Some(ScopedCriterion {
                index,
                scope,
                criterion,
            });
        }
        None
    }
}
