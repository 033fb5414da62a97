//! Requirement evaluation.
//!
//! Two readings of a flat criterion list are supported:
//!
//! - [`CriteriaGrammar::Grouped`] (default): comparisons are ANDed left to
//!   right; an OR marker closes the current group and the groups are ORed.
//!   `(A B OR C D)` reads as `(A && B) || (C && D)`.
//! - [`CriteriaGrammar::Postfix`]: a stack machine. Comparisons push their
//!   result, AND/OR markers pop two and push the combination, and whatever
//!   remains on the stack is ANDed. `(A B OR C)` reads as `(A || B) && C`.
//!
//! In both readings, criteria scoped to the target by a target modifier are
//! skipped entirely.

use crate::stats::ActorStats;

use super::operator::Operator;
use super::sequence::{Criterion, CriterionSequence, Scope};

/// How AND/OR markers combine neighbouring comparisons.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CriteriaGrammar {
    #[default]
    Grouped,
    Postfix,
}

/// Outcome of evaluating a sequence against an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub satisfied: bool,
    /// Every actor-scoped comparison that did not hold, in sequence order.
    pub failed_criteria: Vec<Criterion>,
}

impl Evaluation {
    fn satisfied() -> Self {
        Self {
            satisfied: true,
            failed_criteria: Vec::new(),
        }
    }
}

/// Stateless requirement evaluator for one grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    grammar: CriteriaGrammar,
}

impl Evaluator {
    pub const fn new(grammar: CriteriaGrammar) -> Self {
        Self { grammar }
    }

    pub const fn grammar(&self) -> CriteriaGrammar {
        self.grammar
    }

    /// Decides whether `actor` meets every actor-scoped requirement.
    pub fn evaluate(&self, sequence: &CriterionSequence, actor: &ActorStats) -> Evaluation {
        if sequence.is_empty() {
            return Evaluation::satisfied();
        }
        match self.grammar {
            CriteriaGrammar::Grouped => evaluate_grouped(sequence, actor),
            CriteriaGrammar::Postfix => evaluate_postfix(sequence, actor),
        }
    }
}

/// Evaluates `sequence` with the default grouped grammar.
pub fn evaluate_requirements(sequence: &CriterionSequence, actor: &ActorStats) -> Evaluation {
    Evaluator::default().evaluate(sequence, actor)
}

fn evaluate_grouped(sequence: &CriterionSequence, actor: &ActorStats) -> Evaluation {
    let mut failed_criteria = Vec::new();
    // `None` while the current group has no comparisons yet.
    let mut group: Option<bool> = None;
    let mut any_group_passed = false;
    let mut saw_group = false;

    // `scoped()` never yields target modifiers, so every other arm is a comparison.
    for item in sequence.scoped() {
        if item.scope == Scope::Target {
            continue;
        }
        let criterion = item.criterion;
        match criterion.operator {
            Operator::LogicalAnd => {}
            Operator::LogicalOr => {
                if let Some(passed) = group.take() {
                    saw_group = true;
                    any_group_passed |= passed;
                }
            }
            _ => {
                let passed = criterion.matches(actor);
                if !passed {
                    failed_criteria.push(*criterion);
                }
                group = Some(group.unwrap_or(true) && passed);
            }
        }
    }
    if let Some(passed) = group {
        saw_group = true;
        any_group_passed |= passed;
    }

    Evaluation {
        satisfied: !saw_group || any_group_passed,
        failed_criteria,
    }
}

fn evaluate_postfix(sequence: &CriterionSequence, actor: &ActorStats) -> Evaluation {
    let mut failed_criteria = Vec::new();
    let mut stack: Vec<bool> = Vec::with_capacity(sequence.len());

    for item in sequence.scoped() {
        if item.scope == Scope::Target {
            continue;
        }
        let criterion = item.criterion;
        match criterion.operator {
            Operator::LogicalAnd | Operator::LogicalOr => {
                // Underflow means malformed data; the marker is ignored.
                if stack.len() < 2 {
                    continue;
                }
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    continue;
                };
                stack.push(if criterion.operator == Operator::LogicalAnd {
                    lhs && rhs
                } else {
                    lhs || rhs
                });
            }
            _ => {
                let passed = criterion.matches(actor);
                if !passed {
                    failed_criteria.push(*criterion);
                }
                stack.push(passed);
            }
        }
    }

    Evaluation {
        satisfied: stack.iter().all(|passed| *passed),
        failed_criteria,
    }
}
