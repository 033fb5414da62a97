//! Requirement criteria: typed operators, ordered sequences, and the two
//! queries run over them.
//!
//! ```text
//! raw catalog codes ──OperatorTable──▶ CriterionSequence
//!                                        │
//!                     ┌──────────────────┴──────────────────┐
//!                     ▼                                     ▼
//!          evaluate_requirements                  is_eligible_for_actor
//!     (can this actor use it right now?)    (could this kind of actor use it?)
//! ```

pub mod eligibility;
pub mod evaluate;
pub mod operator;
pub mod sequence;

pub use eligibility::{default_eligibility_stats, is_eligible_for_actor};
pub use evaluate::{CriteriaGrammar, Evaluation, Evaluator, evaluate_requirements};
pub use operator::{Operator, OperatorTable};
pub use sequence::{Criterion, CriterionSequence, Scope, ScopedCriterion, SequenceIssue};
