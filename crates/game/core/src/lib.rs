//! Requirement evaluation and stat-bonus aggregation for Anarchy Online
//! character planning.
//!
//! `aoplan-core` holds the two pieces of real game logic the planner needs:
//! the criteria evaluator (can this character use, wear or cast an entry?)
//! and the bonus aggregator (what do the active items, perks and buffs add
//! to each stat?). Everything here is a pure function of borrowed, immutable
//! inputs; loading data and presenting results live in other crates.
pub mod catalog;
pub mod config;
pub mod criteria;
pub mod error;
pub mod stats;

pub use catalog::{
    Action, ActionKind, Catalog, CatalogEntry, EntryId, EntryKind, RawCriterion,
    SkippedCriterion, decode_criteria,
};
pub use config::{RulesConfig, UnknownOperatorPolicy};
pub use criteria::{
    CriteriaGrammar, Criterion, CriterionSequence, Evaluation, Evaluator, Operator, OperatorTable,
    Scope, SequenceIssue, evaluate_requirements, is_eligible_for_actor,
};
pub use error::{CatalogError, ErrorSeverity, PlannerError};
pub use stats::{
    ActorStats, AggregatedBonusMap, BonusAggregator, BonusBreakdown, BonusRules, BonusSource,
    Breed, EffectRecord, ExpansionFlags, Profession, SkillComponents, SourceKind, StatId,
    aggregate_bonuses, compute_skill_total, describe_value,
};
