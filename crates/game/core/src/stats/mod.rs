//! Stat system: identifiers, actor snapshots, bonuses and skill totals.
//!
//! # Flow
//!
//! ```text
//! [ Bonus sources ]  equipped items, perks, buffs
//!      ↓  aggregate (whitelisted effect kinds, active only)
//! [ BonusBreakdown ] equipment / perks / buffs per stat
//!      ↓  compute_skill_total
//! [ Skill totals ]   base + trickle + IP + bonuses
//!      ↓
//! [ ActorStats ]     snapshot handed to the criteria evaluator
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: no I/O, no caches, same inputs give the same outputs
//! 2. **Order independent**: aggregation is summation
//! 3. **One formula**: skill totals are defined once, in [`skill`]

pub mod actor;
pub mod bonus;
pub mod id;
pub mod identity;
pub mod skill;

pub use actor::ActorStats;
pub use bonus::{
    AggregatedBonusMap, BonusAggregator, BonusBreakdown, BonusRules, BonusSource,
    DEFAULT_STAT_MODIFIER_KINDS, EffectRecord, SourceKind, aggregate_bonuses,
};
pub use id::StatId;
pub use identity::{Breed, ExpansionFlags, Profession, describe_value};
pub use skill::{SkillComponents, compute_skill_total};
