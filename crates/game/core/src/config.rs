use std::collections::BTreeSet;

use crate::criteria::{CriteriaGrammar, Evaluator, OperatorTable, default_eligibility_stats};
use crate::stats::{BonusAggregator, BonusRules, StatId};

/// What to do with a criterion whose operator code the table does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnknownOperatorPolicy {
    /// Drop the criterion (and a target modifier right before it).
    #[default]
    Skip,
    /// Refuse to load the entry.
    Reject,
}

/// Rules configuration and tunable catalog conventions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// How AND/OR markers combine comparisons.
    pub grammar: CriteriaGrammar,
    /// Raw operator code mapping used at ingestion.
    pub operators: OperatorTable,
    pub unknown_operators: UnknownOperatorPolicy,
    /// Which effects count as stat bonuses.
    pub bonus: BonusRules,
    /// Stats consulted by catalog eligibility filtering.
    pub eligibility_stats: BTreeSet<StatId>,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self {
            grammar: CriteriaGrammar::default(),
            operators: OperatorTable::default(),
            unknown_operators: UnknownOperatorPolicy::default(),
            bonus: BonusRules::default(),
            eligibility_stats: default_eligibility_stats(),
        }
    }

    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.grammar)
    }

    pub fn aggregator(&self) -> BonusAggregator {
        BonusAggregator::new(self.bonus.clone())
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
