//! Criterion operators and their catalog encoding.

use crate::error::CatalogError;

/// Kind of a single criterion.
///
/// Comparisons test one actor stat against the operand. Markers carry no
/// comparison of their own: they shape how neighbouring comparisons combine
/// (`LogicalAnd`, `LogicalOr`) or whom the next criterion is about
/// (`TargetModifier`).
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
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    /// Every bit of the operand is set in the actor's stat.
    StatBitSet,
    /// No bit of the operand is set in the actor's stat.
    StatBitNotSet,
    LogicalAnd,
    LogicalOr,
    /// The next criterion constrains the action's target, not the actor.
    TargetModifier,
}

impl Operator {
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::GreaterThan
                | Self::StatBitSet
                | Self::StatBitNotSet
        )
    }

    /// Comparisons that exclude values rather than select them.
    pub const fn is_exclusion(self) -> bool {
        matches!(self, Self::NotEqual | Self::StatBitNotSet)
    }

    /// Applies this operator to an actor value. Markers never match.
    pub const fn compare(self, actual: i32, operand: i32) -> bool {
        match self {
            Self::Equal => actual == operand,
            Self::NotEqual => actual != operand,
            Self::LessThan => actual < operand,
            Self::GreaterThan => actual > operand,
            Self::StatBitSet => (actual & operand) == operand,
            Self::StatBitNotSet => (actual & operand) == 0,
            Self::LogicalAnd | Self::LogicalOr | Self::TargetModifier => false,
        }
    }

    /// Short symbol used when rendering criteria.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::StatBitSet => "has bits",
            Self::StatBitNotSet => "lacks bits",
            Self::LogicalAnd => "AND",
            Self::LogicalOr => "OR",
            Self::TargetModifier => "ON TARGET",
        }
    }
}

/// Mapping between raw catalog operator codes and [`Operator`]s.
///
/// Defaults follow the game's catalog convention. More than one code may
/// decode to [`Operator::TargetModifier`]; add codes to `target_modifiers` when
/// the catalog scopes criteria through other markers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OperatorTable {
    pub equal: i32,
    pub less_than: i32,
    pub greater_than: i32,
    pub or: i32,
    pub and: i32,
    pub target_modifiers: Vec<i32>,
    pub bit_set: i32,
    pub not_equal: i32,
    pub bit_not_set: i32,
}

impl OperatorTable {
    pub const DEFAULT_TARGET_MODIFIER: i32 = 18;

    /// Decodes a raw operator code.
    pub fn decode(&self, code: i32) -> Result<Operator, CatalogError> {
        let op = match code {
            c if c == self.equal => Operator::Equal,
            c if c == self.less_than => Operator::LessThan,
            c if c == self.greater_than => Operator::GreaterThan,
            c if c == self.or => Operator::LogicalOr,
            c if c == self.and => Operator::LogicalAnd,
            c if c == self.bit_set => Operator::StatBitSet,
            c if c == self.not_equal => Operator::NotEqual,
            c if c == self.bit_not_set => Operator::StatBitNotSet,
            c if self.target_modifiers.contains(&c) => Operator::TargetModifier,
            _ => return Err(CatalogError::UnknownOperator { code }),
        };
        Ok(op)
    }

    /// Canonical code for `op`; the first configured code for target modifiers.
    pub fn encode(&self, op: Operator) -> i32 {
        match op {
            Operator::Equal => self.equal,
            Operator::NotEqual => self.not_equal,
            Operator::LessThan => self.less_than,
            Operator::GreaterThan => self.greater_than,
            Operator::StatBitSet => self.bit_set,
            Operator::StatBitNotSet => self.bit_not_set,
            Operator::LogicalAnd => self.and,
            Operator::LogicalOr => self.or,
            Operator::TargetModifier => self
                .target_modifiers
                .first()
                .copied()
                .unwrap_or(Self::DEFAULT_TARGET_MODIFIER),
        }
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self {
            equal: 0,
            less_than: 1,
            greater_than: 2,
            or: 3,
            and: 4,
            target_modifiers: vec![Self::DEFAULT_TARGET_MODIFIER],
            bit_set: 22,
            not_equal: 24,
            bit_not_set: 107,
        }
    }
}
