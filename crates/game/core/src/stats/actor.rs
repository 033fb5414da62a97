//! Actor stat snapshots.
//!
//! The actor is whoever is being checked against requirements: a planned
//! character profile with its skills already totalled.

use std::collections::BTreeMap;

use super::id::StatId;

/// Snapshot of an actor's current stat values.
///
/// Stats that were never set read as `0`. The evaluator only borrows this
/// snapshot, so one instance can back any number of concurrent queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorStats {
    values: BTreeMap<StatId, i32>,
}

impl ActorStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `stat`, `0` when absent.
    pub fn get(&self, stat: StatId) -> i32 {
        self.values.get(&stat).copied().unwrap_or(0)
    }

    pub fn set(&mut self, stat: StatId, value: i32) {
        self.values.insert(stat, value);
    }

    /// Sets a stat (builder pattern).
    #[must_use]
    pub fn with(mut self, stat: StatId, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    pub fn contains(&self, stat: StatId) -> bool {
        self.values.contains_key(&stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatId, i32)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StatId, i32)> for ActorStats {
    fn from_iter<I: IntoIterator<Item = (StatId, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(StatId, i32)> for ActorStats {
    fn extend<I: IntoIterator<Item = (StatId, i32)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
