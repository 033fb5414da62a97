//! Character profile loader.
//!
//! A profile is one character build: raw stats, invested skill points and
//! the catalog ids of what is currently equipped, perked and buffed.

use std::collections::BTreeMap;
use std::path::Path;

use aoplan_core::{
    ActorStats, BonusAggregator, BonusBreakdown, BonusSource, Catalog, EntryId, SkillComponents,
    SourceKind, StatId,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A character build as stored in `profiles/<name>.ron`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Raw stat values (level, profession, breed, expansion, ...).
    #[serde(default)]
    pub stats: ActorStats,
    /// Skills the character has invested in.
    #[serde(default)]
    pub skills: BTreeMap<StatId, SkillComponents>,
    #[serde(default)]
    pub equipped: Vec<EntryId>,
    #[serde(default)]
    pub perks: Vec<EntryId>,
    #[serde(default)]
    pub buffs: Vec<EntryId>,
}

impl Profile {
    /// Active bonus sources of this profile, equipment first, then perks,
    /// then buffs. Ids missing from `catalog` are logged and skipped.
    pub fn bonus_sources(&self, catalog: &Catalog) -> Vec<BonusSource> {
        let groups = [
            (&self.equipped, SourceKind::Equipment),
            (&self.perks, SourceKind::Perk),
            (&self.buffs, SourceKind::Buff),
        ];

        let mut sources = Vec::new();
        for (ids, kind) in groups {
            let (found, missing) = catalog.bonus_sources(ids, kind);
            for id in missing {
                tracing::warn!(
                    "Profile '{}' lists {} entry {} which is not in the catalog",
                    self.name,
                    kind,
                    id
                );
            }
            sources.extend(found);
        }
        sources
    }

    /// Per-kind bonus totals of this profile.
    pub fn breakdown(&self, catalog: &Catalog, aggregator: &BonusAggregator) -> BonusBreakdown {
        aggregator.breakdown(&self.bonus_sources(catalog))
    }

    /// Stats used for requirement checks: raw stats with every invested
    /// skill replaced by its effective total.
    pub fn actor_stats(&self, breakdown: &BonusBreakdown) -> ActorStats {
        let mut stats = self.stats.clone();
        for (&stat, components) in &self.skills {
            stats.set(stat, components.total_with(stat, breakdown));
        }
        stats
    }
}

/// Loader for character profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    pub fn load(path: &Path) -> LoadResult<Profile> {
        let content = read_file(path, "profile")?;
        let profile = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile {}: {}", path.display(), e))?;

        tracing::debug!(
            "Loaded profile '{}' ({} stats, {} skills, {} sources)",
            profile.name,
            profile.stats.len(),
            profile.skills.len(),
            profile.equipped.len() + profile.perks.len() + profile.buffs.len()
        );
        Ok(profile)
    }

    pub fn parse(content: &str) -> LoadResult<Profile> {
        Ok(ron::from_str(content)?)
    }
}
