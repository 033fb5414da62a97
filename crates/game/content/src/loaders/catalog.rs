//! Item, nano and perk catalog loader.

use std::collections::HashSet;
use std::path::Path;

use aoplan_core::{
    Action, ActionKind, Catalog, CatalogEntry, EffectRecord, EntryId, EntryKind, RawCriterion,
    RulesConfig, decode_criteria,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<EntrySpec>,
}

/// One catalog entry as authored, criteria still carrying raw operator codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySpec {
    pub id: EntryId,
    pub name: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
    #[serde(default)]
    pub effects: Vec<EffectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSpec {
    pub kind: ActionKind,
    #[serde(default)]
    pub criteria: Vec<RawCriterion>,
}

/// Loader for the catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and decode a catalog from a RON file.
    ///
    /// Operator codes are decoded with `rules.operators`. Unknown codes are
    /// skipped or rejected per `rules.unknown_operators`. A repeated entry id
    /// keeps the first definition.
    pub fn load(path: &Path, rules: &RulesConfig) -> LoadResult<Catalog> {
        let content = read_file(path, "catalog")?;
        let catalog = Self::parse(&content, rules)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))?;

        tracing::debug!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse and decode a catalog from RON text.
    pub fn parse(content: &str, rules: &RulesConfig) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut seen = HashSet::with_capacity(file.entries.len());
        let mut entries = Vec::with_capacity(file.entries.len());
        for spec in file.entries {
            if !seen.insert(spec.id) {
                tracing::warn!(
                    "Catalog entry {} ({}) is defined again; keeping the first definition",
                    spec.id,
                    spec.name
                );
                continue;
            }
            entries.push(Self::decode_entry(spec, rules)?);
        }

        Ok(Catalog::new(entries)?)
    }

    fn decode_entry(spec: EntrySpec, rules: &RulesConfig) -> LoadResult<CatalogEntry> {
        let mut actions = Vec::with_capacity(spec.actions.len());
        for action in spec.actions {
            let (criteria, skipped) =
                decode_criteria(&action.criteria, &rules.operators, rules.unknown_operators)
                    .map_err(|e| {
                        anyhow::anyhow!(
                            "Entry {} ({}) action {}: {}",
                            spec.id,
                            spec.name,
                            action.kind,
                            e
                        )
                    })?;

            for skip in &skipped {
                tracing::warn!(
                    "Entry {} ({}) action {}: skipped criterion #{} with unknown operator {}",
                    spec.id,
                    spec.name,
                    action.kind,
                    skip.index,
                    skip.raw.operator
                );
            }
            for issue in criteria.issues() {
                tracing::warn!(
                    "Entry {} ({}) action {}: {}",
                    spec.id,
                    spec.name,
                    action.kind,
                    issue
                );
            }

            actions.push(Action {
                kind: action.kind,
                criteria,
            });
        }

        Ok(CatalogEntry {
            id: spec.id,
            name: spec.name,
            kind: spec.kind,
            actions,
            effects: spec.effects,
        })
    }
}
