//! Content factory for loading planner data from a data directory.

use std::path::{Path, PathBuf};

use aoplan_core::{Catalog, RulesConfig};

use crate::loaders::{CatalogLoader, LoadResult, Profile, ProfileLoader, RulesLoader};

/// Rules together with the catalog decoded under them.
#[derive(Clone, Debug)]
pub struct PlannerContent {
    pub rules: RulesConfig,
    pub catalog: Catalog,
}

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml        (optional, defaults apply when absent)
/// ├── catalog.ron
/// └── profiles/
///     ├── nanotech.ron
///     └── doctor.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `rules.toml`, or the defaults if the file is absent.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!("No {} found, using default rules", path.display());
            return Ok(RulesConfig::default());
        }
        RulesLoader::load(&path)
    }

    /// Load the catalog from `catalog.ron`, decoded under `rules`.
    pub fn load_catalog(&self, rules: &RulesConfig) -> LoadResult<Catalog> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path, rules)
    }

    /// Load rules and catalog in one go.
    pub fn load_content(&self) -> LoadResult<PlannerContent> {
        let rules = self.load_rules()?;
        let catalog = self.load_catalog(&rules)?;
        Ok(PlannerContent { rules, catalog })
    }

    /// Load a profile from `profiles/{name}.ron`.
    pub fn load_profile(&self, name: &str) -> LoadResult<Profile> {
        let path = self.profiles_dir().join(format!("{}.ron", name));
        ProfileLoader::load(&path)
    }

    /// Names of the profiles in `profiles/`, sorted.
    pub fn profile_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.profiles_dir();
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            anyhow::anyhow!("Failed to read profiles directory {}: {}", dir.display(), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn profiles_dir(&self) -> PathBuf {
        self.data_dir.join("profiles")
    }
}
