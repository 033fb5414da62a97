//! Content loaders for reading planner data from files.
//!
//! Each loader converts one RON/TOML file into aoplan-core types. Loaders
//! fail on unreadable or unparsable files and log (but tolerate) data that
//! parses yet looks wrong, such as a dangling target modifier.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod profile;

pub use catalog::CatalogLoader;
pub use config::RulesLoader;
pub use factory::{ContentFactory, PlannerContent};
pub use profile::{Profile, ProfileLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Reads a planner data file; `kind` names it in the error ("catalog",
/// "rules", "profile").
pub(crate) fn read_file(path: &Path, kind: &str) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {} file {}: {}", kind, path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_error_names_kind_and_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.ron");

        let err = read_file(&path, "catalog").expect_err("file is missing");
        let message = err.to_string();
        assert!(message.starts_with("Cannot read catalog file "));
        assert!(message.contains("catalog.ron"));
    }
}
