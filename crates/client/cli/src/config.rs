//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Default data directory, relative to the workspace root.
const DEFAULT_DATA_DIR: &str = "crates/game/content/data";

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory with `rules.toml`, `catalog.ron` and `profiles/`.
    pub data_dir: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AOPLAN_DATA_DIR` - Content data directory (default: `crates/game/content/data`)
    /// - `AOPLAN_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: `info`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("AOPLAN_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(level) = read_env::<String>("AOPLAN_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: "info".to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
