//! Application configuration management.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables.

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the report tool can be configured with
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Price store configuration (file path, pool sizes, timeouts)
    #[serde(default)]
    pub database: fpa_sqlite::config::SqliteConfig,
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file at `path`, which must exist when given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `APP_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export APP_DATABASE__DATABASE_PATH="/var/lib/fpa/prices.db"
    /// export APP_DATABASE__MAX_READERS=4
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()).into());
            }
            config = config.add_source(config::File::from(path));
        }

        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config.build()?.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};

    #[test]
    fn defaults_to_in_memory_store() {
        let config = AppConfig::load(None).unwrap();
        assert!(config.database.database_path.is_none());
        assert!(config.database.create_if_missing);
        assert_eq!(config.database.max_readers, 8);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/fpareport.toml");
        let error = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::MissingConfig(missing)) if *missing == path
        ));
    }

    #[test]
    fn file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("fpareport-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[database]\ndatabase_path = \"prices.db\"\nbusy_timeout_ms = 250\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path));
        fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(
            config.database.database_path.as_deref(),
            Some(Path::new("prices.db"))
        );
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.database.max_readers, 8);
    }
}
