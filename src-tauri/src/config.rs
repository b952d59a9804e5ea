//! Application configuration
//!
//! Paths and log settings resolved once at startup. Environment overrides:
//! `LEDGER_DESK_DATA_DIR` moves both databases and the logs,
//! `LEDGER_DESK_LOG_MAX_BYTES` sets the rotation threshold.

use std::path::PathBuf;

use rolling_logger::RotationPolicy;

pub const DATA_DIR_ENV: &str = "LEDGER_DESK_DATA_DIR";
pub const LOG_MAX_BYTES_ENV: &str = "LEDGER_DESK_LOG_MAX_BYTES";

pub const NOTES_DB: &str = "notes.db";
pub const INVENTORY_DB: &str = "inventory.db";
pub const LOG_NAME: &str = "LedgerDesk";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_policy: RotationPolicy,
}

impl AppConfig {
    /// Resolve against the process environment.
    pub fn resolve(app_data_dir: PathBuf, app_log_dir: PathBuf) -> Self {
        Self::from_lookup(app_data_dir, app_log_dir, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        app_data_dir: PathBuf,
        app_log_dir: PathBuf,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let (data_dir, log_dir) = match lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                let logs = dir.join("logs");
                (dir, logs)
            }
            None => (app_data_dir, app_log_dir),
        };

        let mut log_policy = RotationPolicy::default();
        if let Some(max_bytes) = lookup(LOG_MAX_BYTES_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
        {
            log_policy.max_bytes = max_bytes;
        }

        Self {
            data_dir,
            log_dir,
            log_policy,
        }
    }

    pub fn notes_db_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_DB)
    }

    pub fn inventory_db_path(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_DB)
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(
            PathBuf::from("/app/data"),
            PathBuf::from("/app/logs"),
            |key| vars.get(key).cloned(),
        )
    }

    #[test]
    fn test_defaults_use_app_dirs() {
        let config = config(&[]);
        assert_eq!(config.notes_db_path(), PathBuf::from("/app/data/notes.db"));
        assert_eq!(
            config.inventory_db_path(),
            PathBuf::from("/app/data/inventory.db")
        );
        assert_eq!(config.log_dir, PathBuf::from("/app/logs"));
        assert_eq!(config.log_policy, RotationPolicy::default());
    }

    #[test]
    fn test_data_dir_override_moves_logs() {
        let config = config(&[(DATA_DIR_ENV, "/tmp/desk")]);
        assert_eq!(config.notes_db_path(), PathBuf::from("/tmp/desk/notes.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/desk/logs"));
    }

    #[test]
    fn test_log_max_bytes_override() {
        assert_eq!(config(&[(LOG_MAX_BYTES_ENV, "4096")]).log_policy.max_bytes, 4096);
        assert_eq!(
            config(&[(LOG_MAX_BYTES_ENV, "lots")]).log_policy.max_bytes,
            RotationPolicy::default().max_bytes
        );
    }
}
