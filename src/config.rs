// ⚙️ Configuration - where snapshots and reports live

use std::path::{Path, PathBuf};

/// Environment variable the CLI reads when `--data-dir` is not given
pub const DATA_DIR_ENV: &str = "RECORD_VAULT_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root directory for snapshots and reports
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join("inventory.json")
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join("grade_report.txt")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config::new("/var/lib/vault");

        assert_eq!(config.inventory_path(), PathBuf::from("/var/lib/vault/inventory.json"));
        assert_eq!(config.report_path(), PathBuf::from("/var/lib/vault/grade_report.txt"));
    }

    #[test]
    fn test_default_data_dir() {
        assert_eq!(Config::default().data_dir(), Path::new("data"));
    }
}
