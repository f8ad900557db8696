//! Board configuration — seed zones and converter defaults.
//!
//! User-level file: `~/.timeboard/config.yaml`. Optional; every field
//! has a default, and a missing or unreadable file yields the stock
//! board (the eight-zone seed, New York → London converter). The file
//! only seeds a session — add/remove never write back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::watchlist::SEED_ZONES;

/// Startup configuration for a board session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Seed watch list, in display order.
    #[serde(default = "default_zones")]
    pub zones: Vec<String>,
    /// Initial converter source zone.
    #[serde(default = "default_source")]
    pub source: String,
    /// Initial converter target zone.
    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            source: default_source(),
            target: default_target(),
        }
    }
}

fn default_zones() -> Vec<String> {
    SEED_ZONES.iter().map(|z| (*z).to_string()).collect()
}

fn default_source() -> String {
    "America/New_York".to_string()
}

fn default_target() -> String {
    "Europe/London".to_string()
}

/// Path to `~/.timeboard/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".timeboard"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".timeboard"))
    }
}

/// Path to the user-level config file.
fn user_config_path() -> Option<PathBuf> {
    dirs_path().map(|p| p.join("config.yaml"))
}

impl BoardConfig {
    /// Load from the user-level file, or defaults when absent.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific path. Any read or parse failure falls back
    /// to defaults — a broken config never blocks startup.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save to `~/.timeboard/config.yaml`.
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = dirs_path() else {
            return Err("Cannot determine home directory".into());
        };
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        self.save_to(&dir.join("config.yaml"))
    }

    /// Save to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| format!("YAML serialize error: {e}"))?;
        std::fs::write(path, yaml).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_seed() {
        let config = BoardConfig::default();
        assert_eq!(config.zones.len(), 8);
        assert_eq!(config.zones[0], "Asia/Tehran");
        assert_eq!(config.source, "America/New_York");
        assert_eq!(config.target, "Europe/London");
    }

    #[test]
    fn load_from_yaml_string() {
        let yaml = r#"
zones:
  - Asia/Tokyo
  - Europe/Paris
source: Europe/Paris
target: Asia/Tokyo
"#;
        let config: BoardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.zones, ["Asia/Tokyo", "Europe/Paris"]);
        assert_eq!(config.source, "Europe/Paris");
        assert_eq!(config.target, "Asia/Tokyo");
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = "zones:\n  - Asia/Tokyo\n";
        let config: BoardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.zones, ["Asia/Tokyo"]);
        assert_eq!(config.source, "America/New_York");
        assert_eq!(config.target, "Europe/London");
    }

    #[test]
    fn round_trip_through_a_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let mut config = BoardConfig::default();
        config.target = "Asia/Tokyo".to_string();
        config.save_to(&path).unwrap();

        let back = BoardConfig::load_from(&path);
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = BoardConfig::load_from(&dir.path().join("nope.yaml"));
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, ": not : yaml : at all [").unwrap();
        let config = BoardConfig::load_from(&path);
        assert_eq!(config, BoardConfig::default());
    }
}
