//! Runtime settings — optional TOML file, defaults otherwise.
//!
//! Only simulation knobs live here (latency, fault rate, master seed).
//! Module data and the active tab are deliberately not persisted.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use deskmate_core::rng::SeedTree;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated service latency in milliseconds.
    pub latency_ms: u64,
    /// Probability that the quote fault gate fails a request up front.
    pub quote_fault_rate: f64,
    /// Fixed master seed; absent means a fresh random seed per run.
    pub master_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_ms: 800,
            quote_fault_rate: 0.10,
            master_seed: None,
        }
    }
}

impl Settings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn seed_tree(&self) -> SeedTree {
        SeedTree::new(self.master_seed.unwrap_or_else(rand::random))
    }
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deskmate")
        .join("settings.toml")
}

/// Load settings from disk. Returns defaults if the file is missing or
/// corrupt.
pub fn load(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let settings = load(Path::new("/nonexistent/path/settings.toml"));
        assert_eq!(settings.latency_ms, 800);
        assert_eq!(settings.quote_fault_rate, 0.10);
        assert!(settings.master_seed.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = std::env::temp_dir().join("deskmate_settings_partial");
        let path = dir.join("settings.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "latency_ms = 5\nmaster_seed = 42\n").unwrap();

        let settings = load(&path);
        assert_eq!(settings.latency(), Duration::from_millis(5));
        assert_eq!(settings.master_seed, Some(42));
        assert_eq!(settings.quote_fault_rate, 0.10);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("deskmate_settings_corrupt");
        let path = dir.join("settings.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "latency_ms = \"not a number").unwrap();

        let settings = load(&path);
        assert_eq!(settings.latency_ms, 800);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn fixed_seed_reproduces_the_tree() {
        let settings = Settings {
            master_seed: Some(7),
            ..Settings::default()
        };
        assert_eq!(settings.seed_tree().master_seed(), 7);
        assert_eq!(
            settings.seed_tree().sub_seed("quote", 1),
            settings.seed_tree().sub_seed("quote", 1)
        );
    }
}
