//! Session configuration.
//!
//! Read from `~/.klondike/config.toml`. Every field is optional in the
//! file; missing fields fall back to [`KlondikeConfig::default`].
//!
//! ```toml
//! seed = 1234
//! draw_count = 3
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "KLONDIKE_SEED";

/// Cards drawn from the stock per flip in classic Klondike.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Configuration for a play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlondikeConfig {
    /// Session seed. `None` seeds from OS entropy.
    /// The same seed replays the same sequence of deals.
    pub seed: Option<u64>,

    /// Cards moved from stock to waste per flip (clamped to 1..=3).
    pub draw_count: usize,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: DEFAULT_DRAW_COUNT,
        }
    }
}

impl KlondikeConfig {
    /// Use a fixed session seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom draw count.
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    /// Draw count actually used by the engine.
    #[must_use]
    pub fn effective_draw_count(&self) -> usize {
        self.draw_count.clamp(1, DEFAULT_DRAW_COUNT)
    }

    /// Load the user config, then apply environment overrides.
    ///
    /// A missing file yields defaults. Unreadable or invalid files are
    /// logged and also yield defaults.
    #[must_use]
    pub fn load() -> Self {
        let config = Self::path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default();
        config.with_env_overrides()
    }

    /// Load a config file, returning `None` if it is absent or invalid.
    #[must_use]
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    /// Default config location.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".klondike").join("config.toml"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = env::var(SEED_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(err) => tracing::warn!("Ignoring {SEED_ENV_VAR}={raw:?}: {err}"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KlondikeConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.draw_count, 3);
        assert_eq!(config.effective_draw_count(), 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = KlondikeConfig::default().with_seed(123).with_draw_count(1);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.effective_draw_count(), 1);
    }

    #[test]
    fn test_draw_count_is_clamped() {
        assert_eq!(KlondikeConfig::default().with_draw_count(0).effective_draw_count(), 1);
        assert_eq!(KlondikeConfig::default().with_draw_count(9).effective_draw_count(), 3);
    }

    #[test]
    fn test_serialization() {
        let config = KlondikeConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: KlondikeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: KlondikeConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.draw_count, DEFAULT_DRAW_COUNT);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = Path::new("/nonexistent/klondike/config.toml");
        assert!(KlondikeConfig::load_from(path).is_none());
    }
}
