//! Configuration
//!
//! [`GameConfig`] locates the files the game touches and comes from the
//! environment. [`RulesConfig`] holds every gameplay constant; its
//! `Default` is the classic SamuraiGo tuning.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Serialize, Deserialize};

/// Default location of the persisted high score.
pub const DEFAULT_SCORE_PATH: &str = "text/score.txt";

/// Default root for sprite and font assets.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Where the game reads and writes its files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// High score file.
    pub score_path: PathBuf,
    /// Asset root (images and fonts).
    pub asset_dir: PathBuf,
    /// Treat a missing score file as a high score of 0 instead of failing.
    pub missing_score_is_zero: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_path: PathBuf::from(DEFAULT_SCORE_PATH),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            missing_score_is_zero: false,
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    ///
    /// Unset variables keep their default:
    /// - `SAMURAI_SCORE_PATH`
    /// - `SAMURAI_ASSET_DIR`
    /// - `SAMURAI_MISSING_SCORE_IS_ZERO` (`true` or `1`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            score_path: lookup("SAMURAI_SCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.score_path),
            asset_dir: lookup("SAMURAI_ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_dir),
            missing_score_is_zero: lookup("SAMURAI_MISSING_SCORE_IS_ZERO")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.missing_score_is_zero),
        }
    }
}

/// Gameplay constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Shortest ready window (seconds)
    pub ready_window_min: f64,
    /// Width of the ready window range (seconds); rolls land in [min, min + span)
    pub ready_window_span: f64,
    /// Win-latency cap for the first round (seconds)
    pub initial_win_cap: f64,
    /// Length of the win and false-start pauses
    pub pause: Duration,
    /// Distance moved per approach sub-step
    pub approach_step: f64,
    /// Approach sub-steps per tick
    pub approach_substeps: u32,
    /// Attacker offset that ends the approach
    pub approach_target: f64,
    /// Attacker offset at the start of every approach
    pub attacker_start: f64,
    /// Opponent offset at the start of every approach
    pub opponent_start: f64,
    /// Points per won round
    pub win_award: u32,
    /// False starts that end the game
    pub false_start_limit: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            ready_window_min: 4.0,
            ready_window_span: 5.0,
            initial_win_cap: 3.0,
            pause: Duration::from_secs(3),
            approach_step: 0.01,
            approach_substeps: 50,
            approach_target: 70.0,
            attacker_start: 0.0,
            opponent_start: 280.0,
            win_award: 100,
            false_start_limit: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.score_path, PathBuf::from("text/score.txt"));
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert!(!config.missing_score_is_zero);

        let rules = RulesConfig::default();
        assert_eq!(rules.ready_window_min, 4.0);
        assert_eq!(rules.ready_window_span, 5.0);
        assert_eq!(rules.initial_win_cap, 3.0);
        assert_eq!(rules.pause, Duration::from_secs(3));
        assert_eq!(rules.approach_substeps, 50);
        assert_eq!(rules.false_start_limit, 2);
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SAMURAI_SCORE_PATH", "/tmp/hi.txt"),
            ("SAMURAI_MISSING_SCORE_IS_ZERO", "1"),
        ]
        .into_iter()
        .collect();

        let config = GameConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.score_path, PathBuf::from("/tmp/hi.txt"));
        assert_eq!(config.asset_dir, PathBuf::from(DEFAULT_ASSET_DIR));
        assert!(config.missing_score_is_zero);
    }

    #[test]
    fn test_lookup_rejects_other_flag_values() {
        let config = GameConfig::from_lookup(|key| {
            (key == "SAMURAI_MISSING_SCORE_IS_ZERO").then(|| "yes".to_string())
        });
        assert!(!config.missing_score_is_zero);
    }
}
