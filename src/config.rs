//! # Game Configuration
//!
//! Compile-time tuning constants and the [`RulesConfig`] that carries them
//! into a running game.

use crate::{LabyrinthError, LabyrinthResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A random event fires when the roll over this range comes up zero (1 in N).
pub const EVENT_PROBABILITY: usize = 10;

/// Number of distinct random event kinds (coin, noise, trap).
pub const EVENT_TYPES: usize = 3;

/// Size of the damage roll made by a trap against an empty-handed player.
pub const TRAP_DAMAGE_RANGE: usize = 10;

/// Damage rolls strictly below this value are fatal.
pub const TRAP_DAMAGE_THRESHOLD: usize = 3;

/// Tunable rules for events and traps.
///
/// # Examples
///
/// ```
/// use labyrinth::RulesConfig;
///
/// let rules = RulesConfig::default();
/// assert_eq!(rules.event_probability, 10);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Exclusive upper bound of the "does an event fire" roll
    pub event_probability: usize,
    /// Exclusive upper bound of the event kind roll
    pub event_types: usize,
    /// Exclusive upper bound of the trap damage roll
    pub trap_damage_range: usize,
    /// Damage rolls below this kill an empty-handed player
    pub trap_damage_threshold: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            event_probability: EVENT_PROBABILITY,
            event_types: EVENT_TYPES,
            trap_damage_range: TRAP_DAMAGE_RANGE,
            trap_damage_threshold: TRAP_DAMAGE_THRESHOLD,
        }
    }
}

impl RulesConfig {
    /// Checks that every roll has a positive range and that the event kind
    /// range stays within the known kinds.
    pub fn validate(&self) -> LabyrinthResult<()> {
        if self.event_probability == 0 {
            return Err(LabyrinthError::InvalidConfig(
                "event_probability must be positive".to_string(),
            ));
        }
        if self.event_types == 0 || self.event_types > EVENT_TYPES {
            return Err(LabyrinthError::InvalidConfig(format!(
                "event_types must be between 1 and {}",
                EVENT_TYPES
            )));
        }
        if self.trap_damage_range == 0 {
            return Err(LabyrinthError::InvalidConfig(
                "trap_damage_range must be positive".to_string(),
            ));
        }
        if self.trap_damage_threshold > self.trap_damage_range {
            return Err(LabyrinthError::InvalidConfig(format!(
                "trap_damage_threshold ({}) exceeds trap_damage_range ({})",
                self.trap_damage_threshold, self.trap_damage_range
            )));
        }
        Ok(())
    }

    /// Parses and validates rules from a JSON document. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> LabyrinthResult<Self> {
        let rules: RulesConfig = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Loads rules from a JSON file.
    pub fn load_from_file(path: &Path) -> LabyrinthResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let rules = Self::from_json(&json)?;
        log::debug!("Loaded rules from {}: {:?}", path.display(), rules);
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_constants() {
        let rules = RulesConfig::default();
        assert_eq!(rules.event_probability, EVENT_PROBABILITY);
        assert_eq!(rules.event_types, EVENT_TYPES);
        assert_eq!(rules.trap_damage_range, TRAP_DAMAGE_RANGE);
        assert_eq!(rules.trap_damage_threshold, TRAP_DAMAGE_THRESHOLD);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rules = RulesConfig::from_json(r#"{ "trap_damage_threshold": 5 }"#).unwrap();
        assert_eq!(rules.trap_damage_threshold, 5);
        assert_eq!(rules.event_probability, EVENT_PROBABILITY);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            RulesConfig::from_json(r#"{ "event_probability": 0 }"#),
            Err(LabyrinthError::InvalidConfig(_))
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "event_types": 4 }"#),
            Err(LabyrinthError::InvalidConfig(_))
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "trap_damage_range": 2, "trap_damage_threshold": 3 }"#),
            Err(LabyrinthError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        assert!(matches!(
            RulesConfig::from_json("{ not json"),
            Err(LabyrinthError::Serde(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "event_probability": 4, "event_types": 2 }}"#).unwrap();

        let rules = RulesConfig::load_from_file(file.path()).unwrap();
        assert_eq!(rules.event_probability, 4);
        assert_eq!(rules.event_types, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RulesConfig::load_from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LabyrinthError::Io(_))));
    }
}
