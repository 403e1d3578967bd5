//! Group definitions loaded from a configuration file.
//!
//! A [`TickerConfig`] is a JSON-defined list of
//! [`GroupParams`](crate::params::GroupParams), letting applications declare
//! their tick groups in data instead of code.
//!
//! # Configuration File Format
//!
//! ```json
//! {
//!   "groups": [
//!     { "name": "ai", "interval": 0.25 },
//!     { "name": "autosave", "interval": 30.0, "real_time": true },
//!     { "name": "debug_overlay", "interval": 0.5, "enabled": false }
//!   ]
//! }
//! ```
//!
//! `enabled` defaults to true and `real_time` to false when omitted.

use log::{info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::group::{GroupId, TickGroup, compare_names};
use crate::params::GroupParams;
use crate::resources::ticker::Ticker;

/// A set of group definitions persisted as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TickerConfig {
    /// Parameter sets for the groups to create.
    pub groups: Vec<GroupParams>,
}

impl TickerConfig {
    /// Load group definitions from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let config: TickerConfig = serde_json::from_str(&file_content)?;
        Ok(config)
    }

    /// Parse group definitions from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write the definitions to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Names that appear more than once, after whitespace normalization.
    ///
    /// Duplicate names are legal but make `find` ambiguous (it returns the
    /// first registration), so callers usually want to warn on them.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut duplicates: Vec<String> = Vec::new();
        for params in &self.groups {
            let normalized: String = params.name.chars().filter(|c| !c.is_whitespace()).collect();
            if !seen.insert(normalized) && !duplicates.iter().any(|d| compare_names(d, &params.name))
            {
                duplicates.push(params.name.clone());
            }
        }
        duplicates
    }

    /// Create and register one empty group per definition.
    ///
    /// Returns the handles in definition order. Duplicate names and clashes
    /// with already-registered groups are logged, not rejected.
    pub fn register_all(&self, ticker: &mut Ticker) -> Vec<GroupId> {
        for name in self.duplicate_names() {
            warn!("ticker config defines duplicate group name '{}'", name);
        }
        let ids = self
            .groups
            .iter()
            .map(|params| {
                if ticker.contains_name(&params.name) {
                    warn!(
                        "ticker already has a group named '{}'; find() will keep returning the first",
                        params.name
                    );
                }
                ticker.register(TickGroup::new(params.clone()))
            })
            .collect();
        info!("registered {} tick groups from config", self.groups.len());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_defaults() {
        let config = TickerConfig::from_json(
            r#"{"groups":[
                {"name":"ai","interval":0.25},
                {"name":"autosave","interval":30.0,"real_time":true},
                {"name":"overlay","interval":0.5,"enabled":false}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.groups.len(), 3);
        assert!(config.groups[0].enabled);
        assert!(!config.groups[0].real_time);
        assert!(config.groups[1].real_time);
        assert!(!config.groups[2].enabled);
    }

    #[test]
    fn register_all_creates_findable_groups() {
        let config = TickerConfig::from_json(
            r#"{"groups":[{"name":"ai","interval":0.25},{"name":"fx","interval":0.1}]}"#,
        )
        .unwrap();
        let mut ticker = Ticker::new();
        let ids = config.register_all(&mut ticker);
        assert_eq!(ids.len(), 2);
        assert_eq!(ticker.find("ai"), Some(ids[0]));
        assert_eq!(ticker.find("fx"), Some(ids[1]));
    }

    #[test]
    fn duplicate_names_are_reported_whitespace_insensitively() {
        let config = TickerConfig::from_json(
            r#"{"groups":[
                {"name":"ai","interval":0.25},
                {"name":"a i","interval":0.5},
                {"name":"fx","interval":0.1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.duplicate_names(), vec!["a i".to_string()]);
    }

    #[test]
    fn unique_names_report_no_duplicates() {
        let config = TickerConfig {
            groups: vec![GroupParams::new("ai", 0.25), GroupParams::new("fx", 0.1)],
        };
        assert_eq!(config.duplicate_names(), Vec::<String>::new());
    }

    #[test]
    fn file_round_trip() {
        let config = TickerConfig {
            groups: vec![
                GroupParams::new("ai", 0.25),
                GroupParams::new("autosave", 30.0).with_real_time(true),
            ],
        };
        let path = std::env::temp_dir().join("ticksystem_config_test.json");
        let path = path.to_string_lossy().to_string();
        config.save_to_file(&path).unwrap();
        let loaded = TickerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.groups, config.groups);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TickerConfig::from_json("{\"groups\": [{\"name\":").is_err());
        assert!(TickerConfig::load_from_file("/nonexistent/ticker.json").is_err());
    }
}
