//! Parameter bundle for tick groups.
//!
//! [`GroupParams`] carries everything that configures a group's firing
//! behavior: its name, the interval between invocations, whether it is
//! enabled, and whether it advances on real (unscaled) time. This is the
//! only state the system serializes; see
//! [`TickerConfig`](crate::resources::tickconfig::TickerConfig).

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing intervals for equality.
pub const INTERVAL_TOLERANCE: f32 = 1e-4;

/// Configuration values for a [`TickGroup`](crate::group::TickGroup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupParams {
    /// Group name, used for registry lookups.
    pub name: String,
    /// Seconds between invocations. Values <= 0 disable the timer path.
    pub interval: f32,
    /// Whether the group fires at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Advance on unscaled time instead of scaled game time.
    #[serde(default)]
    pub real_time: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for GroupParams {
    /// name = "TickGroup", interval = 0.05, enabled = true, real_time = false.
    fn default() -> Self {
        GroupParams {
            name: "TickGroup".to_string(),
            interval: 0.05,
            enabled: true,
            real_time: false,
        }
    }
}

impl GroupParams {
    /// Create parameters with the given name and interval.
    ///
    /// `enabled` defaults to true and `real_time` to false.
    pub fn new(name: impl Into<String>, interval: f32) -> Self {
        GroupParams {
            name: name.into(),
            interval,
            enabled: true,
            real_time: false,
        }
    }

    /// Builder-style toggle for the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder-style toggle for real-time advancement.
    pub fn with_real_time(mut self, real_time: bool) -> Self {
        self.real_time = real_time;
        self
    }

    /// Overwrite all fields from another parameter set.
    pub fn set(&mut self, other: &GroupParams) {
        self.name = other.name.clone();
        self.interval = other.interval;
        self.enabled = other.enabled;
        self.real_time = other.real_time;
    }

    /// Selectively overwrite fields; `None` leaves a field unchanged.
    pub fn apply(
        &mut self,
        name: Option<&str>,
        interval: Option<f32>,
        enabled: Option<bool>,
        real_time: Option<bool>,
    ) {
        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(interval) = interval {
            self.interval = interval;
        }
        if let Some(enabled) = enabled {
            self.enabled = enabled;
        }
        if let Some(real_time) = real_time {
            self.real_time = real_time;
        }
    }
}

impl PartialEq for GroupParams {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && (self.interval - other.interval).abs() < INTERVAL_TOLERANCE
            && self.enabled == other.enabled
            && self.real_time == other.real_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let p = GroupParams::default();
        assert_eq!(p.name, "TickGroup");
        assert!((p.interval - 0.05).abs() < f32::EPSILON);
        assert!(p.enabled);
        assert!(!p.real_time);
    }

    #[test]
    fn equality_tolerates_small_interval_difference() {
        let a = GroupParams::new("g", 0.1);
        let b = GroupParams::new("g", 0.100_05);
        assert_eq!(a, b);
        let c = GroupParams::new("g", 0.101);
        assert_ne!(a, c);
    }

    #[test]
    fn apply_skips_none_fields() {
        let mut p = GroupParams::new("g", 0.5);
        p.apply(None, None, Some(false), None);
        assert_eq!(p.name, "g");
        assert!((p.interval - 0.5).abs() < f32::EPSILON);
        assert!(!p.enabled);
        assert!(!p.real_time);
    }

    #[test]
    fn set_overwrites_everything() {
        let mut p = GroupParams::default();
        let other = GroupParams::new("other", 1.0)
            .with_enabled(false)
            .with_real_time(true);
        p.set(&other);
        assert_eq!(p, other);
    }

    #[test]
    fn serde_round_trip_with_defaults() {
        let json = r#"{"name":"ai","interval":0.25}"#;
        let p: GroupParams = serde_json::from_str(json).unwrap();
        assert!(p.enabled);
        assert!(!p.real_time);
        let back = serde_json::to_string(&p).unwrap();
        let again: GroupParams = serde_json::from_str(&back).unwrap();
        assert_eq!(p, again);
    }
}
