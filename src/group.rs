//! Tick groups: named, interval-driven callback collections.
//!
//! A [`TickGroup`] owns its [`GroupParams`](crate::params::GroupParams) and
//! an ordered list of [`TickCallback`](crate::callback::TickCallback)
//! handles. Groups are plain values; registering one with the
//! [`Ticker`](crate::resources::ticker::Ticker) transfers ownership and
//! yields a [`GroupId`] handle for later access.
//!
//! # Invocation Order
//!
//! `invoke` runs callbacks in reverse-insertion order (last added fires
//! first). Combined with the ticker's snapshot-based firing, a callback can
//! queue removal of itself or an earlier-added sibling without another
//! callback being skipped or invoked twice.

use crate::callback::TickCallback;
use crate::params::GroupParams;

/// Opaque handle to a group registered with a ticker.
///
/// Ids are never reused within a ticker. Operations against an id whose
/// group has been unregistered are safe no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) u64);

/// A named set of callbacks sharing one firing interval and policy.
#[derive(Debug, Default)]
pub struct TickGroup {
    /// Firing configuration for this group.
    pub params: GroupParams,
    callbacks: Vec<TickCallback>,
}

impl TickGroup {
    /// Create an empty group with the given parameters.
    pub fn new(params: GroupParams) -> Self {
        TickGroup {
            params,
            callbacks: Vec::new(),
        }
    }

    /// Create a group pre-populated with callbacks.
    ///
    /// Duplicate handles in the input are dropped, keeping the first.
    pub fn with_callbacks(
        params: GroupParams,
        callbacks: impl IntoIterator<Item = TickCallback>,
    ) -> Self {
        let mut group = TickGroup::new(params);
        for cb in callbacks {
            group.add(cb);
        }
        group
    }

    /// Append a callback. No-op if the same handle is already present.
    pub fn add(&mut self, callback: TickCallback) {
        if self.callbacks.contains(&callback) {
            return;
        }
        self.callbacks.push(callback);
    }

    /// Remove a callback by identity. No-op if absent.
    pub fn remove(&mut self, callback: &TickCallback) {
        if let Some(pos) = self.callbacks.iter().position(|c| c == callback) {
            self.callbacks.remove(pos);
        }
    }

    /// Drop all callbacks. Idempotent.
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// Whether the given callback handle is registered.
    pub fn contains(&self, callback: &TickCallback) -> bool {
        self.callbacks.contains(callback)
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether the group has no callbacks.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invoke all callbacks in reverse-insertion order.
    ///
    /// No-op when the group is disabled. This is the manual firing path;
    /// groups with `interval <= 0` only ever fire through here.
    pub fn invoke(&self) {
        if !self.params.enabled {
            return;
        }
        for cb in self.callbacks.iter().rev() {
            cb.invoke();
        }
    }

    /// Clone the callback list in insertion order.
    ///
    /// The ticker iterates a snapshot so callbacks can mutate the live list
    /// through queued operations while a firing is in progress.
    pub fn snapshot(&self) -> Vec<TickCallback> {
        self.callbacks.clone()
    }

    /// Whitespace-insensitive name comparison.
    ///
    /// `"Test Group"` matches a group named `"TestGroup"`.
    pub fn compare_name(&self, name: &str) -> bool {
        compare_names(&self.params.name, name)
    }
}

/// Compare two group names ignoring all spaces.
pub fn compare_names(a: &str, b: &str) -> bool {
    let mut ai = a.chars().filter(|c| !c.is_whitespace());
    let mut bi = b.chars().filter(|c| !c.is_whitespace());
    loop {
        match (ai.next(), bi.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting_callback() -> (TickCallback, Arc<AtomicU32>) {
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let cb = TickCallback::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (cb, count)
    }

    #[test]
    fn add_rejects_duplicate_identity() {
        let (cb, _) = counting_callback();
        let mut group = TickGroup::new(GroupParams::default());
        group.add(cb.clone());
        group.add(cb.clone());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let (a, _) = counting_callback();
        let (b, _) = counting_callback();
        let mut group = TickGroup::new(GroupParams::default());
        group.add(a);
        group.remove(&b);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn invoke_runs_all_callbacks() {
        let (a, count_a) = counting_callback();
        let (b, count_b) = counting_callback();
        let group = TickGroup::with_callbacks(GroupParams::default(), [a, b]);
        group.invoke();
        assert_eq!(count_a.load(Ordering::SeqCst), 1);
        assert_eq!(count_b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invoke_is_noop_when_disabled() {
        let (cb, count) = counting_callback();
        let params = GroupParams::default().with_enabled(false);
        let group = TickGroup::with_callbacks(params, [cb]);
        group.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn invoke_runs_in_reverse_insertion_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let o1 = order.clone();
        let o2 = order.clone();
        let first = TickCallback::new(move || o1.lock().unwrap().push("first"));
        let second = TickCallback::new(move || o2.lock().unwrap().push("second"));
        let group = TickGroup::with_callbacks(GroupParams::default(), [first, second]);
        group.invoke();
        assert_eq!(*order.lock().unwrap(), vec!["second", "first"]);
    }

    #[test]
    fn name_comparison_ignores_spaces() {
        let group = TickGroup::new(GroupParams::new("TestGroup", 0.1));
        assert!(group.compare_name("Test Group"));
        assert!(group.compare_name(" TestGroup "));
        assert!(!group.compare_name("TestGroup2"));
    }
}
