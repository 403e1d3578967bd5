//! Cloneable callback handles for tick groups.
//!
//! A [`TickCallback`] wraps a zero-argument closure behind an `Arc` so the
//! same callback can be held by both the caller (for later removal) and the
//! group's list. Equality is pointer identity: two handles compare equal
//! only when they were cloned from the same `new` call, which is what lets
//! a group reject duplicate registrations and remove callbacks by identity.

use std::fmt;
use std::sync::Arc;

/// Handle to a callback invoked when a tick group fires.
///
/// Clone the handle and keep one copy if the callback should be removable
/// later; a freshly wrapped closure is a distinct identity even if the code
/// is textually identical.
#[derive(Clone)]
pub struct TickCallback(Arc<dyn Fn() + Send + Sync + 'static>);

impl TickCallback {
    /// Wrap a closure into a callback handle.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        TickCallback(Arc::new(f))
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl PartialEq for TickCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TickCallback {}

impl fmt::Debug for TickCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickCallback({:p})", Arc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn clones_share_identity() {
        let a = TickCallback::new(|| {});
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_wraps_are_distinct() {
        let a = TickCallback::new(|| {});
        let b = TickCallback::new(|| {});
        assert_ne!(a, b);
    }

    #[test]
    fn invoke_runs_closure() {
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let cb = TickCallback::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        cb.invoke();
        cb.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
