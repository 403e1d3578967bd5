//! Event types used by the tick scheduler.
//!
//! Events provide a decoupled way for consumers to observe the scheduler
//! without holding references into it.
//!
//! Submodules:
//! - [`group`] – registration/unregistration notifications for tick groups
pub mod group;
