//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `tickconfig` – JSON-defined tick group sets
//! - `ticker` – scheduler and registry of all active tick groups
//! - `worldtime` – simulation time, deltas, and time scale
pub mod tickconfig;
pub mod ticker;
pub mod worldtime;
