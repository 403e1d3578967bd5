//! Scheduler systems.
//!
//! This module groups the ECS systems that drive the tick scheduler each
//! frame.
//!
//! Submodules overview
//! - [`tick`] – advance the ticker and forward group notifications
//! - [`time`] – update simulation time and deltas

pub mod tick;
pub mod time;
