//! Tick System library.
//!
//! A decoupled tick scheduler: named groups of callbacks invoked at
//! configurable fixed intervals, independent of the host's per-frame update.
//! Core types are plain values; [`resources`] and [`systems`] integrate them
//! into a `bevy_ecs` world.

pub mod callback;
pub mod events;
pub mod group;
pub mod params;
pub mod resources;
pub mod systems;
