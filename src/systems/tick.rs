//! Per-frame scheduler systems.
//!
//! Each frame, after [`update_world_time`](crate::systems::time::update_world_time)
//! has run:
//!
//! 1. [`update_ticker`] feeds the current deltas into the
//!    [`Ticker`](crate::resources::ticker::Ticker), which advances every
//!    group's accumulator and invokes groups whose interval elapsed
//! 2. [`forward_group_events`] republishes registration notifications from
//!    the ticker's channel as `Messages<GroupEvent>` so plain ECS systems
//!    can read them with a `MessageReader`

use bevy_ecs::prelude::*;

use crate::events::group::GroupEvent;
use crate::resources::ticker::{GroupEventBridge, Ticker};
use crate::resources::worldtime::WorldTime;

/// Advance the ticker by the current frame's deltas.
///
/// Scaled-time groups advance by `WorldTime::delta`, real-time groups by
/// `WorldTime::unscaled_delta`.
pub fn update_ticker(world_time: Res<WorldTime>, mut ticker: ResMut<Ticker>) {
    ticker.update(world_time.delta, world_time.unscaled_delta);
}

/// Drain pending group notifications into the message queue.
pub fn forward_group_events(
    bridge: Res<GroupEventBridge>,
    mut writer: MessageWriter<GroupEvent>,
) {
    writer.write_batch(bridge.rx.try_iter());
}
