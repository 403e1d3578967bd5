//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The current
/// `time_scale` is applied to produce the scaled delta; the raw value is
/// kept as `unscaled_delta` for real-time tick groups.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.unscaled_delta = dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_time_scale() {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        world.resource_mut::<WorldTime>().time_scale = 0.5;

        update_world_time(&mut world, 0.2);

        let wt = *world.resource::<WorldTime>();
        assert!((wt.delta - 0.1).abs() < 1e-6);
        assert!((wt.unscaled_delta - 0.2).abs() < 1e-6);
        assert!((wt.elapsed - 0.1).abs() < 1e-6);
    }
}
