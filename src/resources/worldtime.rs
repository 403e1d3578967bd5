use bevy_ecs::prelude::Resource;

/// Per-frame time resource feeding the ticker.
///
/// `delta` already has `time_scale` applied; `unscaled_delta` is the raw
/// frame delta. Real-time tick groups advance on the latter.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds elapsed since startup.
    pub elapsed: f32,
    /// Scaled delta of the current frame.
    pub delta: f32,
    /// Raw delta of the current frame, ignoring `time_scale`.
    pub unscaled_delta: f32,
    /// Factor applied to the raw delta. 0 pauses scaled time.
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            unscaled_delta: 0.0,
            time_scale: 1.0,
        }
    }
}
