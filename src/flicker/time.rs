use bevy::prelude::*;

/// Monotonic frame clock, in seconds.
pub trait TimeSource {
    /// Time since startup.
    fn now(&self) -> f32;
    /// Time since the previous frame.
    fn delta(&self) -> f32;
}

impl<T: Default> TimeSource for Time<T> {
    fn now(&self) -> f32 {
        self.elapsed_secs()
    }

    fn delta(&self) -> f32 {
        self.delta_secs()
    }
}

/// A clock whose readings are set by hand, for driving a controller outside the ECS.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub now: f32,
    pub delta: f32,
}

impl FrameClock {
    pub fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }

    /// Moves the clock forward by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.now += delta;
        self.delta = delta;
    }
}

impl TimeSource for FrameClock {
    fn now(&self) -> f32 {
        self.now
    }

    fn delta(&self) -> f32 {
        self.delta
    }
}
