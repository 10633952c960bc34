use bevy::prelude::*;

use crate::flicker::controller::FlickerPattern;

/// Request to black out a flickering light.
/// A positive `duration` replaces the light's configured blackout duration.
#[derive(Message, Clone, Copy, Debug)]
pub struct TriggerBlackout {
    pub entity: Entity,
    pub duration: Option<f32>,
}

impl TriggerBlackout {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            duration: None,
        }
    }

    pub fn for_duration(entity: Entity, duration: f32) -> Self {
        Self {
            entity,
            duration: Some(duration),
        }
    }
}

/// Request to change a flickering light's timing and blackout probability
#[derive(Message, Clone, Copy, Debug)]
pub struct SetFlickerPattern {
    pub entity: Entity,
    pub pattern: FlickerPattern,
}

/// Fired when a light goes dark, randomly or on request
#[derive(Message, Clone, Copy, Debug)]
pub struct BlackoutStarted {
    pub entity: Entity,
    /// Elapsed time (seconds) at which the light comes back
    pub ends_at: f32,
    /// True when the blackout came from a [`TriggerBlackout`] request
    pub manual: bool,
}

/// Fired when a light comes back from a blackout
#[derive(Message, Clone, Copy, Debug)]
pub struct BlackoutEnded {
    pub entity: Entity,
}
