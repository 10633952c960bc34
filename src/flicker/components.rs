use bevy::prelude::*;

/// Sends a flicker controller's output to the light on another entity
/// instead of a light on its own entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlickerTarget(pub Entity);

impl FlickerTarget {
    /// The entity whose light a controller on `owner` should drive.
    pub fn resolve(target: Option<&FlickerTarget>, owner: Entity) -> Entity {
        target.map_or(owner, |target| target.0)
    }
}
