use bevy::prelude::*;

/// Marker for a lamp entity, the owner of a flicker controller
#[derive(Component)]
pub struct Lamp;

/// Marker for the light-emitting child of a lamp
#[derive(Component)]
pub struct LampBulb;
