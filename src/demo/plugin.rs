use bevy::prelude::*;

use crate::demo::resources::DemoConfig;
use crate::demo::systems::{demo_input, log_blackouts, setup_demo_scene};
use crate::flicker::FlickerSet;

/// Demo scene: a row of flickering lamps with keyboard controls.
/// Expects `flicker::plugin` to be added as well.
pub fn plugin(app: &mut App) {
    app.init_resource::<DemoConfig>()
        .add_systems(Startup, setup_demo_scene)
        .add_systems(Update, demo_input.before(FlickerSet::Control))
        .add_systems(Update, log_blackouts.after(FlickerSet::Animate));
}
