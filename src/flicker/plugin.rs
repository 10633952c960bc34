use bevy::prelude::*;

use crate::flicker::events::{BlackoutEnded, BlackoutStarted, SetFlickerPattern, TriggerBlackout};
use crate::flicker::random::FlickerRng;
use crate::flicker::sets::FlickerSet;
use crate::flicker::systems::{
    animate_flickering_lights, handle_blackout_requests, handle_flicker_pattern_changes,
    initialize_flicker_controllers,
};

/// Drives every [`FlickerController`](crate::flicker::FlickerController) in the world.
/// Requires `Time`, which `DefaultPlugins` (or `TimePlugin`) provides.
pub fn plugin(app: &mut App) {
    app.init_resource::<FlickerRng>()
        .add_message::<TriggerBlackout>()
        .add_message::<SetFlickerPattern>()
        .add_message::<BlackoutStarted>()
        .add_message::<BlackoutEnded>()
        .configure_sets(
            Update,
            (FlickerSet::Initialize, FlickerSet::Control, FlickerSet::Animate).chain(),
        )
        .add_systems(
            Update,
            (
                initialize_flicker_controllers.in_set(FlickerSet::Initialize),
                (handle_flicker_pattern_changes, handle_blackout_requests)
                    .chain()
                    .in_set(FlickerSet::Control),
                animate_flickering_lights.in_set(FlickerSet::Animate),
            ),
        );
}
