use bevy::prelude::*;

use crate::flicker::components::FlickerTarget;
use crate::flicker::controller::{FlickerController, FlickerStep};
use crate::flicker::events::{BlackoutEnded, BlackoutStarted, SetFlickerPattern, TriggerBlackout};
use crate::flicker::random::FlickerRng;
use crate::flicker::sink::{BoundLight, LightQueryData};

/// Binds newly added controllers to their light and writes the base state.
/// The bound entity is fixed from here on: a controller whose target has no light stays inactive
/// for good, and a `FlickerTarget` added or changed later is not followed.
pub fn initialize_flicker_controllers(
    mut controllers: Query<
        (Entity, &mut FlickerController, Option<&FlickerTarget>),
        Added<FlickerController>,
    >,
    mut lights: Query<LightQueryData>,
) {
    for (entity, mut controller, target) in controllers.iter_mut() {
        let sink_entity = FlickerTarget::resolve(target, entity);
        let mut sink = lights
            .get_mut(sink_entity)
            .ok()
            .map(BoundLight::from)
            .filter(|light| light.is_bound());

        if controller.initialize(sink.as_mut()) {
            controller.bind_entity(sink_entity);
        } else {
            debug!(
                "Flickering light {:?} has no light on {:?}, effect disabled",
                entity, sink_entity
            );
        }
    }
}

/// Advances every active controller by one frame
pub fn animate_flickering_lights(
    time: Res<Time>,
    mut rng: ResMut<FlickerRng>,
    mut controllers: Query<(Entity, &mut FlickerController)>,
    mut lights: Query<LightQueryData>,
    mut started: MessageWriter<BlackoutStarted>,
    mut ended: MessageWriter<BlackoutEnded>,
) {
    for (entity, mut controller) in controllers.iter_mut() {
        let Some(sink_entity) = controller.bound_entity() else {
            continue;
        };

        // The bound light may have been despawned since initialization.
        let Ok(item) = lights.get_mut(sink_entity) else {
            continue;
        };
        let mut sink = BoundLight::from(item);

        let outcome = controller.tick_with_clock(&*time, &mut *rng, &mut sink);

        if outcome.blackout_ended {
            debug!("Flickering light {:?} back from blackout", entity);
            ended.write(BlackoutEnded { entity });
        }
        if outcome.step == FlickerStep::BlackoutStarted {
            debug!(
                "Flickering light {:?} blacked out until {:.2}s",
                entity,
                controller.blackout_end_time()
            );
            started.write(BlackoutStarted {
                entity,
                ends_at: controller.blackout_end_time(),
                manual: false,
            });
        }
    }
}

/// Applies [`SetFlickerPattern`] requests
pub fn handle_flicker_pattern_changes(
    mut requests: MessageReader<SetFlickerPattern>,
    mut controllers: Query<&mut FlickerController>,
) {
    for request in requests.read() {
        let Ok(mut controller) = controllers.get_mut(request.entity) else {
            warn!(
                "Flicker pattern change for {:?}, which has no flicker controller",
                request.entity
            );
            continue;
        };
        controller.apply_pattern(request.pattern);
    }
}

/// Applies [`TriggerBlackout`] requests, darkening the light immediately.
/// Controllers without a light still take the requested duration.
pub fn handle_blackout_requests(
    time: Res<Time>,
    mut requests: MessageReader<TriggerBlackout>,
    mut controllers: Query<&mut FlickerController>,
    mut lights: Query<LightQueryData>,
    mut started: MessageWriter<BlackoutStarted>,
) {
    let now = time.elapsed_secs();
    for request in requests.read() {
        let Ok(mut controller) = controllers.get_mut(request.entity) else {
            warn!(
                "Blackout requested for {:?}, which has no flicker controller",
                request.entity
            );
            continue;
        };

        let light = controller
            .bound_entity()
            .and_then(|sink_entity| lights.get_mut(sink_entity).ok());
        match light {
            Some(item) => {
                let mut sink = BoundLight::from(item);
                controller.trigger_emergency_blackout(now, request.duration, &mut sink);
            }
            None => controller.trigger_emergency_blackout(now, request.duration, &mut ()),
        }

        if controller.is_blackout() {
            started.write(BlackoutStarted {
                entity: request.entity,
                ends_at: controller.blackout_end_time(),
                manual: true,
            });
        }
    }
}
