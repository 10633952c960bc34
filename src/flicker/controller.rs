use bevy::color::Mix;
use bevy::prelude::*;

use crate::flicker::random::RandomSource;
use crate::flicker::sink::LightSink;
use crate::flicker::time::TimeSource;

/// Lower bound of the per-flicker intensity multiplier
pub const MIN_INTENSITY_MULTIPLIER: f32 = 0.3;
/// Upper bound of the per-flicker intensity multiplier
pub const MAX_INTENSITY_MULTIPLIER: f32 = 1.2;
/// Multipliers below this tint the light towards the dim color
pub const DIM_COLOR_THRESHOLD: f32 = 0.7;
/// Default base intensity in lumens, bright enough for a wall torch
pub const DEFAULT_BASE_INTENSITY: f32 = 70_000.0;

/// Configuration for a flickering light. All durations are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerSettings {
    /// Intensity written when the light is steady
    pub base_intensity: f32,
    /// Lowest fraction of the multiplied intensity a flicker may drop to
    pub flicker_intensity_floor: f32,
    /// Mean time a flicker value is held before the next one is drawn
    pub flicker_speed: f32,
    /// Random jitter (±) applied to `flicker_speed`
    pub flicker_variance: f32,
    /// Blackout probability per second of frame time
    pub blackout_chance: f32,
    pub blackout_duration: f32,
    pub base_color: Color,
    /// Color the light drifts towards on dim flickers
    pub dim_color: Color,
}

impl FlickerSettings {
    pub fn new(base_intensity: f32) -> Self {
        Self {
            base_intensity,
            ..default()
        }
    }
}

impl Default for FlickerSettings {
    fn default() -> Self {
        Self {
            base_intensity: DEFAULT_BASE_INTENSITY,
            flicker_intensity_floor: 0.5,
            flicker_speed: 0.1,
            flicker_variance: 0.05,
            blackout_chance: 0.02,
            blackout_duration: 0.3,
            base_color: Color::srgb(1.0, 0.8, 0.6),
            dim_color: Color::srgb(0.8, 0.4, 0.2),
        }
    }
}

/// The three tunables that make up a flicker "character".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerPattern {
    pub speed: f32,
    pub variance: f32,
    pub blackout_chance: f32,
}

impl FlickerPattern {
    /// Slow, gentle flicker that never blacks out
    pub const STEADY: Self = Self {
        speed: 0.25,
        variance: 0.1,
        blackout_chance: 0.0,
    };
    /// Fast buzzing tube with occasional dropouts
    pub const FLUORESCENT: Self = Self {
        speed: 0.04,
        variance: 0.02,
        blackout_chance: 0.1,
    };
    /// Failing bulb that drops out constantly
    pub const DYING: Self = Self {
        speed: 0.08,
        variance: 0.07,
        blackout_chance: 0.8,
    };
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlickerStep {
    /// No light was bound at initialization
    Inactive,
    /// Still inside a blackout, intensity forced to zero
    Dark,
    /// A random blackout began this tick
    BlackoutStarted,
    /// A new flicker value was drawn and written
    Recomputed { multiplier: f32 },
    /// The previous flicker value is still being held
    Held,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub step: FlickerStep,
    /// A blackout expired at the start of this tick
    pub blackout_ended: bool,
}

impl TickOutcome {
    fn new(step: FlickerStep) -> Self {
        Self {
            step,
            blackout_ended: false,
        }
    }
}

/// Procedural flicker for one light: holds the configuration and the timing state.
///
/// Attach it to an entity carrying a light (or add a
/// [`FlickerTarget`](crate::flicker::FlickerTarget)) and the flicker systems drive it once per
/// frame. It can also be driven by hand through [`initialize`](Self::initialize) and
/// [`tick`](Self::tick).
#[derive(Component, Clone, Debug)]
pub struct FlickerController {
    settings: FlickerSettings,
    next_flicker_time: f32,
    is_blackout: bool,
    blackout_end_time: f32,
    active: bool,
    bound_entity: Option<Entity>,
}

impl FlickerController {
    pub fn new(settings: FlickerSettings) -> Self {
        Self {
            settings,
            next_flicker_time: 0.0,
            is_blackout: false,
            blackout_end_time: 0.0,
            active: false,
            bound_entity: None,
        }
    }

    pub fn settings(&self) -> &FlickerSettings {
        &self.settings
    }

    /// Whether a light was bound at initialization.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_blackout(&self) -> bool {
        self.is_blackout
    }

    pub fn blackout_end_time(&self) -> f32 {
        self.blackout_end_time
    }

    pub fn next_flicker_time(&self) -> f32 {
        self.next_flicker_time
    }

    /// Entity whose light was bound when the flicker systems initialized this controller.
    pub fn bound_entity(&self) -> Option<Entity> {
        self.bound_entity
    }

    /// Records the entity whose light this controller drives. The flicker systems call this once,
    /// after a successful [`initialize`](Self::initialize), and never rebind.
    pub fn bind_entity(&mut self, entity: Entity) {
        self.bound_entity = Some(entity);
    }

    /// Binds the controller to its light and writes the steady base state.
    /// Without a light the controller stays inactive and every tick is a no-op.
    pub fn initialize<S: LightSink + ?Sized>(&mut self, sink: Option<&mut S>) -> bool {
        let Some(sink) = sink else {
            self.active = false;
            return false;
        };

        sink.set_intensity(self.settings.base_intensity);
        sink.set_color(self.settings.base_color);
        self.active = true;
        true
    }

    /// Advances the flicker by one frame.
    ///
    /// Blackout takes precedence over flickering: while dark, nothing else is evaluated. A light
    /// leaving blackout is restored to its base state and may flicker again in the same tick.
    /// The blackout check is a per-frame trial with probability `blackout_chance * delta`, which
    /// only approximates a rate for short frames and saturates once the product reaches 1.
    pub fn tick<R, S>(&mut self, now: f32, delta: f32, random: &mut R, sink: &mut S) -> TickOutcome
    where
        R: RandomSource + ?Sized,
        S: LightSink + ?Sized,
    {
        if !self.active {
            return TickOutcome::new(FlickerStep::Inactive);
        }

        let mut blackout_ended = false;
        if self.is_blackout {
            if now >= self.blackout_end_time {
                self.is_blackout = false;
                sink.set_intensity(self.settings.base_intensity);
                sink.set_color(self.settings.base_color);
                blackout_ended = true;
            } else {
                sink.set_intensity(0.0);
                return TickOutcome::new(FlickerStep::Dark);
            }
        }

        let step = if random.value() < self.settings.blackout_chance * delta {
            self.trigger_blackout(now, sink);
            FlickerStep::BlackoutStarted
        } else if now >= self.next_flicker_time {
            let multiplier = self.recompute(now, random, sink);
            FlickerStep::Recomputed { multiplier }
        } else {
            FlickerStep::Held
        };

        TickOutcome {
            step,
            blackout_ended,
        }
    }

    /// [`tick`](Self::tick) reading `now` and `delta` from a clock.
    pub fn tick_with_clock<C, R, S>(
        &mut self,
        clock: &C,
        random: &mut R,
        sink: &mut S,
    ) -> TickOutcome
    where
        C: TimeSource + ?Sized,
        R: RandomSource + ?Sized,
        S: LightSink + ?Sized,
    {
        self.tick(clock.now(), clock.delta(), random, sink)
    }

    fn recompute<R, S>(&mut self, now: f32, random: &mut R, sink: &mut S) -> f32
    where
        R: RandomSource + ?Sized,
        S: LightSink + ?Sized,
    {
        let settings = &self.settings;
        let multiplier = random.range(MIN_INTENSITY_MULTIPLIER, MAX_INTENSITY_MULTIPLIER);
        let hold = settings.flicker_speed
            + random.range(-settings.flicker_variance, settings.flicker_variance);
        let floor = random.range(settings.flicker_intensity_floor, 1.0);

        sink.set_intensity(settings.base_intensity * multiplier * floor);
        sink.set_color(flicker_color(settings, multiplier));

        // A negative hold leaves this in the past, so the next tick draws again.
        self.next_flicker_time = now + hold;
        multiplier
    }

    /// Forces the light dark for `blackout_duration` seconds starting at `now`.
    /// Ignored when no light was bound.
    pub fn trigger_blackout<S: LightSink + ?Sized>(&mut self, now: f32, sink: &mut S) {
        if !self.active {
            return;
        }

        self.is_blackout = true;
        self.blackout_end_time = now + self.settings.blackout_duration;
        sink.set_intensity(0.0);
    }

    /// Manual blackout. A positive `duration` replaces the configured blackout duration
    /// (for this and every later blackout) before the blackout starts.
    pub fn trigger_emergency_blackout<S: LightSink + ?Sized>(
        &mut self,
        now: f32,
        duration: Option<f32>,
        sink: &mut S,
    ) {
        if let Some(duration) = duration.filter(|d| *d > 0.0) {
            self.settings.blackout_duration = duration;
        }
        self.trigger_blackout(now, sink);
    }

    /// Replaces the flicker timing and blackout probability. Values are not validated:
    /// a variance larger than the speed can produce negative holds, which makes the light
    /// redraw on every tick while they last.
    pub fn set_flicker_pattern(&mut self, speed: f32, variance: f32, blackout_probability: f32) {
        self.settings.flicker_speed = speed;
        self.settings.flicker_variance = variance;
        self.settings.blackout_chance = blackout_probability;
    }

    pub fn apply_pattern(&mut self, pattern: FlickerPattern) {
        self.set_flicker_pattern(pattern.speed, pattern.variance, pattern.blackout_chance);
    }
}

impl Default for FlickerController {
    fn default() -> Self {
        Self::new(FlickerSettings::default())
    }
}

/// Dim flickers drift from the dim color towards the base color; bright ones stay on base.
fn flicker_color(settings: &FlickerSettings, multiplier: f32) -> Color {
    if multiplier < DIM_COLOR_THRESHOLD {
        let dim = settings.dim_color.to_srgba();
        let base = settings.base_color.to_srgba();
        Color::Srgba(dim.mix(&base, multiplier))
    } else {
        settings.base_color
    }
}
