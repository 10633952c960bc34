use clap::Parser;

use crate::flicker::FlickerSettings;

/// Command line options for the flickering light demo
#[derive(Parser, Debug, Clone)]
#[command(name = "flickering-light", version, about = "Procedural flickering light demo")]
pub struct Cli {
    /// Seed for the flicker random source (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Steady intensity of each lamp, in lumens
    #[arg(long, default_value_t = FlickerSettings::default().base_intensity)]
    pub base_intensity: f32,

    /// Lowest fraction of the multiplied intensity a flicker may drop to
    #[arg(long, default_value_t = FlickerSettings::default().flicker_intensity_floor)]
    pub floor: f32,

    /// Mean seconds between flicker changes
    #[arg(long, default_value_t = FlickerSettings::default().flicker_speed)]
    pub speed: f32,

    /// Random jitter (±seconds) on the flicker interval
    #[arg(long, default_value_t = FlickerSettings::default().flicker_variance)]
    pub variance: f32,

    /// Blackout probability per second
    #[arg(long, default_value_t = FlickerSettings::default().blackout_chance)]
    pub blackout_chance: f32,

    /// Seconds each blackout lasts
    #[arg(long, default_value_t = FlickerSettings::default().blackout_duration)]
    pub blackout_duration: f32,

    /// Number of lamps to spawn
    #[arg(long, default_value_t = 3)]
    pub lamps: u32,
}

impl Cli {
    pub fn flicker_settings(&self) -> FlickerSettings {
        FlickerSettings {
            base_intensity: self.base_intensity,
            flicker_intensity_floor: self.floor,
            flicker_speed: self.speed,
            flicker_variance: self.variance,
            blackout_chance: self.blackout_chance,
            blackout_duration: self.blackout_duration,
            ..FlickerSettings::default()
        }
    }
}
