use bevy::prelude::*;

use crate::flicker::FlickerSettings;

/// Spacing between lamps along the X axis, in world units
pub const LAMP_SPACING: f32 = 6.0;

/// Height of each lamp's light above the floor
pub const LAMP_HEIGHT: f32 = 3.0;

/// Duration of the blackout triggered with the `B` key, in seconds
pub const EMERGENCY_BLACKOUT_SECS: f32 = 1.0;

/// Scene configuration for the demo, usually built from the command line
#[derive(Resource, Debug, Clone)]
pub struct DemoConfig {
    pub settings: FlickerSettings,
    pub lamps: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            settings: FlickerSettings::default(),
            lamps: 3,
        }
    }
}

impl DemoConfig {
    /// X position of lamp `index`, with the row centred on the origin
    pub fn lamp_x(&self, index: u32) -> f32 {
        let offset = (self.lamps.saturating_sub(1)) as f32 / 2.0;
        (index as f32 - offset) * LAMP_SPACING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lamp_row_is_centred() {
        let config = DemoConfig {
            lamps: 3,
            ..default()
        };
        assert_eq!(config.lamp_x(0), -LAMP_SPACING);
        assert_eq!(config.lamp_x(1), 0.0);
        assert_eq!(config.lamp_x(2), LAMP_SPACING);
    }

    #[test]
    fn single_lamp_sits_at_origin() {
        let config = DemoConfig {
            lamps: 1,
            ..default()
        };
        assert_eq!(config.lamp_x(0), 0.0);
    }
}
