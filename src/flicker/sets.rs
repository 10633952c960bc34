use bevy::prelude::*;

/// Ordering of the flicker systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlickerSet {
    /// Binding newly added controllers to their lights
    Initialize,
    /// Applying pattern changes and blackout requests
    Control,
    /// Per-frame flicker update
    Animate,
}
