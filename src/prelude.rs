pub use bevy::prelude::*;

// Re-export components
pub use crate::demo::components::*;
pub use crate::flicker::components::*;
pub use crate::flicker::controller::*;

// Re-export messages, resources and capabilities
pub use crate::flicker::events::*;
pub use crate::flicker::random::*;
pub use crate::flicker::sets::*;
pub use crate::flicker::sink::*;
pub use crate::flicker::time::*;
