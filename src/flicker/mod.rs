pub mod components;
pub mod controller;
pub mod events;
pub mod plugin;
pub mod random;
pub mod sets;
pub mod sink;
pub mod systems;
pub mod time;

pub use components::*;
pub use controller::*;
pub use events::*;
pub use plugin::*;
pub use random::*;
pub use sets::*;
pub use sink::*;
pub use systems::*;
pub use time::*;
