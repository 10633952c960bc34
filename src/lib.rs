pub mod cli;
pub mod demo;
pub mod flicker;
pub mod prelude;

pub use demo::plugin as demo_plugin;
pub use flicker::plugin as flicker_plugin;
