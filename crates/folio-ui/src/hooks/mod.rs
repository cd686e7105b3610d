//! Hooks backing the hero section's three concerns.

mod motion;
mod reveal;
mod viewport;

pub use motion::use_motion_gate;
pub use reveal::use_reveal_sequencer;
pub use viewport::use_viewport_monitor;
