//! UI wiring helpers
//!
//! The viewer does not own any widgets. [`ColorControls`] translates the
//! host's control events into category colors.

pub mod controls;

pub use controls::ColorControls;
