//! Utility Module
//!
//! - [`OrbitControls`]: damped camera orbit controller
//! - [`FpsCounter`]: frame rate measurement

pub mod fps_counter;
pub mod orbit_control;

pub use fps_counter::FpsCounter;
pub use orbit_control::OrbitControls;
