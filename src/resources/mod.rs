//! Resource Module
//!
//! Plain data carried by scene nodes and fed in by the host:
//!
//! - [`Material`] / [`MaterialBinding`]: per-node material slots
//! - [`color`]: `#rrggbb` parsing and formatting
//! - [`Input`]: platform-agnostic pointer state

pub mod color;
pub mod input;
pub mod material;

pub use input::{ButtonState, Input, MouseButton};
pub use material::{Material, MaterialBinding};
