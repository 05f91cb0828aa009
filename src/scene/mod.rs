//! Scene graph module
//!
//! - [`SceneGraph`]: arena-backed node hierarchy of a loaded model
//! - [`SceneNode`]: label, hierarchy links and optional material binding
//! - [`Camera`]: perspective viewing camera
//! - [`fallback`]: procedural scene substituted when loading fails

pub mod camera;
pub mod fallback;
pub mod node;
pub mod scene;

pub use camera::Camera;
pub use fallback::fallback_scene;
pub use node::SceneNode;
pub use scene::SceneGraph;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
