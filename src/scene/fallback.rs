//! Procedural stand-in scene.
//!
//! Substituted by the viewer when the model loader fails, so the UI always
//! reaches an interactive state. Labels are chosen so every keyword rule of
//! the default classifier table has at least one member.

use glam::Vec3;

use crate::resources::Material;
use crate::resources::color::from_bytes;
use crate::scene::SceneGraph;

pub const FALLBACK_ROOT_LABEL: &str = "FallbackCottage";

/// Default part colors, matching the authoring palette of multi-part cottages.
pub const WALL_COLOR: Vec3 = Vec3::new(0.82, 0.71, 0.55);
pub const ROOF_COLOR: Vec3 = Vec3::new(0.55, 0.27, 0.07);
pub const DOOR_COLOR: Vec3 = Vec3::new(0.40, 0.26, 0.13);
pub const WINDOW_COLOR: Vec3 = Vec3::new(0.53, 0.81, 0.92);
pub const WINDOW_OPACITY: f32 = 0.7;

/// Builds the fixed fallback scene: one group with six labeled parts.
#[must_use]
pub fn fallback_scene() -> SceneGraph {
    let mut scene = SceneGraph::new("Scene");
    let house = scene.add_group(scene.root(), FALLBACK_ROOT_LABEL);

    scene.add_mesh(house, "Walls_Exterior", Material::new(WALL_COLOR).with_name("Fallback_Walls"));
    scene.add_mesh(house, "Roof_Shingles", Material::new(ROOF_COLOR).with_name("Fallback_Roof"));
    scene.add_mesh(house, "Front_Door", Material::new(DOOR_COLOR).with_name("Fallback_Door"));

    let glass = Material::new(WINDOW_COLOR)
        .with_name("Fallback_Glass")
        .with_opacity(WINDOW_OPACITY);
    scene.add_mesh(house, "Window_Left", glass.clone());
    scene.add_mesh(house, "Window_Right", glass);

    // Matches no keyword rule; lands in `other`.
    scene.add_mesh(house, "Chimney", Material::new(from_bytes(0x70, 0x70, 0x70)).with_name("Fallback_Stone"));

    scene
}
