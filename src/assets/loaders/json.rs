//! JSON scene description loader.
//!
//! ```json
//! {
//!   "label": "Cottage",
//!   "children": [
//!     { "label": "CottageBody", "materials": [
//!         { "name": "Cottage_Walls", "color": "#d1b58c" },
//!         { "name": "Cottage_Roof", "color": "#8c4512" },
//!         { "name": "Cottage_Doors", "color": "#664221" },
//!         { "name": "Cottage_Windows", "color": "#87cfeb", "opacity": 0.7 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A node without `materials` is a group; one entry makes a single-material
//! mesh, several entries a multi-slot mesh in the listed order.

use std::path::Path;

use serde::Deserialize;

use crate::assets::ModelLoader;
use crate::errors::AssetError;
use crate::resources::{Material, MaterialBinding, color};
use crate::scene::{NodeHandle, SceneGraph, SceneNode};

#[derive(Debug, Deserialize)]
struct NodeDesc {
    #[serde(default)]
    label: String,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    materials: Option<Vec<MaterialDesc>>,
    #[serde(default)]
    children: Vec<NodeDesc>,
}

#[derive(Debug, Deserialize)]
struct MaterialDesc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default)]
    opacity: Option<f32>,
}

fn default_color() -> String {
    "#ffffff".to_string()
}

/// Loads [`SceneGraph`]s from JSON scene descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSceneLoader;

impl JsonSceneLoader {
    pub fn parse_str(json: &str) -> Result<SceneGraph, AssetError> {
        let desc: NodeDesc = serde_json::from_str(json)?;
        build_scene(&desc)
    }

    pub fn parse_slice(bytes: &[u8]) -> Result<SceneGraph, AssetError> {
        let desc: NodeDesc = serde_json::from_slice(bytes)?;
        build_scene(&desc)
    }
}

impl ModelLoader for JsonSceneLoader {
    fn load(&self, path: &Path) -> Result<SceneGraph, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_slice(&bytes)
    }
}

fn build_scene(root: &NodeDesc) -> Result<SceneGraph, AssetError> {
    let mut scene = SceneGraph::new(root.label.clone());
    let root_handle = scene.root();
    if let Some(node) = scene.get_node_mut(root_handle) {
        node.visible = root.visible.unwrap_or(true);
        node.material = build_binding(root)?;
    }

    let mut stack: Vec<(&NodeDesc, NodeHandle)> =
        root.children.iter().rev().map(|c| (c, root_handle)).collect();

    while let Some((desc, parent)) = stack.pop() {
        let mut node = SceneNode::new(desc.label.clone());
        node.visible = desc.visible.unwrap_or(true);
        node.material = build_binding(desc)?;

        let handle = scene.add_to_parent(node, parent);
        stack.extend(desc.children.iter().rev().map(|c| (c, handle)));
    }

    Ok(scene)
}

fn build_binding(desc: &NodeDesc) -> Result<Option<MaterialBinding>, AssetError> {
    let Some(materials) = &desc.materials else {
        return Ok(None);
    };
    let invalid = |reason: String| AssetError::InvalidMaterial {
        label: desc.label.clone(),
        reason,
    };

    if materials.is_empty() {
        return Err(invalid("empty material list".to_string()));
    }

    let mut slots = Vec::with_capacity(materials.len());
    for (i, m) in materials.iter().enumerate() {
        let rgb = color::parse_hex(&m.color).map_err(|e| invalid(format!("slot {i}: {e}")))?;
        let mut material = Material::new(rgb);
        material.name.clone_from(&m.name);
        if let Some(opacity) = m.opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(invalid(format!("slot {i}: opacity {opacity} outside 0..=1")));
            }
            material = material.with_opacity(opacity);
        }
        slots.push(material);
    }

    Ok(Some(MaterialBinding::from_slots(slots)))
}
