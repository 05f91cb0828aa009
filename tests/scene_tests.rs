//! Scene Graph Tests
//!
//! Tests for:
//! - SceneGraph: node creation, hierarchy, removal
//! - Traversal order and renderable collection
//! - Fallback scene contents

use glam::Vec3;
use house_viewer::scene::fallback::FALLBACK_ROOT_LABEL;
use house_viewer::scene::fallback_scene;
use house_viewer::{Material, MaterialBinding, SceneGraph, SceneNode};

// ============================================================================
// Node Creation & Removal
// ============================================================================

#[test]
fn new_scene_has_only_a_root() {
    let scene = SceneGraph::new("Model");
    assert_eq!(scene.node_count(), 1);
    assert_eq!(scene.label(scene.root()), Some("Model"));
    assert!(scene.renderables().is_empty());
}

#[test]
fn added_nodes_are_linked_to_their_parent() {
    let mut scene = SceneGraph::empty();
    let group = scene.add_group(scene.root(), "Group");
    let mesh = scene.add_mesh(group, "Mesh", Material::default());

    let group_node = scene.get_node(group).unwrap();
    assert_eq!(group_node.parent(), Some(scene.root()));
    assert_eq!(group_node.children(), &[mesh]);
    assert!(!group_node.is_renderable());

    let mesh_node = scene.get_node(mesh).unwrap();
    assert_eq!(mesh_node.parent(), Some(group));
    assert!(mesh_node.is_renderable());
    assert_eq!(mesh_node.slot_count(), 1);
}

#[test]
fn stale_parent_attaches_to_root() {
    let mut scene = SceneGraph::empty();
    let group = scene.add_group(scene.root(), "Temp");
    scene.remove_node(group);

    let orphan = scene.add_to_parent(SceneNode::new("Orphan"), group);
    assert_eq!(scene.get_node(orphan).unwrap().parent(), Some(scene.root()));
}

#[test]
fn remove_node_drops_whole_subtree() {
    let mut scene = SceneGraph::empty();
    let group = scene.add_group(scene.root(), "Porch");
    let step = scene.add_mesh(group, "Step", Material::default());
    let keep = scene.add_mesh(scene.root(), "Roof", Material::default());

    scene.remove_node(group);

    assert!(scene.get_node(group).is_none());
    assert!(scene.get_node(step).is_none());
    assert_eq!(scene.renderables(), vec![keep]);
    assert_eq!(scene.get_node(scene.root()).unwrap().children(), &[keep]);
}

#[test]
fn root_cannot_be_removed() {
    let mut scene = SceneGraph::empty();
    scene.remove_node(scene.root());
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn material_mut_only_reaches_renderables() {
    let mut scene = SceneGraph::empty();
    let group = scene.add_group(scene.root(), "Group");
    let mesh = scene.add_mesh(group, "Mesh", Material::default());

    assert!(scene.material_mut(group).is_none());
    let binding = scene.material_mut(mesh).unwrap();
    binding.slot_mut(0).unwrap().set_color(Vec3::X);
    assert_eq!(scene.get_node(mesh).unwrap().material.as_ref().unwrap().slot(0).unwrap().color, Vec3::X);
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn traversal_is_depth_first_pre_order() {
    let mut scene = SceneGraph::new("Root");
    let root = scene.root();
    let a = scene.add_group(root, "A");
    scene.add_group(a, "A1");
    scene.add_group(a, "A2");
    scene.add_group(root, "B");

    let mut labels = Vec::new();
    scene.traverse(|_, node| labels.push(node.label.clone()));
    assert_eq!(labels, ["Root", "A", "A1", "A2", "B"]);
}

#[test]
fn deep_hierarchy_does_not_overflow() {
    let mut scene = SceneGraph::empty();
    let mut parent = scene.root();
    for i in 0..10_000 {
        parent = scene.add_group(parent, format!("Level{i}"));
    }
    let leaf = scene.add_mesh(parent, "Leaf", Material::default());

    assert_eq!(scene.renderables(), vec![leaf]);
}

#[test]
fn renderable_root_is_collected() {
    let mut scene = SceneGraph::new("Body");
    let root = scene.root();
    scene.get_node_mut(root).unwrap().material = Some(MaterialBinding::from(Material::default()));

    assert_eq!(scene.renderables(), vec![root]);
}

// ============================================================================
// Fallback Scene
// ============================================================================

#[test]
fn fallback_scene_has_labeled_parts() {
    let scene = fallback_scene();
    let labels: Vec<&str> = scene
        .renderables()
        .into_iter()
        .filter_map(|h| scene.label(h))
        .collect();

    assert_eq!(
        labels,
        ["Walls_Exterior", "Roof_Shingles", "Front_Door", "Window_Left", "Window_Right", "Chimney"]
    );

    let mut groups = Vec::new();
    scene.traverse(|_, node| {
        if !node.is_renderable() {
            groups.push(node.label.clone());
        }
    });
    assert!(groups.iter().any(|g| g == FALLBACK_ROOT_LABEL));
}

#[test]
fn fallback_windows_are_translucent() {
    let scene = fallback_scene();
    for handle in scene.renderables() {
        let node = scene.get_node(handle).unwrap();
        let material = node.material.as_ref().unwrap().slot(0).unwrap();
        if node.label.starts_with("Window") {
            assert!(material.transparent);
            assert!(material.opacity < 1.0);
        } else {
            assert!(!material.transparent);
        }
    }
}
