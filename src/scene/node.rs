use crate::resources::MaterialBinding;
use crate::scene::NodeHandle;

/// A scene node as produced by a model loader.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: handle to the parent node (`None` for the root)
/// - `children`: ordered child handles
///
/// # Renderable leaves
///
/// A node with a [`MaterialBinding`] is a renderable leaf, regardless of
/// whether it also has children. Group nodes carry no binding.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub label: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub visible: bool,
    pub material: Option<MaterialBinding>,
}

impl SceneNode {
    /// Creates a group node.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: None,
            children: Vec::new(),
            visible: true,
            material: None,
        }
    }

    /// Creates a renderable node bound to the given materials.
    #[must_use]
    pub fn with_material(label: impl Into<String>, material: impl Into<MaterialBinding>) -> Self {
        let mut node = Self::new(label);
        node.material = Some(material.into());
        node
    }

    #[inline]
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.material.is_some()
    }

    /// Number of material slots, 0 for group nodes.
    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.material.as_ref().map_or(0, MaterialBinding::slot_count)
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}
