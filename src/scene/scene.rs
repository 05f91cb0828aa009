use slotmap::SlotMap;

use crate::resources::MaterialBinding;
use crate::scene::NodeHandle;
use crate::scene::node::SceneNode;

/// Scene graph of one loaded model.
///
/// Nodes live in an arena and reference each other by [`NodeHandle`]. The
/// graph always has exactly one root; an empty model is a root group with
/// no children. Handles held elsewhere (e.g. in a
/// [`PartIndex`](crate::parts::PartIndex)) are non-owning and simply stop
/// resolving once the graph is dropped or replaced.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: SlotMap<NodeHandle, SceneNode>,
    root: NodeHandle,
}

impl SceneGraph {
    /// Creates a graph holding only a root group with the given label.
    #[must_use]
    pub fn new(root_label: impl Into<String>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new(root_label));
        Self { nodes, root }
    }

    /// An empty scene, as substituted for a model that produced nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("Scene")
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Inserts `node` under `parent`.
    ///
    /// A stale parent handle falls back to the root so that a loader bug
    /// never drops nodes on the floor.
    pub fn add_to_parent(&mut self, mut node: SceneNode, parent: NodeHandle) -> NodeHandle {
        let parent = if self.nodes.contains_key(parent) {
            parent
        } else {
            log::warn!("Parent node not found while adding '{}', attaching to root", node.label);
            self.root
        };

        node.parent = Some(parent);
        node.children.clear();
        let handle = self.nodes.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    /// Adds an empty group node under `parent`.
    pub fn add_group(&mut self, parent: NodeHandle, label: impl Into<String>) -> NodeHandle {
        self.add_to_parent(SceneNode::new(label), parent)
    }

    /// Adds a renderable node under `parent`.
    pub fn add_mesh(
        &mut self,
        parent: NodeHandle,
        label: impl Into<String>,
        material: impl Into<MaterialBinding>,
    ) -> NodeHandle {
        self.add_to_parent(SceneNode::with_material(label, material), parent)
    }

    /// Removes `handle` and its whole subtree. The root cannot be removed.
    ///
    /// Handles into the removed subtree go stale; lookups through them
    /// return `None`.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        if handle == self.root {
            log::warn!("Refusing to remove the scene root");
            return;
        }
        let Some(parent) = self.nodes.get(handle).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != handle);
        }

        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            if let Some(node) = self.nodes.remove(h) {
                stack.extend(node.children);
            }
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle)
    }

    /// Returns the material binding of a renderable node.
    pub fn material_mut(&mut self, handle: NodeHandle) -> Option<&mut MaterialBinding> {
        self.nodes.get_mut(handle)?.material.as_mut()
    }

    #[must_use]
    pub fn label(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.label.as_str())
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Visits every node reachable from the root in depth-first pre-order.
    ///
    /// Iterative, so arbitrarily deep models cannot overflow the stack.
    pub fn traverse(&self, mut visit: impl FnMut(NodeHandle, &SceneNode)) {
        let mut stack = vec![self.root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            visit(handle, node);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Handles of all renderable nodes, in traversal order.
    #[must_use]
    pub fn renderables(&self) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        self.traverse(|handle, node| {
            if node.is_renderable() {
                out.push(handle);
            }
        });
        out
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::empty()
    }
}
