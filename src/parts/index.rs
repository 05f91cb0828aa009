use crate::parts::Category;
use crate::scene::NodeHandle;

/// Category → ordered node handles, built by classification.
///
/// Membership is exclusive except for composite meshes, which are listed
/// under every slot-mapped category. The index is rebuilt wholesale on each
/// model load and never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartIndex {
    entries: [Vec<NodeHandle>; Category::COUNT],
}

impl PartIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, category: Category, handle: NodeHandle) {
        self.entries[category.index()].push(handle);
    }

    /// Nodes listed under `category`, in traversal order.
    #[inline]
    #[must_use]
    pub fn get(&self, category: Category) -> &[NodeHandle] {
        &self.entries[category.index()]
    }

    #[inline]
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.entries[category.index()].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn contains(&self, category: Category, handle: NodeHandle) -> bool {
        self.get(category).contains(&handle)
    }

    /// Every category `handle` is listed under.
    #[must_use]
    pub fn categories_of(&self, handle: NodeHandle) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.contains(c, handle))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[NodeHandle])> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.entries[c.index()].as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn composite_handle_lists_every_category() {
        let mut keys: SlotMap<NodeHandle, ()> = SlotMap::with_key();
        let body = keys.insert(());
        let door = keys.insert(());

        let mut index = PartIndex::new();
        for c in [Category::Walls, Category::Roof] {
            index.push(c, body);
        }
        index.push(Category::Doors, door);

        assert_eq!(index.categories_of(body), vec![Category::Walls, Category::Roof]);
        assert_eq!(index.categories_of(door), vec![Category::Doors]);
        assert_eq!(index.count(Category::Other), 0);
        assert!(!index.is_empty());
    }
}
