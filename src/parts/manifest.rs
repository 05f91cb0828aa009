use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use crate::parts::{Category, PartIndex};
use crate::scene::{NodeHandle, SceneGraph};

/// Which classification rule placed a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    Composite,
    SingleObject,
    SoleLeaf,
    Keyword,
    Default,
}

impl MatchRule {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            MatchRule::Composite => "composite",
            MatchRule::SingleObject => "single-object",
            MatchRule::SoleLeaf => "sole-leaf",
            MatchRule::Keyword => "keyword",
            MatchRule::Default => "default",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One line of the human-readable part listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub node: NodeHandle,
    pub label: String,
    pub categories: SmallVec<[Category; 4]>,
    pub rule: MatchRule,
    pub slot_count: usize,
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.label.is_empty() { "<unnamed>" } else { &self.label };
        write!(f, "{label} [{}] ->", self.rule)?;
        for (i, c) in self.categories.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{c}")?;
        }
        Ok(())
    }
}

/// Counts shown alongside the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartSummary {
    pub renderable_count: usize,
    /// Distinct materials: named slots deduplicated by name, unnamed slots counted individually.
    pub material_count: usize,
    pub category_counts: [usize; Category::COUNT],
}

impl PartSummary {
    pub(crate) fn collect(scene: &SceneGraph, renderables: &[NodeHandle], index: &PartIndex) -> Self {
        let mut names: FxHashSet<&str> = FxHashSet::default();
        let mut unnamed = 0;

        for node in renderables.iter().filter_map(|&h| scene.get_node(h)) {
            let Some(binding) = &node.material else {
                continue;
            };
            for material in binding.iter() {
                match material.name.as_deref() {
                    Some(name) => {
                        names.insert(name);
                    }
                    None => unnamed += 1,
                }
            }
        }

        let mut category_counts = [0; Category::COUNT];
        for (category, nodes) in index.iter() {
            category_counts[category.index()] = nodes.len();
        }

        Self {
            renderable_count: renderables.len(),
            material_count: names.len() + unnamed,
            category_counts,
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.category_counts[category.index()]
    }
}
