//! Part Classifier
//!
//! Partitions the renderable nodes of a scene graph into [`Category`]
//! groups using substring rules on each node's lowercased label.
//!
//! # Rule order
//!
//! First match wins:
//!
//! 1. **Composite**: label contains a composite keyword and the node has at
//!    least `min_slots` material slots. The node is listed under every
//!    slot-mapped category so each one can repaint its own slot.
//! 2. **Single object**: label names the whole object (`cottage`, `house`),
//!    or the node is the only renderable in the scene. Listed under walls.
//! 3. **Keyword**: the rule table, in order.
//! 4. **Default**: `other`.
//!
//! Classification has no failure mode; unmatched labels land in `other` and
//! an empty scene produces an empty index.

use smallvec::{SmallVec, smallvec};

use crate::parts::config::ClassifierConfig;
use crate::parts::manifest::{ManifestEntry, MatchRule, PartSummary};
use crate::parts::{Category, PartIndex};
use crate::scene::{SceneGraph, SceneNode};

/// Result of one classification pass.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub index: PartIndex,
    /// One entry per renderable node, in traversal order.
    pub manifest: Vec<ManifestEntry>,
    pub summary: PartSummary,
}

#[derive(Debug, Clone)]
pub struct PartClassifier {
    config: ClassifierConfig,
}

impl PartClassifier {
    /// Builds a classifier from a validated rule table. Keywords are lowercased.
    pub fn new(mut config: ClassifierConfig) -> Result<Self, crate::errors::ConfigError> {
        config.normalize();
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[must_use]
    pub fn classify(&self, scene: &SceneGraph) -> Classification {
        let renderables = scene.renderables();
        let sole_leaf = renderables.len() == 1;

        let mut index = PartIndex::new();
        let mut manifest = Vec::with_capacity(renderables.len());

        for &handle in &renderables {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };
            let (categories, rule) = self.classify_node(node, sole_leaf);
            log::trace!("Classified '{}' as {:?} ({rule})", node.label, categories.as_slice());

            for &category in &categories {
                index.push(category, handle);
            }
            manifest.push(ManifestEntry {
                node: handle,
                label: node.label.clone(),
                categories,
                rule,
                slot_count: node.slot_count(),
            });
        }

        let summary = PartSummary::collect(scene, &renderables, &index);
        log::info!(
            "Classified {} meshes ({} materials): walls={} roof={} doors={} windows={} other={}",
            summary.renderable_count,
            summary.material_count,
            summary.count(Category::Walls),
            summary.count(Category::Roof),
            summary.count(Category::Doors),
            summary.count(Category::Windows),
            summary.count(Category::Other),
        );

        Classification {
            index,
            manifest,
            summary,
        }
    }

    /// Classifies a single renderable node.
    fn classify_node(
        &self,
        node: &SceneNode,
        sole_leaf: bool,
    ) -> (SmallVec<[Category; 4]>, MatchRule) {
        let label = node.label.to_lowercase();
        let cfg = &self.config;

        if contains_any(&label, &cfg.composite.keywords)
            && node.slot_count() >= cfg.composite.min_slots
        {
            let categories: SmallVec<[Category; 4]> = cfg.slotted_categories().collect();
            if !categories.is_empty() {
                return (categories, MatchRule::Composite);
            }
        }

        if contains_any(&label, &cfg.single_object_keywords) {
            return (smallvec![Category::Walls], MatchRule::SingleObject);
        }
        if sole_leaf && cfg.sole_leaf_fallback {
            return (smallvec![Category::Walls], MatchRule::SoleLeaf);
        }

        for rule in &cfg.rules {
            if contains_any(&label, &rule.keywords) {
                return (smallvec![rule.category], MatchRule::Keyword);
            }
        }

        (smallvec![Category::Other], MatchRule::Default)
    }
}

impl Default for PartClassifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }
}

#[inline]
fn contains_any(label: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| label.contains(k.as_str()))
}

/// Classifies `scene` with the default rule table.
#[must_use]
pub fn classify(scene: &SceneGraph) -> Classification {
    PartClassifier::default().classify(scene)
}
