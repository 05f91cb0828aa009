//! Classifier rule table.
//!
//! Classification is driven entirely by data: the ordered keyword rules,
//! the slot each category owns on composite meshes, and the composite
//! detection policy. Adding a keyword or retuning the composite threshold is
//! a configuration change.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::parts::Category;

/// Keyword rule for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    /// Substrings matched against the lowercased node label.
    pub keywords: Vec<String>,
    /// Material slot this category owns on multi-slot meshes.
    #[serde(default)]
    pub slot_index: Option<usize>,
}

impl CategoryRule {
    #[must_use]
    pub fn new(category: Category, keywords: &[&str], slot_index: Option<usize>) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            slot_index,
        }
    }
}

/// When a single mesh stands in for several categories at once.
///
/// Tuned to assets authored as one mesh with one material per part, in slot
/// order walls, roof, doors, windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositePolicy {
    pub keywords: Vec<String>,
    pub min_slots: usize,
}

impl Default for CompositePolicy {
    fn default() -> Self {
        Self {
            keywords: vec!["cottage".to_string()],
            min_slots: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Checked in order, first match wins.
    pub rules: Vec<CategoryRule>,
    pub composite: CompositePolicy,
    /// Labels naming the whole object; such a mesh is controlled as walls.
    pub single_object_keywords: Vec<String>,
    /// Route a model's only renderable mesh to walls whatever its label.
    pub sole_leaf_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                CategoryRule::new(Category::Walls, &["wall", "siding", "exterior"], Some(0)),
                CategoryRule::new(Category::Roof, &["roof", "shingle", "tile"], Some(1)),
                CategoryRule::new(Category::Doors, &["door", "entrance"], Some(2)),
                CategoryRule::new(Category::Windows, &["window", "glass", "pane"], Some(3)),
            ],
            composite: CompositePolicy::default(),
            single_object_keywords: vec!["cottage".to_string(), "house".to_string()],
            sole_leaf_fallback: true,
        }
    }
}

impl ClassifierConfig {
    /// Lowercases every keyword so matching can compare against a lowercased label.
    pub fn normalize(&mut self) {
        let lower = |list: &mut Vec<String>| {
            for k in list.iter_mut() {
                *k = k.trim().to_lowercase();
            }
        };
        for rule in &mut self.rules {
            lower(&mut rule.keywords);
        }
        lower(&mut self.composite.keywords);
        lower(&mut self.single_object_keywords);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: FxHashSet<Category> = FxHashSet::default();
        let mut slots: FxHashMap<usize, Category> = FxHashMap::default();

        for rule in &self.rules {
            if rule.category == Category::Other {
                return Err(ConfigError::RuleForDefaultCategory);
            }
            if !seen.insert(rule.category) {
                return Err(ConfigError::DuplicateCategory(rule.category));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::EmptyKeyword(format!("rule '{}'", rule.category)));
            }
            if let Some(slot) = rule.slot_index
                && let Some(first) = slots.insert(slot, rule.category)
            {
                return Err(ConfigError::DuplicateSlot {
                    slot,
                    first,
                    second: rule.category,
                });
            }
        }

        if self.composite.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::EmptyKeyword("composite policy".to_string()));
        }
        if self.single_object_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::EmptyKeyword("single-object keywords".to_string()));
        }
        if self.composite.min_slots == 0 {
            return Err(ConfigError::ZeroCompositeSlots);
        }
        Ok(())
    }

    /// Material slot owned by `category` on multi-slot meshes.
    #[must_use]
    pub fn slot_for(&self, category: Category) -> Option<usize> {
        self.rules
            .iter()
            .find(|r| r.category == category)
            .and_then(|r| r.slot_index)
    }

    /// Categories a composite mesh is listed under, in rule order.
    pub fn slotted_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules
            .iter()
            .filter(|r| r.slot_index.is_some())
            .map(|r| r.category)
    }
}
