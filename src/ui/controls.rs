use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::parts::Category;
use crate::resources::color;
use crate::settings::ControlBinding;

/// Maps UI color control ids to categories.
///
/// Inputs from unknown controls or with unparsable values are dropped with
/// a log line; the page keeps working even if some controls are missing.
#[derive(Debug, Clone, Default)]
pub struct ColorControls {
    bindings: FxHashMap<String, Category>,
}

impl ColorControls {
    #[must_use]
    pub fn new(bindings: &[ControlBinding]) -> Self {
        let mut map = FxHashMap::default();
        for b in bindings {
            if let Some(previous) = map.insert(b.id.clone(), b.category) {
                log::warn!("Control '{}' rebound from {previous} to {}", b.id, b.category);
            }
        }
        Self { bindings: map }
    }

    #[must_use]
    pub fn category_of(&self, control_id: &str) -> Option<Category> {
        self.bindings.get(control_id).copied()
    }

    /// Control ids bound to `category`, for hosts wiring up their listeners.
    #[must_use]
    pub fn controls_for(&self, category: Category) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .bindings
            .iter()
            .filter(|&(_, &c)| c == category)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Resolves a control event to a category color.
    #[must_use]
    pub fn resolve(&self, control_id: &str, value: &str) -> Option<(Category, Vec3)> {
        let Some(category) = self.category_of(control_id) else {
            log::debug!("Ignoring input from unbound control '{control_id}'");
            return None;
        };
        match color::parse_hex(value) {
            Ok(c) => Some((category, c)),
            Err(e) => {
                log::warn!("Ignoring input from '{control_id}': {e}");
                None
            }
        }
    }
}
